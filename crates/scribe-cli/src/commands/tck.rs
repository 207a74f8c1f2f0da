//! Tck command implementation.

use crate::cli::TckArgs;
use crate::error::Result;
use scribe_extractor::Extractor;
use scribe_tck::{Harness, TckConfig};
use tracing::info;

/// Summary line printed after a green run.
pub const ALL_GREEN: &str = "TCK L0/L1/L2: ALL GREEN";

/// Execute the tck command.
pub fn execute_tck(args: TckArgs) -> Result<String> {
    let mut config = TckConfig::from_file(&args.config)?;
    if args.anchor.is_some() {
        config.anchor = args.anchor;
    }

    let report = Harness::new(config, Extractor::default()).run()?;
    info!(
        "{} rules fields, {} golden cases, {} runs on '{}'",
        report.required_fields, report.golden_cases, report.deterministic_runs, report.anchor
    );
    Ok(ALL_GREEN.to_string())
}
