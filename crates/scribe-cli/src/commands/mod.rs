//! Command implementations.

pub mod config;
pub mod extract;
pub mod tck;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::tck::execute_tck;
