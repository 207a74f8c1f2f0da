//! Extraction steps
//!
//! Each step is a pure function over the trimmed input text and, where noted,
//! the results of earlier steps. [`Extractor`](crate::Extractor) runs them in
//! a fixed order; the order of fallbacks inside each step is significant.

use crate::config::ExtractorConfig;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Quotation styles in priority order: curly double, straight double,
/// curly single, straight single
static QUOTE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"“([^”]+)”").expect("static"),
        Regex::new(r#""([^"]+)""#).expect("static"),
        Regex::new(r"‘([^’]+)’").expect("static"),
        Regex::new(r"'([^']+)'").expect("static"),
    ]
});

static SNAKE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-z][a-z0-9_]+)\b").expect("static"));

static TOPIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z]+\.[a-z0-9_]+\.[vV][0-9]+(?:\.[0-9]+)?)\b").expect("static")
});

// "中文名叫/为/是" followed by optionally quoted text
static ZH_NAME_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"中文名(?:叫|为|是)[“"‘']?([^”"']+)[”"’']?"#).expect("static")
});

static EN_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 ]+[A-Za-z0-9]$").expect("static"));

// "也叫 / 又称 / 别名 / 或 / 又名", running to the next 。 or ； or line break
static ALIAS_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:也叫|又称|别名|或|又名)([^。；\n]+)").expect("static"));

static ALIAS_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[、,，/和或]").expect("static"));

// "工程口径 / 理由 / 说明" followed by a colon
static RATIONALE_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:工程口径|理由|说明)[:：]\s*([^。]+)").expect("static"));

/// Short tokens that look like identifiers but never name a term
const ID_BLACKLIST: &[&str] = &["ps", "v2", "v2_0"];

/// Characters stripped from both ends of an alias candidate
const ALIAS_TRIM: &[char] = &[' ', '。', '；', ';', '“', '”', '\'', '"'];

fn dedupe_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Collect quoted substrings
///
/// Patterns are applied one after another in priority order, so all curly
/// double quotes come before any straight double quote regardless of where
/// they sit in the text. Entries are trimmed, empties dropped, and duplicates
/// removed keeping the first occurrence.
pub fn extract_quotes(text: &str) -> Vec<String> {
    let found = QUOTE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    dedupe_preserving_order(found)
}

/// Find every topic-like token in text order, deduplicated
pub fn find_topics(text: &str) -> Vec<String> {
    dedupe_preserving_order(
        TOPIC_TOKEN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
    )
}

/// Guess the term identifier
///
/// Candidates are lowercase tokens with at least one underscore. A candidate
/// that matches the name segment of a topic wins; otherwise the first
/// candidate in text order.
pub fn guess_id(text: &str) -> Option<String> {
    let candidates: Vec<&str> = SNAKE_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|c| c.contains('_') && !ID_BLACKLIST.contains(c))
        .collect();

    let topic_names: HashSet<String> = find_topics(text)
        .iter()
        .filter_map(|topic| topic.split('.').nth(1).map(str::to_string))
        .collect();

    candidates
        .iter()
        .find(|c| topic_names.contains(**c))
        .or_else(|| candidates.first())
        .map(|c| c.to_string())
}

/// Find the canonical Chinese name
///
/// The "中文名叫" cue wins; otherwise the first quoted entry containing a CJK
/// character.
pub fn find_canonical_zh(text: &str, quotes: &[String]) -> Option<String> {
    if let Some(caps) = ZH_NAME_CUE.captures(text) {
        let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if !name.is_empty() {
            return Some(name.to_string());
        }
        return None;
    }

    quotes.iter().find(|q| q.chars().any(is_cjk)).cloned()
}

/// Title-case each underscore-separated word: `persona_state` -> `Persona State`
pub fn title_from_snake(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Find the canonical English name
///
/// The first quoted multi-word ASCII phrase wins; otherwise the identifier
/// is title-cased.
pub fn find_canonical_en(quotes: &[String], id: &str) -> String {
    quotes
        .iter()
        .find(|q| q.contains(' ') && EN_PHRASE.is_match(q))
        .cloned()
        .unwrap_or_else(|| title_from_snake(id))
}

/// Collect aliases
///
/// Cue-introduced lists come first, then every quoted entry. The combined
/// list drops canonical names and over-long entries, keeps the first of any
/// duplicates, and is cut to `config.max_aliases`.
pub fn find_aliases(
    text: &str,
    quotes: &[String],
    canonical_zh: &str,
    canonical_en: &str,
    config: &ExtractorConfig,
) -> Vec<String> {
    let cued = ALIAS_CUE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|segment| ALIAS_SEPARATOR.split(segment.as_str()))
        .map(|piece| piece.trim_matches(ALIAS_TRIM).to_string())
        .filter(|piece| !piece.is_empty());

    let candidates = cued
        .chain(quotes.iter().cloned())
        .filter(|alias| alias != canonical_zh && alias != canonical_en)
        .filter(|alias| alias.chars().count() <= config.max_alias_len);

    let mut aliases = dedupe_preserving_order(candidates);
    aliases.truncate(config.max_aliases);
    aliases
}

/// Find the rationale following a "工程口径/理由/说明:" cue, up to the next 。
pub fn find_rationale(text: &str) -> Option<String> {
    RATIONALE_CUE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
