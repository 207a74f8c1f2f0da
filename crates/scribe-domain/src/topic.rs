//! Topic identifiers and the schema paths derived from them

/// Full-match pattern for a term identifier (lowercase snake style)
pub const ID_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

/// Full-match pattern for a topic: `namespace.name.vMAJOR[.MINOR]`
///
/// The version letter may be upper or lower case.
pub const TOPIC_PATTERN: &str = r"^[a-z]+\.[a-z0-9_]+\.[vV][0-9]+(\.[0-9]+)?$";

/// Derive the schema path for a single topic
///
/// Topics with fewer than three dot-segments have no schema and yield `None`.
/// Everything after the second segment is treated as the version and rejoined
/// with dots, so `ps.persona_state.v2.0` keeps its `v2.0` suffix intact.
///
/// # Examples
///
/// ```
/// use scribe_domain::derive_schema;
///
/// assert_eq!(
///     derive_schema("ps.persona_state.v2.0").as_deref(),
///     Some("schemas/ps/events/ps.persona_state.v2.0.schema.json"),
/// );
/// assert_eq!(derive_schema("ps.persona_state"), None);
/// ```
pub fn derive_schema(topic: &str) -> Option<String> {
    let parts: Vec<&str> = topic.split('.').collect();
    if parts.len() < 3 {
        return None;
    }

    let (namespace, name) = (parts[0], parts[1]);
    let version = parts[2..].join(".");
    Some(format!(
        "schemas/{namespace}/events/{namespace}.{name}.{version}.schema.json"
    ))
}

/// Derive one schema path per qualifying topic, preserving topic order
///
/// Topics that do not qualify are skipped silently rather than rejected.
pub fn derive_schemas<S: AsRef<str>>(topics: &[S]) -> Vec<String> {
    topics
        .iter()
        .filter_map(|topic| derive_schema(topic.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_only_version() {
        assert_eq!(
            derive_schema("mm.memory_slot.v1").as_deref(),
            Some("schemas/mm/events/mm.memory_slot.v1.schema.json")
        );
    }

    #[test]
    fn test_uppercase_version_letter_is_kept() {
        assert_eq!(
            derive_schema("ir.intent_route.V3").as_deref(),
            Some("schemas/ir/events/ir.intent_route.V3.schema.json")
        );
    }

    #[test]
    fn test_short_topics_are_dropped() {
        let topics = vec!["ps".to_string(), "ps.persona_state.v2.0".to_string(), "a.b".to_string()];
        assert_eq!(
            derive_schemas(&topics),
            vec!["schemas/ps/events/ps.persona_state.v2.0.schema.json".to_string()]
        );
    }

    #[test]
    fn test_empty_topic_list() {
        let topics: Vec<String> = Vec::new();
        assert!(derive_schemas(&topics).is_empty());
    }
}
