//! Scenario tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig, ExtractorError, DEFAULT_RATIONALE};

    const PERSONA_TEXT: &str = "persona_state 的中文名叫“人格状态”，英文名为 \"Persona State\"，也叫人格快照、角色状态。\n事件主题：ps.persona_state.v2.0，兼容 ps.persona_state.v1。\n工程口径：统一描述会话中角色的可观测状态。\n";

    #[test]
    fn test_minimal_success() {
        let text = "中文名叫“人格状态”。topic: ps.persona_state.v2.0";
        let records = Extractor::default().extract(text).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "persona_state");
        assert_eq!(record.canonical_zh, "人格状态");
        assert_eq!(record.canonical_en, "Persona State");
        assert_eq!(record.engineering_bindings.topics, vec!["ps.persona_state.v2.0"]);
        assert_eq!(
            record.engineering_bindings.schemas,
            vec!["schemas/ps/events/ps.persona_state.v2.0.schema.json"]
        );
        assert_eq!(record.rationale, DEFAULT_RATIONALE);
    }

    #[test]
    fn test_full_passage() {
        let records = Extractor::default().extract(PERSONA_TEXT).unwrap();
        let record = &records[0];

        assert_eq!(record.id, "persona_state");
        assert_eq!(record.canonical_zh, "人格状态");
        assert_eq!(record.canonical_en, "Persona State");
        assert_eq!(record.aliases, vec!["人格快照", "角色状态"]);
        assert_eq!(
            record.engineering_bindings.topics,
            vec!["ps.persona_state.v2.0", "ps.persona_state.v1"]
        );
        assert_eq!(record.rationale, "统一描述会话中角色的可观测状态");
    }

    #[test]
    fn test_missing_topic_rejected() {
        let text = "这是一个没有版本化主题的段落，只描述了 session_cache 的用途。";
        let err = Extractor::default().extract(text).unwrap_err();

        assert_eq!(err.kind(), "InvalidInput");
        assert!(matches!(err, ExtractorError::InvalidInput(_)));
        assert!(err.to_string().contains("No topics found"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let extractor = Extractor::default();
        assert!(extractor.extract("").unwrap().is_empty());
        assert!(extractor.extract("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_alias_cue_extraction() {
        let text = "中文名是“意图路由”，又称 intent router、意图分发；事件 ir.intent_route.v3";
        let record = Extractor::default().extract(text).unwrap().remove(0);

        assert!(record.aliases.contains(&"intent router".to_string()));
        assert!(record.aliases.contains(&"意图分发".to_string()));
        assert!(!record.aliases.contains(&record.canonical_zh));
        assert!(!record.aliases.contains(&record.canonical_en));
    }

    #[test]
    fn test_defaults_without_identifier() {
        let record = Extractor::default().extract("see a.b.v1 for details").unwrap().remove(0);

        assert_eq!(record.id, "term");
        assert_eq!(record.canonical_zh, "term");
        assert_eq!(record.canonical_en, "Term");
        assert!(record.aliases.is_empty());
    }

    #[test]
    fn test_configured_alias_cap() {
        let config = ExtractorConfig {
            max_aliases: 2,
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(config).unwrap();
        let record = extractor
            .extract("别名 甲、乙、丙、丁。topic ns.some_term.v1")
            .unwrap()
            .remove(0);

        assert_eq!(record.aliases, vec!["甲", "乙"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_alias_len: 0,
            ..ExtractorConfig::default()
        };
        let err = Extractor::new(config).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }

    #[test]
    fn test_repeat_runs_identical() {
        let extractor = Extractor::default();
        let first = extractor.extract(PERSONA_TEXT).unwrap();
        for _ in 0..5 {
            assert_eq!(extractor.extract(PERSONA_TEXT).unwrap(), first);
        }
    }
}
