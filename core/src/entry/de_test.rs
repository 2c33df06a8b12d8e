#[cfg(test)]
mod tests {
    use crate::entry::{BenchmarkEntry, Field, de::*};
    use std::sync::Arc;

    #[test]
    fn test_from_json_str_keeps_object_order() {
        let json = r#"{"zeta": 1, "alpha": 2.5, "mid": "x"}"#;
        let val = from_json_str(json).unwrap();

        if let Field::Map(bag) = val {
            let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
            assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            assert_eq!(bag.get("zeta"), Some(&Field::Int(1)));
            assert_eq!(bag.get("alpha"), Some(&Field::Float(2.5)));
            assert_eq!(bag.get("mid"), Some(&Field::Str(Arc::from("x"))));
        } else {
            panic!("Expected Map, got {:?}", val);
        }
    }

    #[test]
    fn test_from_json_str_array() {
        let json = r#"[1, 2.5, "hello", true, null]"#;
        let val = from_json_str(json).unwrap();

        if let Field::List(list) = val {
            assert_eq!(list.len(), 5);
            assert_eq!(list[0], Field::Int(1));
            assert_eq!(list[1], Field::Float(2.5));
            assert_eq!(list[2], Field::Str(Arc::from("hello")));
            assert_eq!(list[3], Field::Bool(true));
            assert_eq!(list[4], Field::Nil);
        } else {
            panic!("Expected List, got {:?}", val);
        }
    }

    #[test]
    fn test_duplicate_key_last_value_wins_first_position_kept() {
        let json = r#"{"a": 1, "b": 2, "a": 3}"#;
        let Field::Map(bag) = from_json_str(json).unwrap() else {
            panic!("expected map");
        };
        let pairs: Vec<(&str, &Field)> = bag.iter().collect();
        assert_eq!(pairs, vec![("a", &Field::Int(3)), ("b", &Field::Int(2))]);
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let val = from_json_str("18446744073709551615").unwrap();
        assert!(matches!(val, Field::Float(_)));
    }

    #[test]
    fn test_entry_with_timing_key_is_recognized() {
        let entry = entry_from_json_str(r#"{"name": "sort", "mean_time_ms": 1.5, "size": 100}"#).unwrap();
        assert!(entry.is_recognized());
        assert_eq!(entry.name(), Some("sort"));
        assert_eq!(entry.size(), Some(&Field::Int(100)));
        // timing keys are pulled out of the opaque view
        assert!(entry.bag().get("mean_time_ms").is_none());
        assert!(entry.bag().get("name").is_some());
    }

    #[test]
    fn test_entry_without_timing_key_is_opaque() {
        let entry = entry_from_json_str(r#"{"name": "fit", "elapsed": 3}"#).unwrap();
        assert!(matches!(entry, BenchmarkEntry::Opaque { .. }));
        assert!(entry.timings().is_none());
    }

    #[test]
    fn test_entry_empty_or_missing_name() {
        let entry = entry_from_json_str(r#"{"name": "", "mean_time_ms": 1}"#).unwrap();
        assert_eq!(entry.name(), None);
        let entry = entry_from_json_str(r#"{"id": "x", "mean_time_ms": 1}"#).unwrap();
        assert_eq!(entry.name(), None);
        let entry = entry_from_json_str(r#"{"name": 7, "mean_time_ms": 1}"#).unwrap();
        assert_eq!(entry.name(), None);
    }

    #[test]
    fn test_entry_rejects_non_object() {
        let err = entry_from_json_str("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(from_json_str("{not json").is_err());
    }
}
