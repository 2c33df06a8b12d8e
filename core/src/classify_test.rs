#[cfg(test)]
mod tests {
    use crate::classify::{OrderedName, classify};
    use crate::config::Config;
    use std::collections::BTreeSet;

    fn markers() -> BTreeSet<String> {
        Config::default().large_scale
    }

    #[test]
    fn test_partition_and_order() {
        let classified = classify(["scale_1000000", "foo", "scale_5"], &markers());
        assert_eq!(classified.large_scale, vec!["scale_1000000".to_string()]);
        assert_eq!(classified.regular, vec!["foo".to_string(), "scale_5".to_string()]);

        let order: Vec<&str> = classified.ordered().map(|n| n.name).collect();
        assert_eq!(order, vec!["foo", "scale_5", "scale_1000000"]);
    }

    #[test]
    fn test_large_scale_after_regular_even_when_alphabetically_first() {
        let classified = classify(["zeta", "scale_100000", "alpha", "scale_1e+05"], &markers());
        let order: Vec<&str> = classified.ordered().map(|n| n.name).collect();
        assert_eq!(order, vec!["alpha", "zeta", "scale_100000", "scale_1e+05"]);
    }

    #[test]
    fn test_sorting_is_bytewise() {
        let classified = classify(["b", "B", "a10", "a2"], &BTreeSet::new());
        assert_eq!(classified.regular, vec!["B", "a10", "a2", "b"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let classified = classify(["x", "x", "y"], &markers());
        assert_eq!(classified.len(), 2);
    }

    #[test]
    fn test_display_name_marks_large_scale() {
        let large = OrderedName {
            name: "scale_500000",
            large_scale: true,
        };
        let regular = OrderedName {
            name: "lm",
            large_scale: false,
        };
        assert_eq!(large.display_name(), "scale_500000**");
        assert_eq!(regular.display_name(), "lm");
    }

    #[test]
    fn test_empty_input() {
        let classified = classify(std::iter::empty(), &markers());
        assert!(classified.is_empty());
        assert_eq!(classified.ordered().count(), 0);
    }
}
