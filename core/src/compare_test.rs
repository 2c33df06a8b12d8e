#[cfg(test)]
mod tests {
    use crate::compare::{ReportError, build_table, format_baseline};
    use crate::config::Config;
    use crate::entry::de::from_json_str;
    use crate::render::Placement;
    use crate::report::{ReportSet, Source};

    const R_DOC: &str = r#"{
        "core": [
            {"name": "lm", "mean_time_ms": 100.0},
            {"name": "glm", "median_time_ms": 40},
            {"name": "rf", "iterations": 5, "elapsed": 12}
        ],
        "scale": [
            {"name": "scale_1000000", "mean_time_ms": 5000},
            {"name": "zero", "mean_time_ms": 0}
        ]
    }"#;
    const CPU_PARALLEL_DOC: &str = r#"{
        "core": [
            {"name": "lm", "mean_time_ms": 5.0},
            {"name": "glm", "mean_time_ms": 2},
            {"name": "rf", "mean_time_ms": 1.5}
        ],
        "scale": [{"name": "scale_1000000", "mean_time_ms": 50}]
    }"#;
    const CPU_SERIAL_DOC: &str = r#"{
        "core": [{"name": "lm", "mean_time_ms": 50.0}, {"name": "glm", "mean_time_ms": 8}],
        "scale": [{"name": "scale_1000000", "mean_time_ms": 1000}]
    }"#;
    const GPU_DOC: &str = r#"{
        "core": [
            {"name": "lm", "mean_time_ms": 25.0},
            {"name": "glm", "mean_time_ms": 4},
            {"name": "only_gpu", "mean_time_ms": 3},
            {"name": "rf", "mean_time_ms": "bad"}
        ]
    }"#;

    fn full_set() -> ReportSet {
        ReportSet::from_documents([
            (Source::R, Some(from_json_str(R_DOC).unwrap())),
            (Source::RustCpuParallel, Some(from_json_str(CPU_PARALLEL_DOC).unwrap())),
            (Source::RustCpuSerial, Some(from_json_str(CPU_SERIAL_DOC).unwrap())),
            (Source::RustGpu, Some(from_json_str(GPU_DOC).unwrap())),
        ])
    }

    #[test]
    fn test_full_table() {
        let table = build_table(&full_set(), &Config::default()).unwrap();
        let expected = [
            "Name                  |      R      |  Rust (CPU)*  | Rust (GPU) |",
            "-----------------------------------------------------------------",
            "glm                   |   40.00ms   |  [5.0-20x]\u{00b9}   | [10.0x]\u{00b2}  |",
            "lm                    |  100.00ms   |  [2.0-20x]\u{00b9}   |  [4.0x]\u{00b2}  |",
            "only_gpu              |      -      |       -       |     -     |",
            "rf                    |   12.00ms   |   [?-8.0x]\u{00b9}   |     -     |",
            "zero                  |      -      |       -       |     -     |",
            "scale_1000000**       |  5000.00ms  |  [5.0-100x]\u{00b9}  |     -     |",
            "-----------------------------------------------------------------",
            "* Rust (CPU) column shows speedup range: Serial-Parallel vs R (e.g., 12-48x).",
            "\u{00b9} Winner (Fastest implementation)",
            "\u{00b2} Runner-up (Second fastest implementation)",
        ];
        assert_eq!(table.to_string().lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_name_only_in_candidate_has_no_ranking() {
        let table = build_table(&full_set(), &Config::default()).unwrap();
        let row = table.rows().iter().find(|r| r.name == "only_gpu").unwrap();
        assert_eq!(row.baseline, "-");
        assert!(row.cells.iter().all(|c| c.text == "-" && c.placement.is_none()));
    }

    #[test]
    fn test_winner_and_runner_up_on_row() {
        let table = build_table(&full_set(), &Config::default()).unwrap();
        let row = table.rows().iter().find(|r| r.name == "lm").unwrap();
        assert_eq!(row.cells[0].placement, Some(Placement::Winner));
        assert_eq!(row.cells[1].placement, Some(Placement::RunnerUp));
    }

    #[test]
    fn test_missing_baseline_source_aborts() {
        let set = ReportSet::from_documents([(Source::RustGpu, Some(from_json_str(GPU_DOC).unwrap()))]);
        let err = build_table(&set, &Config::default()).unwrap_err();
        assert_eq!(err, ReportError::MissingBaseline);
        assert_eq!(err.to_string(), "R baseline data not found or empty.");
    }

    #[test]
    fn test_baseline_without_named_entries_aborts() {
        let set = ReportSet::from_documents([(Source::R, Some(from_json_str(r#"{"core": [{"mean_time_ms": 1}]}"#).unwrap()))]);
        assert_eq!(build_table(&set, &Config::default()).unwrap_err(), ReportError::MissingBaseline);
    }

    #[test]
    fn test_baseline_only_renders_missing_candidates() {
        let set = ReportSet::from_documents([(Source::R, Some(from_json_str(R_DOC).unwrap()))]);
        let table = build_table(&set, &Config::default()).unwrap();
        assert_eq!(table.rows().len(), 5);
        for row in table.rows() {
            assert!(row.cells.iter().all(|c| c.text == "-"));
        }
    }

    #[test]
    fn test_custom_large_scale_markers() {
        let mut config = Config::default();
        config.large_scale = ["glm".to_string()].into_iter().collect();
        let table = build_table(&full_set(), &config).unwrap();
        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["lm", "only_gpu", "rf", "scale_1000000", "zero", "glm**"]);
    }

    #[test]
    fn test_format_baseline() {
        assert_eq!(format_baseline(Some(1.234)), "1.23ms");
        assert_eq!(format_baseline(None), "-");
    }
}
