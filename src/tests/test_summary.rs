#[cfg(test)]
mod tests {
    use crate::analysis::{Analyzer, Legality};
    use crate::rules::StandardRules;
    use crate::tests::common::TestRecordBuilder;
    use pretty_assertions::assert_eq;
    use schema::OriginGame;

    #[test]
    fn test_summary_mirrors_the_session() {
        let analysis = Analyzer::new(StandardRules).analyze(&TestRecordBuilder::hatched().build());

        let summary = analysis.summary();

        assert_eq!(summary.legality, Legality::Legal);
        assert_eq!(summary.report, analysis.terse_report());
        assert_eq!(summary.verbose_report, analysis.verbose_report());
        assert_eq!(summary.suggested_relearn, analysis.suggest_relearn());
        assert!(summary.secondary_checked);
    }

    #[test]
    fn test_summary_json_fields() {
        let record = TestRecordBuilder::new().with_ivs([50; 6]).build();
        let analysis = Analyzer::new(StandardRules).analyze(&record);

        let json = analysis.summary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["legality"], "Illegal");
        assert_eq!(value["report"], "Invalid: IVs exceed 31.");
        assert_eq!(value["suggested_relearn"], serde_json::json!([0, 0, 0, 0]));
    }

    #[test]
    fn test_summary_for_unsupported_origin() {
        let record = TestRecordBuilder::new().with_origin(OriginGame::Diamond).build();
        let analysis = Analyzer::new(StandardRules).analyze(&record);

        let summary = analysis.summary();

        assert_eq!(summary.legality, Legality::NotApplicable);
        assert_eq!(summary.report, summary.verbose_report);
        assert!(!summary.secondary_checked);
    }
}
