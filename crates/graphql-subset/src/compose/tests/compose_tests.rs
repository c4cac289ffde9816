use crate::compose::BreakingChange;
use crate::compose::ComposeError;
use crate::compose::DiffReport;
use crate::compose::SchemaDiff;
use crate::compose::SchemaMerge;
use crate::compose::check_product_against_source;
use crate::compose::compose_product_schema;

/// A stand-in for the external merge routine: concatenates its inputs, which
/// satisfies the union-of-definitions contract for disjoint subsets.
#[derive(Debug)]
struct ConcatMerge;
impl SchemaMerge for ConcatMerge {
    fn merge(&self, schema_sdls: &[String]) -> Result<String, ComposeError> {
        Ok(schema_sdls.join("\n"))
    }
}

#[derive(Debug)]
struct FailingMerge;
impl SchemaMerge for FailingMerge {
    fn merge(&self, _schema_sdls: &[String]) -> Result<String, ComposeError> {
        Err(ComposeError::Merge {
            err: "conflicting definitions of `Query`".to_string(),
        })
    }
}

/// A stand-in for the external diff routine that reports a fixed set of
/// breaking changes.
#[derive(Debug)]
struct CannedDiff {
    breaking_changes: Vec<BreakingChange>,
}
impl SchemaDiff for CannedDiff {
    fn diff(
        &self,
        _source_sdl: &str,
        _product_sdl: &str,
    ) -> Result<DiffReport, ComposeError> {
        Ok(DiffReport {
            breaking_changes: self.breaking_changes.clone(),
        })
    }
}

#[test]
fn merges_disjoint_subsets_into_one_product_schema() {
    let subsets = vec![
        "type Query { event: String }".to_string(),
        "type Organizer { id: ID! }".to_string(),
    ];

    let merged = compose_product_schema(&subsets, &ConcatMerge).unwrap();

    assert!(merged.contains("event"));
    assert!(merged.contains("Organizer"));
}

#[test]
fn rejects_subsets_that_do_not_parse() {
    let subsets = vec![
        "type Query { event: String }".to_string(),
        "type {".to_string(),
    ];

    let err = compose_product_schema(&subsets, &ConcatMerge).unwrap_err();

    assert!(matches!(
        err,
        ComposeError::InvalidSubsetSchema { index: 1, .. },
    ));
}

#[test]
fn rejects_merge_output_that_does_not_parse() {
    #[derive(Debug)]
    struct BrokenMerge;
    impl SchemaMerge for BrokenMerge {
        fn merge(&self, _schema_sdls: &[String]) -> Result<String, ComposeError> {
            Ok("not a schema {".to_string())
        }
    }

    let subsets = vec!["type Query { event: String }".to_string()];
    let err = compose_product_schema(&subsets, &BrokenMerge).unwrap_err();

    assert!(matches!(err, ComposeError::InvalidMergedSchema { .. }));
}

#[test]
fn surfaces_merge_routine_failures() {
    let subsets = vec!["type Query { event: String }".to_string()];
    let err = compose_product_schema(&subsets, &FailingMerge).unwrap_err();

    assert!(matches!(err, ComposeError::Merge { .. }));
}

#[test]
fn reports_breaking_changes_from_the_diff_routine() {
    let differ = CannedDiff {
        breaking_changes: vec![BreakingChange {
            message: "Field `Query.event` was removed".to_string(),
            path: Some("Query.event".to_string()),
        }],
    };

    let report = check_product_against_source(
        "type Query { event: String organizer: String }",
        "type Query { organizer: String }",
        &differ,
    ).unwrap();

    assert!(!report.is_consistent());
    assert_eq!(report.breaking_changes.len(), 1);
    assert_eq!(
        report.breaking_changes[0].path.as_deref(),
        Some("Query.event"),
    );
}

#[test]
fn an_empty_report_is_consistent() {
    let differ = CannedDiff { breaking_changes: vec![] };

    let report = check_product_against_source(
        "type Query { event: String }",
        "type Query { event: String }",
        &differ,
    ).unwrap();

    assert!(report.is_consistent());
}
