use super::*;
use crate::test_fixtures::{empty_report, image_alt_report};

#[test]
fn conformance_serializes_with_display_labels() {
    for conformance in Conformance::ALL {
        let json = serde_json::to_string(&conformance).unwrap();
        assert_eq!(json, format!("\"{}\"", conformance.as_str()));
        let back: Conformance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conformance);
    }
}

#[test]
fn evaluation_method_labels() {
    assert_eq!(
        serde_json::to_string(&EvaluationMethod::NotTested).unwrap(),
        "\"Not Tested\""
    );
    assert!(EvaluationMethod::Automated.is_automated());
    assert!(EvaluationMethod::Hybrid.is_automated());
    assert!(!EvaluationMethod::Manual.is_automated());
    assert!(!EvaluationMethod::NotTested.is_automated());
}

#[test]
fn impact_parses_known_and_keeps_unknown() {
    assert_eq!(Impact::from("critical"), Impact::Critical);
    assert_eq!(Impact::from("minor"), Impact::Minor);
    assert_eq!(Impact::from("Critical"), Impact::Other("Critical".to_string()));

    let unknown: Impact = serde_json::from_str("\"cosmetic\"").unwrap();
    assert_eq!(unknown.as_str(), "cosmetic");
    assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"cosmetic\"");
    assert_eq!(serde_json::to_string(&Impact::Serious).unwrap(), "\"serious\"");
}

#[test]
fn tool_label_includes_version_when_present() {
    assert_eq!(
        ToolInfo::new("axe-core", Some("4.8.4".to_string())).label(),
        "axe-core 4.8.4"
    );
    assert_eq!(ToolInfo::new("axe-core", None).label(), "axe-core");
    assert_eq!(ToolInfo::new("axe-core", Some(String::new())).label(), "axe-core");
}

#[test]
fn empty_optionals_are_omitted() {
    let value = serde_json::to_value(empty_report()).unwrap();
    let product = value["product"].as_object().unwrap();
    assert_eq!(product.len(), 1);
    assert!(value["evaluation"].get("urls").is_none());
    assert!(value["evaluation"].get("evaluator").is_none());
}

#[test]
fn from_json_reads_rendered_report() {
    let report = image_alt_report();
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(Report::from_json(&json).unwrap(), report);
}

#[test]
fn from_json_rejects_garbage() {
    let err = Report::from_json("{\"product\": 1}").unwrap_err();
    assert_eq!(err.error_type(), "JSON");
}

#[test]
fn calculate_summary_refreshes_counts() {
    let mut report = image_alt_report();
    report.criteria.retain(|c| c.id == "1.1.1");
    report.calculate_summary();

    assert_eq!(report.summary.total_criteria, 1);
    assert_eq!(report.summary.does_not_support, 1);
    assert_eq!(report.summary.total_violations, 1);
    assert!((report.summary.automated_coverage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn json_schema_carries_id_and_title() {
    let schema = serde_json::to_value(Report::json_schema()).unwrap();
    assert_eq!(schema["$id"], SCHEMA_ID);
    assert_eq!(schema["title"], SCHEMA_TITLE);
    assert!(schema["properties"].get("generatedAt").is_some());
    assert!(schema["definitions"].get("Conformance").is_some());
}
