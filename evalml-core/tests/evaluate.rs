use approx::assert_relative_eq;
use serde_json::json;

use evalml_core::{
    evaluator::Evaluator, metrics::MetricKind, utils::AsInner, ClassLabel, ClassificationReport,
};

fn labels(values: &[i64]) -> Vec<ClassLabel> {
    values.iter().copied().map(ClassLabel::from).collect()
}

#[test]
fn test_evaluate_from_json_config() {
    let config = json!({
        "metrics": ["accuracy", "f1", "classification_report"]
    });
    let evaluator = Evaluator::create_from_json(&config.to_string()).unwrap();

    let predictions = labels(&[0, 1, 2, 2]);
    let truth = labels(&[0, 1, 1, 2]);
    let results = evaluator.compute(&predictions, &truth).unwrap();

    assert_eq!(results.len(), 3);

    let accuracy: &f64 = results[&MetricKind::Accuracy].as_inner().unwrap();
    assert_relative_eq!(*accuracy, 0.75);

    let f1: &f64 = results[&MetricKind::F1].as_inner().unwrap();
    assert_relative_eq!(*f1, 0.75);

    let report: &ClassificationReport = results[&MetricKind::ClassificationReport]
        .as_inner()
        .unwrap();
    assert_relative_eq!(report.accuracy, 0.75);
    assert_eq!(report.class(1.into()).unwrap().support, 2);
    assert_relative_eq!(report.class(1.into()).unwrap().f1_score, 2.0 / 3.0);
}

#[test]
fn test_result_keys_are_the_recognized_subset() {
    let config = json!({
        "metrics": ["f1", "log_loss", "accuracy", "roc_auc"]
    });
    let evaluator = Evaluator::create_from_json(&config.to_string()).unwrap();

    let results = evaluator
        .compute(&labels(&[1, 0, 1]), &labels(&[1, 1, 1]))
        .unwrap();
    let keys: Vec<MetricKind> = results.keys().copied().collect();
    assert_eq!(keys, vec![MetricKind::Accuracy, MetricKind::F1]);
}

#[test]
fn test_only_unknown_metrics_fails() {
    let config = json!({ "metrics": ["log_loss"] });
    let evaluator = Evaluator::create_from_json(&config.to_string()).unwrap();

    let err = evaluator
        .compute(&labels(&[1]), &labels(&[1]))
        .unwrap_err();
    assert!(err.to_string().contains("No known metric"));
}

#[test]
fn test_yaml_config_with_single_name() {
    let evaluator = Evaluator::create_from_yaml("metrics: accuracy\n").unwrap();

    let results = evaluator
        .compute(&labels(&[1, 0]), &labels(&[1, 0]))
        .unwrap();
    let accuracy: &f64 = results[&MetricKind::Accuracy].as_inner().unwrap();
    assert_relative_eq!(*accuracy, 1.0);
}

#[test]
fn test_results_serialize_keyed_by_metric_name() {
    let evaluator = Evaluator::default();

    let results = evaluator
        .compute(&labels(&[1, 1, 0, 0]), &labels(&[1, 0, 0, 0]))
        .unwrap();
    let value = serde_json::to_value(&results).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object["accuracy"], json!(0.75));
    assert!(object.contains_key("f1"));
    assert!(object["classification_report"].get("macro avg").is_some());
}
