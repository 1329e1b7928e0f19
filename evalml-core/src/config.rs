use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_default::DefaultFromSerde;

/// One metric name or an ordered list of them.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MetricsSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl MetricsSpec {
    pub fn names(&self) -> &[String] {
        match self {
            MetricsSpec::Single(name) => std::slice::from_ref(name),
            MetricsSpec::Multiple(names) => names,
        }
    }
}

impl From<&str> for MetricsSpec {
    fn from(name: &str) -> Self {
        MetricsSpec::Single(name.to_owned())
    }
}

impl From<Vec<String>> for MetricsSpec {
    fn from(names: Vec<String>) -> Self {
        MetricsSpec::Multiple(names)
    }
}

fn default_metrics() -> MetricsSpec {
    MetricsSpec::Multiple(vec![
        "accuracy".to_owned(),
        "f1".to_owned(),
        "classification_report".to_owned(),
    ])
}

#[derive(Serialize, Deserialize, JsonSchema, DefaultFromSerde, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    _schema: Option<String>,
    #[serde(default = "default_metrics")]
    metrics: MetricsSpec,
}

impl Configuration {
    pub fn new(metrics: MetricsSpec) -> Configuration {
        Configuration {
            _schema: None,
            metrics,
        }
    }

    pub fn metrics(&self) -> &MetricsSpec {
        &self.metrics
    }
}

pub fn config_schema() -> RootSchema {
    schema_for!(Configuration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests_all_metrics() {
        let config = Configuration::default();
        assert_eq!(config.metrics().names().len(), 3);
    }

    #[test]
    fn test_single_or_list() {
        let single: MetricsSpec = serde_json::from_str("\"accuracy\"").unwrap();
        assert_eq!(single.names(), ["accuracy"]);
        let list: MetricsSpec = serde_json::from_str("[\"accuracy\", \"f1\"]").unwrap();
        assert_eq!(list.names().len(), 2);
    }

    #[test]
    fn test_schema_field_is_accepted() {
        let config: Configuration =
            serde_json::from_str("{\"$schema\": \"x\", \"metrics\": \"f1\"}").unwrap();
        assert_eq!(config.metrics().names(), ["f1"]);
    }
}
