use std::collections::BTreeMap;

use crate::{
    config::{Configuration, MetricsSpec},
    error::{Error, Result},
    metrics::{Metric, MetricKind},
    types::{ClassLabel, MetricValue},
};

pub struct Evaluator {
    config: Configuration,
}

impl Evaluator {
    pub fn new(metrics: impl Into<MetricsSpec>) -> Evaluator {
        Evaluator {
            config: Configuration::new(metrics.into()),
        }
    }

    pub fn create_from_json(json: &str) -> Result<Evaluator> {
        let config: Configuration = serde_json::from_str(json).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })?;

        Ok(Evaluator { config })
    }

    pub fn create_from_yaml(yaml: &str) -> Result<Evaluator> {
        let json_from_yaml = serde_yaml::from_str::<serde_json::Value>(yaml)
            .map_err(|e| Error::InvalidConfiguration(format!("Failed to parse yaml: {e}")))?;
        let config: Configuration = serde_json::from_value(json_from_yaml).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })?;

        Ok(Evaluator { config })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Maps each recognized requested name to a fresh metric. Unknown names
    /// are dropped; resolving nothing at all is an error.
    pub fn resolve(&self) -> Result<BTreeMap<MetricKind, Box<dyn Metric>>> {
        let mut resolved: BTreeMap<MetricKind, Box<dyn Metric>> = BTreeMap::new();
        for name in self.config.metrics().names() {
            if let Some(kind) = MetricKind::from_name(name) {
                resolved.entry(kind).or_insert_with(|| kind.create());
            }
        }

        if resolved.is_empty() {
            return Err(Error::NoKnownMetric(
                self.config.metrics().names().join(", "),
            ));
        }
        Ok(resolved)
    }

    pub fn compute(
        &self,
        predictions: &[ClassLabel],
        true_labels: &[ClassLabel],
    ) -> Result<BTreeMap<MetricKind, MetricValue>> {
        if predictions.len() != true_labels.len() {
            return Err(Error::InvalidArgument(format!(
                "Got {} predictions but {} true labels",
                predictions.len(),
                true_labels.len()
            )));
        }

        let mut results = BTreeMap::new();
        for (kind, mut metric) in self.resolve()? {
            for (&prediction, &label) in predictions.iter().zip(true_labels.iter()) {
                metric.add_point(prediction, label);
            }
            results.insert(kind, metric.get_value());
        }
        Ok(results)
    }
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator {
            config: Configuration::default(),
        }
    }
}
