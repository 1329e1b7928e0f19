use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ClassLabel, MetricValue};

use super::{AccuracyMetric, ClassificationReportMetric, WeightedF1Metric};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Accuracy,
    F1,
    ClassificationReport,
}

impl MetricKind {
    pub fn from_name(name: &str) -> Option<MetricKind> {
        match name {
            "accuracy" => Some(MetricKind::Accuracy),
            "f1" => Some(MetricKind::F1),
            "classification_report" => Some(MetricKind::ClassificationReport),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "accuracy",
            MetricKind::F1 => "f1",
            MetricKind::ClassificationReport => "classification_report",
        }
    }

    pub fn create(&self) -> Box<dyn Metric> {
        match self {
            MetricKind::Accuracy => Box::new(AccuracyMetric::new()),
            MetricKind::F1 => Box::new(WeightedF1Metric::new()),
            MetricKind::ClassificationReport => Box::new(ClassificationReportMetric::new()),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Metric {
    fn add_point(&mut self, prediction: ClassLabel, label: ClassLabel);
    fn get_value(&self) -> MetricValue;
    fn get_name(&self) -> String;
}
