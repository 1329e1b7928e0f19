use super::{Metric, MetricKind};

pub const KNOWN_METRICS: [MetricKind; 3] = [
    MetricKind::Accuracy,
    MetricKind::F1,
    MetricKind::ClassificationReport,
];

pub fn get_metric(name: &str) -> Option<Box<dyn Metric>> {
    MetricKind::from_name(name).map(|kind| kind.create())
}
