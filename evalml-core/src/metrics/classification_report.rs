use std::collections::BTreeMap;

use crate::{
    metrics::Metric,
    types::{ClassMetrics, ClassificationReport, MetricValue},
    ClassLabel,
};

use super::ConfusionMatrix;

pub struct ClassificationReportMetric {
    confusion: ConfusionMatrix,
}

impl ClassificationReportMetric {
    pub fn new() -> ClassificationReportMetric {
        ClassificationReportMetric {
            confusion: ConfusionMatrix::new(),
        }
    }

    fn class_metrics(&self, class: ClassLabel) -> ClassMetrics {
        ClassMetrics {
            precision: self.confusion.precision(class),
            recall: self.confusion.recall(class),
            f1_score: self.confusion.f1(class),
            support: self.confusion.support(class),
        }
    }
}

impl Default for ClassificationReportMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for ClassificationReportMetric {
    fn add_point(&mut self, prediction: ClassLabel, label: ClassLabel) {
        self.confusion.add(label, prediction);
    }

    fn get_value(&self) -> MetricValue {
        let total = self.confusion.total();
        let classes = self.confusion.classes();

        let mut rows = BTreeMap::new();
        let mut macro_avg = ClassMetrics::with_support(total);
        let mut weighted_avg = ClassMetrics::with_support(total);
        for &class in &classes {
            let row = self.class_metrics(class);
            macro_avg.precision += row.precision;
            macro_avg.recall += row.recall;
            macro_avg.f1_score += row.f1_score;
            weighted_avg.precision += row.precision * row.support as f64;
            weighted_avg.recall += row.recall * row.support as f64;
            weighted_avg.f1_score += row.f1_score * row.support as f64;
            rows.insert(class.to_string(), row);
        }
        if !classes.is_empty() {
            let count = classes.len() as f64;
            macro_avg.precision /= count;
            macro_avg.recall /= count;
            macro_avg.f1_score /= count;
        }
        if total > 0 {
            let total = total as f64;
            weighted_avg.precision /= total;
            weighted_avg.recall /= total;
            weighted_avg.f1_score /= total;
        }

        MetricValue::Report(ClassificationReport {
            classes: rows,
            accuracy: self.confusion.accuracy(),
            macro_avg,
            weighted_avg,
        })
    }

    fn get_name(&self) -> String {
        "Classification report".to_owned()
    }
}
