use crate::{metrics::Metric, types::MetricValue, ClassLabel};

use super::ConfusionMatrix;

pub struct WeightedF1Metric {
    confusion: ConfusionMatrix,
}

impl WeightedF1Metric {
    pub fn new() -> WeightedF1Metric {
        WeightedF1Metric {
            confusion: ConfusionMatrix::new(),
        }
    }
}

impl Default for WeightedF1Metric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for WeightedF1Metric {
    fn add_point(&mut self, prediction: ClassLabel, label: ClassLabel) {
        self.confusion.add(label, prediction);
    }

    fn get_value(&self) -> MetricValue {
        let total = self.confusion.total();
        if total == 0 {
            return MetricValue::Float(0.0);
        }
        // Supports sum to the example count, so this is the weighted mean
        let weighted: f64 = self
            .confusion
            .classes()
            .into_iter()
            .map(|class| self.confusion.f1(class) * self.confusion.support(class) as f64)
            .sum();
        MetricValue::Float(weighted / total as f64)
    }

    fn get_name(&self) -> String {
        "Weighted F1".to_owned()
    }
}
