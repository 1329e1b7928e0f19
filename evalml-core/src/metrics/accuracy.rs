use crate::{metrics::Metric, types::MetricValue, ClassLabel};

pub struct AccuracyMetric {
    pub correct: u64,
    pub count: u64,
}

impl AccuracyMetric {
    pub fn new() -> AccuracyMetric {
        AccuracyMetric {
            correct: 0,
            count: 0,
        }
    }
}

impl Default for AccuracyMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for AccuracyMetric {
    fn add_point(&mut self, prediction: ClassLabel, label: ClassLabel) {
        if prediction == label {
            self.correct += 1;
        }
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        if self.count == 0 {
            return MetricValue::Float(0.0);
        }
        MetricValue::Float(self.correct as f64 / self.count as f64)
    }

    fn get_name(&self) -> String {
        "Accuracy".to_owned()
    }
}
