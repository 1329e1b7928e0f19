use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::utils::AsInner;
use derive_more::TryInto;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

macro_rules! impl_extra_traits {
    ($structname: ident, $inner_type: ident) => {
        impl From<$inner_type> for $structname {
            fn from(value: $inner_type) -> Self {
                $structname(value)
            }
        }

        impl Deref for $structname {
            type Target = $inner_type;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$structname> for $inner_type {
            fn from(value: $structname) -> Self {
                value.0
            }
        }
    };
}

/// Labels are arbitrary integers, not required to be dense or non-negative.
#[derive(Deserialize, Serialize, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct ClassLabel(i64);
impl_extra_traits!(ClassLabel, i64);

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: u64,
}

impl ClassMetrics {
    pub fn with_support(support: u64) -> ClassMetrics {
        ClassMetrics {
            precision: 0.0,
            recall: 0.0,
            f1_score: 0.0,
            support,
        }
    }
}

/// Per-class rows keyed by the label rendered as a string, plus the aggregate
/// rows. Serializes to the sklearn `output_dict=True` shape.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ClassificationReport {
    #[serde(flatten)]
    pub classes: BTreeMap<String, ClassMetrics>,
    pub accuracy: f64,
    #[serde(rename = "macro avg")]
    pub macro_avg: ClassMetrics,
    #[serde(rename = "weighted avg")]
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    pub fn class(&self, label: ClassLabel) -> Option<&ClassMetrics> {
        self.classes.get(&label.to_string())
    }
}

#[derive(Debug, PartialEq, Clone, TryInto, Serialize)]
// Untagged so results serialize as plain numbers or report objects
#[serde(untagged)]
pub enum MetricValue {
    Float(f64),
    Report(ClassificationReport),
}

macro_rules! impl_conversion_traits {
    ($enum_variant: ident, $inner_type: ty) => {
        impl From<$inner_type> for MetricValue {
            fn from(value: $inner_type) -> Self {
                MetricValue::$enum_variant(value)
            }
        }

        impl AsInner<$inner_type> for MetricValue {
            fn as_inner(&self) -> Option<&$inner_type> {
                match self {
                    MetricValue::$enum_variant(value) => Some(value),
                    _ => None,
                }
            }
            fn as_inner_mut(&mut self) -> Option<&mut $inner_type> {
                match self {
                    MetricValue::$enum_variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_conversion_traits!(Float, f64);
impl_conversion_traits!(Report, ClassificationReport);

impl AbsDiffEq for ClassMetrics {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.support == other.support
            && self.precision.abs_diff_eq(&other.precision, epsilon)
            && self.recall.abs_diff_eq(&other.recall, epsilon)
            && self.f1_score.abs_diff_eq(&other.f1_score, epsilon)
    }
}

impl AbsDiffEq for ClassificationReport {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.classes.len() != other.classes.len() {
            return false;
        }
        for (label, metrics) in self.classes.iter() {
            match other.classes.get(label) {
                Some(other_metrics) if metrics.abs_diff_eq(other_metrics, epsilon) => {}
                _ => return false,
            }
        }
        self.accuracy.abs_diff_eq(&other.accuracy, epsilon)
            && self.macro_avg.abs_diff_eq(&other.macro_avg, epsilon)
            && self.weighted_avg.abs_diff_eq(&other.weighted_avg, epsilon)
    }
}

impl AbsDiffEq for MetricValue {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (MetricValue::Float(left), MetricValue::Float(right)) => {
                left.abs_diff_eq(right, epsilon)
            }
            (MetricValue::Report(left), MetricValue::Report(right)) => {
                left.abs_diff_eq(right, epsilon)
            }
            (_, _) => false,
        }
    }
}
