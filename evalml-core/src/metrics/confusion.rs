use std::collections::BTreeMap;

use itertools::Itertools;

use crate::types::ClassLabel;

/// Sparse confusion accumulator. Outer key is the true label, inner key the
/// predicted label.
#[derive(Debug, Clone, Default)]
pub struct ConfusionMatrix {
    counts: BTreeMap<ClassLabel, BTreeMap<ClassLabel, u64>>,
    predicted_totals: BTreeMap<ClassLabel, u64>,
    total: u64,
}

impl ConfusionMatrix {
    pub fn new() -> ConfusionMatrix {
        ConfusionMatrix::default()
    }

    pub fn add(&mut self, label: ClassLabel, prediction: ClassLabel) {
        *self
            .counts
            .entry(label)
            .or_default()
            .entry(prediction)
            .or_default() += 1;
        *self.predicted_totals.entry(prediction).or_default() += 1;
        self.total += 1;
    }

    /// Sorted union of the labels seen on either side.
    pub fn classes(&self) -> Vec<ClassLabel> {
        self.counts
            .keys()
            .chain(self.predicted_totals.keys())
            .copied()
            .sorted()
            .dedup()
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn support(&self, class: ClassLabel) -> u64 {
        self.counts
            .get(&class)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    pub fn true_positives(&self, class: ClassLabel) -> u64 {
        self.counts
            .get(&class)
            .and_then(|row| row.get(&class))
            .copied()
            .unwrap_or(0)
    }

    fn predicted(&self, class: ClassLabel) -> u64 {
        self.predicted_totals.get(&class).copied().unwrap_or(0)
    }

    pub fn precision(&self, class: ClassLabel) -> f64 {
        ratio(self.true_positives(class), self.predicted(class))
    }

    pub fn recall(&self, class: ClassLabel) -> f64 {
        ratio(self.true_positives(class), self.support(class))
    }

    pub fn f1(&self, class: ClassLabel) -> f64 {
        let p = self.precision(class);
        let r = self.recall(class);
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    pub fn accuracy(&self) -> f64 {
        let correct: u64 = self
            .counts
            .keys()
            .map(|&class| self.true_positives(class))
            .sum();
        ratio(correct, self.total)
    }
}

// An undefined ratio counts as zero, matching zero_division=0
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn matrix_of(predictions: &[i64], labels: &[i64]) -> ConfusionMatrix {
        let mut matrix = ConfusionMatrix::new();
        for (&prediction, &label) in predictions.iter().zip(labels.iter()) {
            matrix.add(label.into(), prediction.into());
        }
        matrix
    }

    #[test]
    fn test_counts() {
        let matrix = matrix_of(&[0, 0, 1, 1, 2, 2], &[0, 1, 1, 1, 2, 0]);
        assert_eq!(matrix.true_positives(0.into()), 1);
        assert_eq!(matrix.true_positives(1.into()), 2);
        assert_eq!(matrix.true_positives(2.into()), 1);
        assert_eq!(matrix.support(1.into()), 3);
        assert_eq!(matrix.total(), 6);
        assert_relative_eq!(matrix.accuracy(), 2.0 / 3.0);
    }

    #[test]
    fn test_precision_recall() {
        let matrix = matrix_of(&[0, 0, 1, 1, 2, 2], &[0, 1, 1, 1, 2, 0]);
        assert_relative_eq!(matrix.precision(0.into()), 0.5);
        assert_relative_eq!(matrix.recall(0.into()), 0.5);
        assert_relative_eq!(matrix.precision(1.into()), 1.0);
        assert_relative_eq!(matrix.recall(1.into()), 2.0 / 3.0);
    }

    #[test]
    fn test_sparse_labels() {
        let matrix = matrix_of(&[2, 7, 7], &[2, 2, 7]);
        assert_eq!(matrix.classes(), vec![2.into(), 7.into()]);
        assert_relative_eq!(matrix.precision(2.into()), 1.0);
        assert_relative_eq!(matrix.recall(2.into()), 0.5);
        assert_relative_eq!(matrix.precision(7.into()), 0.5);
        assert_relative_eq!(matrix.recall(7.into()), 1.0);
    }

    #[test]
    fn test_zero_division_is_zero() {
        let matrix = matrix_of(&[1, 1], &[0, 0]);
        assert_relative_eq!(matrix.precision(0.into()), 0.0);
        assert_relative_eq!(matrix.recall(1.into()), 0.0);
        assert_relative_eq!(matrix.f1(0.into()), 0.0);
        assert_relative_eq!(matrix.f1(1.into()), 0.0);
    }

    #[test]
    fn test_empty() {
        let matrix = ConfusionMatrix::new();
        assert!(matrix.classes().is_empty());
        assert_relative_eq!(matrix.accuracy(), 0.0);
    }
}
