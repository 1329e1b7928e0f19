use criterion::{black_box, criterion_group, criterion_main, Criterion};

use evalml_core::{evaluator::Evaluator, ClassLabel};

fn synthetic_labels(count: usize, classes: u64, mut state: u64) -> Vec<ClassLabel> {
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ClassLabel::from((state % classes) as i64)
        })
        .collect()
}

pub fn evaluate_all_metrics(c: &mut Criterion) {
    let evaluator = Evaluator::default();
    let predictions = synthetic_labels(10_000, 16, 0x9e3779b9);
    let truth = synthetic_labels(10_000, 16, 0x2545f491);

    c.bench_function("evaluate_all_metrics", |b| {
        b.iter(|| {
            evaluator
                .compute(black_box(&predictions), black_box(&truth))
                .unwrap()
        })
    });
}

pub fn evaluate_accuracy_only(c: &mut Criterion) {
    let evaluator = Evaluator::new("accuracy");
    let predictions = synthetic_labels(10_000, 16, 0x9e3779b9);
    let truth = synthetic_labels(10_000, 16, 0x2545f491);

    c.bench_function("evaluate_accuracy_only", |b| {
        b.iter(|| {
            evaluator
                .compute(black_box(&predictions), black_box(&truth))
                .unwrap()
        })
    });
}

criterion_group!(eval_benchmarks, evaluate_all_metrics, evaluate_accuracy_only);
criterion_main!(eval_benchmarks);
