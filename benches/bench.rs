use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::VecDeque;

const WORKLOAD: &[usize] = &[100, 1000, 10_000, 100_000];

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for i in WORKLOAD {
        group.bench_with_input(BenchmarkId::new("bucketed::Deque<_>", i), i, |b, &i| {
            b.iter(|| {
                let mut deque = bucketed::Deque::new();
                for x in 0..i {
                    if x % 2 == 0 {
                        deque.push_front(x);
                    } else {
                        deque.push_back(x);
                    }
                }
                while let Ok(x) = deque.pop_front() {
                    black_box(x);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("VecDeque<_>", i), i, |b, &i| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for x in 0..i {
                    if x % 2 == 0 {
                        deque.push_front(x);
                    } else {
                        deque.push_back(x);
                    }
                }
                while let Some(x) = deque.pop_front() {
                    black_box(x);
                }
            })
        });
    }

    group.finish();
}

fn index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    for i in WORKLOAD {
        let deque: bucketed::Deque<usize> = (0..*i).collect();
        group.bench_with_input(BenchmarkId::new("bucketed::Deque<_>", i), i, |b, &i| {
            b.iter(|| {
                for x in 0..i {
                    black_box(deque[x]);
                }
            })
        });

        let deque: VecDeque<usize> = (0..*i).collect();
        group.bench_with_input(BenchmarkId::new("VecDeque<_>", i), i, |b, &i| {
            b.iter(|| {
                for x in 0..i {
                    black_box(deque[x]);
                }
            })
        });
    }

    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for i in WORKLOAD {
        let deque: bucketed::Deque<usize> = (0..*i).collect();
        group.bench_with_input(BenchmarkId::new("bucketed::Deque<_>", i), &deque, |b, deque| {
            b.iter(|| deque.iter().sum::<usize>())
        });

        let deque: VecDeque<usize> = (0..*i).collect();
        group.bench_with_input(BenchmarkId::new("VecDeque<_>", i), &deque, |b, deque| {
            b.iter(|| deque.iter().sum::<usize>())
        });
    }

    group.finish();
}

criterion_group!(benches, push_pop, index, iter);
criterion_main!(benches);
