//! Benchmarks for single-word and batch declension

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use petrovich_core::{Gender, NameKind, NameRequest, Petrovich, RuleTable};
use std::hint::black_box;

const NAMES: [(NameKind, Gender, &str); 8] = [
    (NameKind::First, Gender::Male, "Николай"),
    (NameKind::Middle, Gender::Male, "Петрович"),
    (NameKind::Last, Gender::Male, "Воронин"),
    (NameKind::First, Gender::Female, "Татьяна"),
    (NameKind::Middle, Gender::Female, "Алексеевна"),
    (NameKind::Last, Gender::Female, "Воронина"),
    (NameKind::Last, Gender::Male, "Бонч-Бруевич"),
    (NameKind::First, Gender::Male, "Лев"),
];

/// Build a batch of `size` requests cycling through [`NAMES`]
fn generate_requests(size: usize) -> Vec<NameRequest> {
    NAMES
        .iter()
        .cycle()
        .take(size)
        .map(|&(kind, gender, name)| NameRequest::new(kind, gender, name))
        .collect()
}

fn benchmark_rule_loading(c: &mut Criterion) {
    c.bench_function("parse_embedded_rules", |b| {
        b.iter(|| {
            let _table =
                RuleTable::from_toml_str(black_box(petrovich_core::rules::loader::RUSSIAN_RULES));
        });
    });
}

fn benchmark_single_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_word");
    let petrovich = Petrovich::russian().unwrap();

    for (kind, gender, name) in NAMES {
        group.bench_with_input(
            BenchmarkId::new(format!("{kind}/{gender}"), name),
            &name,
            |b, name| {
                b.iter(|| {
                    let _forms = petrovich.decline(kind, gender, black_box(name));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let petrovich = Petrovich::russian().unwrap();

    for size in [10, 100, 1_000, 10_000].iter() {
        let requests = generate_requests(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| {
                let _results = petrovich.decline_batch(black_box(requests));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_rule_loading,
    benchmark_single_word,
    benchmark_batch
);
criterion_main!(benches);
