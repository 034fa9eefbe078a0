//! Criterion benchmarks for template building and ranking.
//!
//! Measures how long it takes to build templates for a batch of raw
//! activities and to rank catalogs of increasing size.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package turismo-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use turismo_core::{ActivityTemplate, AvailableActivity, PreferenceProfile, Recommender};
use turismo_scorer::{Catalog, RecommendationEngine, TemplateBuilder};

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[usize] = &[9, 90, 900];

const DESCRIPTIONS: &[&str] = &[
    "Vista panorámica desde el mirador",
    "Sendero de aventura por el bosque",
    "Recorrido histórico al atardecer",
    "Experiencia de bienestar de lujo",
    "Paseo urbano",
];

fn profile() -> PreferenceProfile {
    PreferenceProfile {
        travel_style: "equilibrado".to_owned(),
        activity_level: "media".to_owned(),
        companions: "familia".to_owned(),
        budget_level: "moderado".to_owned(),
        preferred_time_of_day: "tarde".to_owned(),
        ..PreferenceProfile::default()
    }
    .with_interest("naturaleza")
    .with_interest("cultura")
    .with_notes("viajamos con niños")
}

fn raw_activities(count: usize) -> Vec<AvailableActivity> {
    DESCRIPTIONS
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(index, description)| {
            AvailableActivity::new(format!("Actividad {index}"), "Ruta", *description, "Media")
        })
        .collect()
}

fn catalog_of(size: usize) -> Vec<ActivityTemplate> {
    Catalog::villavicencio()
        .templates()
        .iter()
        .cycle()
        .take(size)
        .cloned()
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let activities = raw_activities(100);
    let builder = TemplateBuilder::default();
    c.bench_function("build_100_templates", |b| {
        b.iter(|| builder.build_all(black_box(&activities)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::default();
    let visitor = profile();

    for &size in CATALOG_SIZES {
        let templates = catalog_of(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &templates, |b, input| {
            b.iter(|| engine.recommend(black_box(&visitor), black_box(input), 5));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_rank);
criterion_main!(benches);
