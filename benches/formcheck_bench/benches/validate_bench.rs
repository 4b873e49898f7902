//! Validation benchmarks
//!
//! Measures descriptor parsing, schema compilation and record validation.
//!
//! Run with: cargo bench --package formcheck-bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formcheck_validate::{
    validate_object, ObjectSchema, Record, RuleDescriptor, RuleRegistry, RuleSpec, Schema,
};
use serde_json::json;

fn signup_schema() -> Schema {
    Schema::new()
        .field("name", ["required", "string", "min=2", "max=40"])
        .field("email", ["required", "email"])
        .field("website", ["url"])
        .field("avatar", ["image"])
        .field("password", ["required", "password"])
        .field("password_confirm", ["required", "confirm_password"])
}

fn valid_record() -> Record {
    Record::from_json(json!({
        "name": "Ada Lovelace",
        "email": "ada@example.org",
        "website": "https://ada.example.org/notes?page=1",
        "avatar": "/static/avatars/ada.png",
        "password": "analytical-engine",
        "password_confirm": "analytical-engine",
    }))
    .unwrap()
}

fn invalid_record() -> Record {
    Record::from_json(json!({
        "name": "A",
        "email": "ada",
        "website": "ada.example.org",
        "avatar": "ada.pdf",
        "password": "short",
        "password_confirm": "shorter",
    }))
    .unwrap()
}

/// Benchmark descriptor parsing and binding
fn bench_descriptors(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptors");
    let registry = RuleRegistry::new();

    for descriptor in ["required", "min=12", "one_of=x:a:b:c"] {
        group.bench_with_input(
            BenchmarkId::new("parse", descriptor),
            &descriptor,
            |b, descriptor| b.iter(|| RuleDescriptor::parse(black_box(descriptor))),
        );
    }

    group.bench_function("spec_and_bind", |b| {
        b.iter(|| {
            let spec = RuleSpec::parse(black_box("max=40"), &registry).unwrap();
            registry.bind(&spec).unwrap()
        })
    });

    group.finish();
}

/// Benchmark schema compilation
fn bench_compile(c: &mut Criterion) {
    let schema = signup_schema();

    c.bench_function("compile_signup_schema", |b| {
        b.iter(|| ObjectSchema::compile(black_box(&schema)).unwrap())
    });
}

/// Benchmark validating whole records
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let schema = signup_schema();
    let compiled = ObjectSchema::compile(&schema).unwrap();

    group.bench_function("compiled_valid", |b| {
        let record = valid_record();
        b.iter(|| compiled.validate(black_box(record.clone())))
    });

    group.bench_function("compiled_invalid", |b| {
        let record = invalid_record();
        b.iter(|| compiled.validate(black_box(record.clone())))
    });

    // Includes compilation on every call
    group.bench_function("validate_object", |b| {
        let record = valid_record();
        b.iter(|| validate_object(black_box(&schema), black_box(record.clone())).unwrap())
    });

    group.finish();
}

/// Benchmark validation cost as the schema grows
fn bench_schema_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_size");

    for size in [1, 10, 50, 100].iter() {
        let schema: Schema = (0..*size)
            .map(|i| (format!("field{}", i), ["required", "string", "min=1", "max=64"]))
            .collect();
        let record: Record = (0..*size)
            .map(|i| (format!("field{}", i), format!("value {}", i)))
            .collect();
        let compiled = ObjectSchema::compile(&schema).unwrap();

        group.bench_with_input(BenchmarkId::new("fields", size), size, |b, _| {
            b.iter(|| compiled.validate(black_box(record.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_descriptors,
    bench_compile,
    bench_validate,
    bench_schema_size
);
criterion_main!(benches);
