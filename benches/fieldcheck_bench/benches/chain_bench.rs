//! Rule chain benchmarks
//!
//! Measures the cost of a validation session over typical form fields.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldcheck::{SerializableRule, Validator};
use regex::Regex;

/// Benchmark single-rule checks
fn bench_single_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_rule");

    group.bench_function("email", |b| {
        b.iter(|| {
            let mut v = Validator::new("email", black_box("user.name+tag@example.co.uk"));
            v.email();
            v.is_valid()
        })
    });

    group.bench_function("url", |b| {
        b.iter(|| {
            let mut v = Validator::new("url", black_box("https://api.example.com:8443/v1/users?page=2"));
            v.url();
            v.is_valid()
        })
    });

    group.bench_function("credit_card", |b| {
        b.iter(|| {
            let mut v = Validator::new("card", black_box("4111 1111 1111 1111"));
            v.credit_card();
            v.is_valid()
        })
    });

    group.bench_function("min_max_numeric", |b| {
        b.iter(|| {
            let mut v = Validator::new("age", black_box(42u8));
            v.min(18).max(120);
            v.is_valid()
        })
    });

    group.finish();
}

/// Benchmark a full signup form
fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");
    let username = Regex::new(r"^[a-z][a-z0-9_]{2,15}$").unwrap();

    group.bench_function("valid_signup", |b| {
        b.iter(|| {
            let mut v = Validator::new("username", black_box("alice_01"));
            v.matches(&username)
                .next_field("email", black_box("alice@example.com"))
                .email()
                .next_field("password", black_box("s3cret!pass"))
                .min(8)
                .has_special_char()
                .next_field("phone", black_box("+14155551234"))
                .phone_number()
                .next_field("website", black_box(""))
                .not_required()
                .url();
            v.is_valid()
        })
    });

    // Every field fails on its first rule, so later rules are skipped
    group.bench_function("invalid_signup", |b| {
        b.iter(|| {
            let mut v = Validator::new("username", black_box("A"));
            v.matches(&username)
                .next_field("email", black_box("alice"))
                .email()
                .min(5)
                .next_field("password", black_box(""))
                .min(8)
                .has_special_char();
            v.errors().len()
        })
    });

    group.finish();
}

/// Benchmark rules described as data
fn bench_serialized_rules(c: &mut Criterion) {
    let rules = code_rules();

    c.bench_function("apply_serialized_rules", |b| {
        b.iter(|| {
            let mut v = Validator::new("code", black_box("ABC123"));
            v.apply_all(&rules);
            v.is_valid()
        })
    });
}

fn code_rules() -> Vec<SerializableRule> {
    vec![
        SerializableRule::Min {
            value: 4,
            message: None,
        },
        SerializableRule::Max {
            value: 12,
            message: None,
        },
        SerializableRule::AlphaNumeric { message: None },
        SerializableRule::Match {
            pattern: "^[A-Z]+[0-9]+$".to_string(),
            message: Some("must be letters then digits".to_string()),
        },
    ]
}

criterion_group!(benches, bench_single_rules, bench_form, bench_serialized_rules);
criterion_main!(benches);
