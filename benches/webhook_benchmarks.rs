//! Webhook Verification Benchmarks
//!
//! Measures signing, header parsing and full notification verification.
//!
//! Run with: cargo bench --bench webhook_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use eventdripper::{
    SignedHeader, VerifierConfig, WebhookReceiver, WebhookSigner, compute_signature, verify,
};
use std::hint::black_box;

const SECRET: &str = "6f060e57177008f4bfbc981c5fd1b2abfe22fb64fc6f4e384b5ca7b25d3ecec8";

fn payload_with_events(count: usize) -> String {
    let events: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "at": "2020-10-09T13:47:17.321618Z",
                "name": format!("event{}", i),
                "data": "eW91d2luQHZiYW5nLmRr",
            })
        })
        .collect();

    serde_json::json!({
        "trigger_name": "trigger_now",
        "entity_id": "michael",
        "events": events,
    })
    .to_string()
}

// ============================================================================
// Signature Benchmarks
// ============================================================================

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");
    let payload = payload_with_events(10);
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("compute", |b| {
        b.iter(|| compute_signature(black_box(SECRET), black_box(1602251283), black_box(&payload)))
    });

    let expected = compute_signature(SECRET, 1602251283, &payload);
    let mut wrong_last = expected.clone();
    wrong_last.pop();
    wrong_last.push('x');

    group.bench_function("verify/match", |b| {
        b.iter(|| verify(black_box(&expected), black_box(&expected)))
    });

    group.bench_function("verify/mismatch_last_byte", |b| {
        b.iter(|| verify(black_box(&expected), black_box(&wrong_last)))
    });

    group.bench_function("verify/mismatch_first_byte", |b| {
        let mut wrong_first = String::from("x");
        wrong_first.push_str(&expected[1..]);
        b.iter(|| verify(black_box(&expected), black_box(&wrong_first)))
    });

    group.finish();
}

// ============================================================================
// Header Parsing Benchmarks
// ============================================================================

fn bench_header_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("header");

    let single = "t=1602251283,v1=21b9339ced8c9b178f3f9bf7a29a212ec832443e8e2c05fd2dc7ef2fdaa70559";
    group.bench_function("parse/single", |b| {
        b.iter(|| SignedHeader::parse(black_box(single)))
    });

    let rotated = format!("{},v0=legacy,v1=second,v1=third", single);
    group.bench_function("parse/rotated", |b| {
        b.iter(|| SignedHeader::parse(black_box(&rotated)))
    });

    group.finish();
}

// ============================================================================
// End-to-End Verification Benchmarks
// ============================================================================

fn bench_construct_notification(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_notification");
    let receiver = WebhookReceiver::new(SECRET, VerifierConfig::disabled_tolerance());
    let signer = WebhookSigner::new(SECRET);

    for count in [1, 10, 100] {
        let payload = payload_with_events(count);
        let header = signer.sign(1602251283, &payload).to_string();
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_function(format!("events_{}", count), |b| {
            b.iter(|| receiver.construct_notification(black_box(&payload), black_box(&header)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_signature,
    bench_header_parsing,
    bench_construct_notification
);
criterion_main!(benches);
