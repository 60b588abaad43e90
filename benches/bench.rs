#![allow(dead_code)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A synthetic repetitive document: 2000 sentences, most near-duplicates of
/// a handful of templates, with a few unique sentences and one anchor
/// heading interspersed. Exercises the bucketed dedup pass's O(n) behavior
/// on the pathological case it was built to avoid (§8 S6).
fn synthetic_repetitive_document(sentence_count: usize) -> String {
    let templates = [
        "The cache layer reduces latency for most requests handled today",
        "Background workers process queued jobs at a steady rate",
        "Configuration changes take effect after the next restart cycle",
    ];

    let mut doc = String::with_capacity(sentence_count * 64);
    doc.push_str("# SYSTEM OVERVIEW\n\n");
    for i in 0..sentence_count {
        let template = templates[i % templates.len()];
        doc.push_str(template);
        doc.push_str(". ");
        if i % 500 == 499 {
            doc.push_str("Unique detail number ");
            doc.push_str(&i.to_string());
            doc.push_str(" appears exactly once. ");
        }
    }
    doc
}

fn bench_squeeze(cr: &mut Criterion) {
    let mut gr = cr.benchmark_group("squeeze_ex");

    for &sentence_count in &[200usize, 2000] {
        let doc = synthetic_repetitive_document(sentence_count);
        let size = doc.len() as u64;

        for &aggressiveness in &[0, 5, 9] {
            gr.throughput(Throughput::Bytes(size)).bench_with_input(
                BenchmarkId::new(format!("aggressiveness_{aggressiveness}"), sentence_count),
                &doc,
                |b, text| b.iter(|| context_squeeze::squeeze_ex(text.as_bytes(), aggressiveness)),
            );
        }
    }

    gr.finish();
}

criterion_group!(benches, bench_squeeze);
criterion_main!(benches);
