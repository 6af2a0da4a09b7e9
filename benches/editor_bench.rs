// ABOUTME: Criterion benchmarks for the rich-text instruction editor
// ABOUTME: Measures HTML parsing, rendering, and keystroke handling with the space rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the instruction editor.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::instructions_html;
use cookbook_client::editor::html::{from_html, to_html};
use cookbook_client::editor::RichTextEditor;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_html_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor_html");

    for paragraphs in [3_usize, 30, 300] {
        let html = instructions_html(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", paragraphs), &html, |b, html| {
            b.iter(|| from_html(black_box(html)));
        });

        let document = from_html(&html);
        group.bench_with_input(BenchmarkId::new("render", paragraphs), &document, |b, document| {
            b.iter(|| to_html(black_box(document)));
        });
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor_typing");
    let text = "Whisk  the eggs   until  fluffy, then fold in the flour. ";
    group.throughput(Throughput::Elements(text.chars().count() as u64));

    group.bench_function("type_sentence", |b| {
        b.iter_batched(
            || RichTextEditor::new("", |_| {}),
            |mut editor| {
                editor.type_text(black_box(text));
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("sync_content_30_paragraphs", |b| {
        let html = instructions_html(30);
        b.iter_batched(
            || RichTextEditor::new("", |_| {}),
            |mut editor| {
                editor.sync_content(black_box(&html));
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_html_round_trip, bench_typing);
criterion_main!(benches);
