//! Benchmarks for record rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks format synthetic records of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdf_docx_reader::render::{self, JsonFormat};
use pdf_docx_reader::{DocxRecord, PdfRecord, Record};

/// Creates a PDF record with the given number of pages.
fn create_pdf_record(page_count: usize) -> Record {
    let mut record = PdfRecord::new("bench.pdf");
    record.metadata.title = "Benchmark".to_string();
    for i in 0..page_count {
        record.push_page(format!(
            "Page {} - Benchmark text content for rendering measurement. ",
            i + 1
        )
        .repeat(20));
    }
    record.into()
}

/// Creates a DOCX record with the given number of paragraphs, every tenth blank.
fn create_docx_record(paragraph_count: u32) -> Record {
    let mut record = DocxRecord::new("bench.docx");
    for i in 1..=paragraph_count {
        let text = if i % 10 == 0 {
            String::new()
        } else {
            format!("Paragraph {} with some ordinary sentence text.", i)
        };
        record.push_paragraph(i, &text, None);
    }
    record.into()
}

/// Benchmark JSON rendering at various sizes.
fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");

    for page_count in [1, 10, 100] {
        let record = create_pdf_record(page_count);

        group.bench_function(format!("pdf_{}_pages_pretty", page_count), |b| {
            b.iter(|| render::to_json(black_box(&record), JsonFormat::Pretty).unwrap());
        });
        group.bench_function(format!("pdf_{}_pages_compact", page_count), |b| {
            b.iter(|| render::to_json(black_box(&record), JsonFormat::Compact).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the plain-text layout.
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for paragraph_count in [10, 100, 1000] {
        let record = create_docx_record(paragraph_count);

        group.bench_function(format!("docx_{}_paragraphs", paragraph_count), |b| {
            b.iter(|| render::to_text(black_box(&record)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_json, bench_text);
criterion_main!(benches);
