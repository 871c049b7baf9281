//! Validation performance benchmarks.
//!
//! Measures single-cell checks and whole-table validation as uploads grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plastpartner::{validate_cell, Parser, SalesSchema, TableValidator};

/// Sample cells, valid and invalid, for every column type.
const CELL_SAMPLES: &[&str] = &[
    "2023-04-01",
    "01.04.2023",
    "2023/04/01",
    "not a date",
    "Matbeholder",
    "Drikkebegre",
    "Tallerken",
    "Helt av plast",
    "Delvis av plast",
    "150",
    "12.5",
    "-3",
    "0",
    "",
    "   ",
];

fn upload(rows: usize, invalid_every: usize) -> Vec<u8> {
    let mut out = String::from("Dato for salg,Kategori,Helt/delvis av plast,Enheter solgt,Tonn plast\n");
    for i in 0..rows {
        if invalid_every > 0 && i % invalid_every == 0 {
            out.push_str("2023-13-40,Tallerken,Helt av plast,-1,x\n");
        } else {
            let category = if i % 2 == 0 { "Matbeholder" } else { "Drikkebegre" };
            out.push_str(&format!(
                "2023-{:02}-{:02},{},Delvis av plast,{},0.{}\n",
                i % 12 + 1,
                i % 28 + 1,
                category,
                i + 1,
                i % 10
            ));
        }
    }
    out.into_bytes()
}

fn bench_cell_validation(c: &mut Criterion) {
    let schema = SalesSchema::sales();
    let mut group = c.benchmark_group("cell");

    for column in schema.columns() {
        group.bench_function(column.name.as_str(), |b| {
            b.iter(|| {
                for sample in CELL_SAMPLES {
                    black_box(validate_cell(Some(*sample), column));
                }
            })
        });
    }

    group.finish();
}

fn bench_table_validation(c: &mut Criterion) {
    let schema = SalesSchema::sales();
    let validator = TableValidator::new(&schema);
    let mut group = c.benchmark_group("table");

    for rows in [10, 100, 1_000, 10_000] {
        let table = Parser::new()
            .parse_bytes(&upload(rows, 0))
            .expect("benchmark upload parses");
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("valid", rows), &table, |b, table| {
            b.iter(|| black_box(validator.validate_table(table)))
        });

        let noisy = Parser::new()
            .parse_bytes(&upload(rows, 3))
            .expect("benchmark upload parses");
        group.bench_with_input(BenchmarkId::new("with_errors", rows), &noisy, |b, table| {
            b.iter(|| black_box(validator.validate_table(table)))
        });
    }

    group.finish();
}

fn bench_upload_end_to_end(c: &mut Criterion) {
    let schema = SalesSchema::sales();
    let bytes = upload(1_000, 0);

    c.bench_function("parse_and_accept_1000", |b| {
        b.iter(|| {
            let (table, _) = Parser::new().parse_upload(black_box(&bytes)).unwrap();
            black_box(TableValidator::new(&schema).accept(&table).is_ok())
        })
    });
}

criterion_group!(
    benches,
    bench_cell_validation,
    bench_table_validation,
    bench_upload_end_to_end,
);
criterion_main!(benches);
