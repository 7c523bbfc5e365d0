use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use bijak::core::*;

fn build_invoice(lines: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("BENCH-000001")
        .kind(InvoiceKind::Tax)
        .customer(
            Customer::new("Benchmark Traders")
                .email("accounts@benchmark.co.in")
                .address("14 MG Road, Pune"),
        );

    for i in 1..=lines {
        builder = builder.add_item(
            LineItem::new(format!("Catalog item {i}"), dec!(5), dec!(120))
                .description("bulk supply"),
        );
    }

    builder.build().unwrap()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_10_line_invoice", |b| {
        b.iter(|| black_box(build_invoice(10)))
    });

    c.bench_function("build_1000_line_invoice", |b| {
        b.iter(|| black_box(build_invoice(1000)))
    });
}

fn bench_calculation(c: &mut Criterion) {
    let mut invoice = build_invoice(1000);

    c.bench_function("recalculate_1000_line_totals", |b| {
        b.iter(|| {
            calculate_invoice_totals(black_box(&mut invoice)).unwrap();
            black_box(invoice.totals.as_ref().unwrap().total_amount)
        })
    });
}

fn bench_validation(c: &mut Criterion) {
    let invoice = build_invoice(1000);

    c.bench_function("validate_1000_line_invoice", |b| {
        b.iter(|| black_box(validate_invoice(black_box(&invoice))))
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("format_inr", |b| {
        b.iter(|| black_box(format_inr(black_box(dec!(12345678.905)))))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_calculation,
    bench_validation,
    bench_formatting
);
criterion_main!(benches);
