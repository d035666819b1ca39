use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use tributo::core::*;

fn build_ledger(lines: usize) -> Ledger {
    let taxonomy = Taxonomy::withholding();
    let types = taxonomy.types();
    let mut ledger = Ledger::new();
    for i in 0..lines {
        let spec = &types[i % types.len()];
        let mut draft = EntryDraft::new(taxonomy);
        draft.set_tax_type(spec.code.clone());
        if spec.requires_province {
            draft.set_province_code(taxonomy.jurisdictions()[i % 24].0);
        }
        draft.set_base_amount(format!("{}", 100 + i));
        draft.set_percentage("3.5");
        draft.commit(&mut ledger, None).unwrap();
    }
    ledger
}

fn bench_commit_1000_entries(c: &mut Criterion) {
    c.bench_function("commit_1000_entries", |b| {
        b.iter(|| black_box(build_ledger(1000)));
    });
}

fn bench_totals_by_type(c: &mut Criterion) {
    let ledger = build_ledger(1000);
    c.bench_function("totals_by_type_1000_entries", |b| {
        b.iter(|| black_box(totals_by_type(Taxonomy::withholding(), black_box(&ledger).entries())));
    });
}

fn bench_grand_total(c: &mut Criterion) {
    let ledger = build_ledger(1000);
    c.bench_function("grand_total_1000_entries", |b| {
        b.iter(|| {
            let total: Decimal = grand_total(Taxonomy::withholding(), black_box(&ledger).entries());
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_commit_1000_entries,
    bench_totals_by_type,
    bench_grand_total,
);
criterion_main!(benches);
