use criterion::{Criterion, black_box, criterion_group, criterion_main};
use multiprec::BigInt;

/// An all-ones magnitude spanning `cells` cells: 2^(32 * cells) - 1.
fn all_ones(cells: u32) -> BigInt {
    (BigInt::one() << (32 * cells)) - BigInt::one()
}

fn bench_div_word(c: &mut Criterion) {
    let a = BigInt::from(u64::MAX);
    let b = BigInt::from(0xDEAD_BEEF_u32);
    c.bench_function("div_2_cells_fast_path", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)))
    });
}

fn bench_div_by_cell(c: &mut Criterion) {
    // Single-cell divisor takes the Horner scan instead of the bit loop.
    let a = all_ones(64);
    let b = BigInt::from(1_000_000_007u64);
    c.bench_function("div_64_cells_by_1_cell", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)))
    });
}

fn bench_div_wide(c: &mut Criterion) {
    let a = all_ones(16);
    let b = all_ones(4);
    c.bench_function("div_16_cells_by_4_cells", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)))
    });
}

fn bench_to_string(c: &mut Criterion) {
    // Decimal formatting is repeated single-cell division underneath.
    let a = all_ones(64);
    c.bench_function("to_string_64_cells", |bench| {
        bench.iter(|| black_box(&a).to_string())
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = all_ones(64).to_string();
    c.bench_function("parse_64_cells", |bench| {
        bench.iter(|| black_box(text.as_str()).parse::<BigInt>().unwrap())
    });
}

criterion_group!(
    benches,
    bench_div_word,
    bench_div_by_cell,
    bench_div_wide,
    bench_to_string,
    bench_parse
);
criterion_main!(benches);
