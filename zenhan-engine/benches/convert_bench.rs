//! Benchmarks for halfwidth/fullwidth string conversion
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use zenhan_engine::{MappingTable, TableRules, to_fullwidth, to_halfwidth, table::build_rules};

const HALFWIDTH_TEXT: &str = "ﾊﾞｰﾄ･ｼﾝﾌﾟｿﾝ ﾊﾟﾜｰｸﾘｰﾝ! Hello, World 12345 ｢ﾃｽﾄ｣｡";
const FULLWIDTH_TEXT: &str = "バート・シンプソン　パワークリーン！\u{FE00}　Ｈｅｌｌｏ，　Ｗｏｒｌｄ　１２３４５　「テスト」。";

fn bench_convert(c: &mut Criterion) {
    // Build the shared tables outside the measurement
    let _ = to_fullwidth(" ");

    let mut group = c.benchmark_group("convert");
    group.bench_function("to_fullwidth", |b| {
        b.iter(|| to_fullwidth(black_box(HALFWIDTH_TEXT)))
    });
    group.bench_function("to_halfwidth", |b| {
        b.iter(|| to_halfwidth(black_box(FULLWIDTH_TEXT)))
    });

    let long_text = HALFWIDTH_TEXT.repeat(100);
    group.bench_function("to_fullwidth_long", |b| {
        b.iter(|| to_fullwidth(black_box(&long_text)))
    });
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let rules: TableRules = build_rules();
    c.bench_function("table_build", |b| {
        b.iter(|| MappingTable::build(black_box(&rules)))
    });
}

criterion_group!(benches, bench_convert, bench_table_build);
criterion_main!(benches);
