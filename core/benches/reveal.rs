use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, placement) in [("scan", Placement::Scan), ("exact", Placement::Exact)] {
        group.bench_function(name, |b| {
            let params = BoardParams::new(64, 64, 600);
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                Board::generate(params, |params: BoardParams| {
                    placement.generate(params, black_box(seed))
                })
            })
        });
    }
    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    // one huge empty region, worst case for the cascade worklist
    c.bench_function("flood_empty_255", |b| {
        b.iter_batched(
            || Board::from_mine_coords((255, 255), &[]).unwrap(),
            |mut board| board.reveal(black_box((127, 127))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood);
criterion_main!(benches);
