//! Performance benchmarks for deadline computation

use burstmath::{
    compute_deadline, compute_deadlines_batch4, compute_deadlines_batch8, select_scoop, AccountId,
    BaseTarget, BlockParams, GenerationSignature, Nonce, PlotLayout, ScoopIndex,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const GEN_SIG: &str = "2a0757c8af2aa43b29515c872385ede31d0742b1ea29b93a1a8c38a11b8a37a0";

fn bench_params() -> BlockParams {
    BlockParams::new(
        GenerationSignature::from_hex(GEN_SIG).unwrap(),
        ScoopIndex::new(30).unwrap(),
        BaseTarget::genesis(),
        PlotLayout::PoC2,
    )
}

fn bench_scoop_selection(c: &mut Criterion) {
    let gen_sig = GenerationSignature::from_hex(GEN_SIG).unwrap();

    let mut group = c.benchmark_group("scoop_selection");
    for height in [0u64, 41189, u64::MAX] {
        group.bench_with_input(BenchmarkId::new("select_scoop", height), &height, |b, &h| {
            b.iter(|| black_box(select_scoop(h, &gen_sig)));
        });
    }
    group.finish();
}

fn bench_deadline_computation(c: &mut Criterion) {
    let params = bench_params();
    let account = AccountId::new(10282355196851764065);

    let mut group = c.benchmark_group("deadline_computation");
    group.sample_size(10);

    group.throughput(Throughput::Elements(1));
    group.bench_function("scalar", |b| {
        let mut nonce = Nonce::new(0);
        b.iter(|| {
            nonce.increment();
            black_box(compute_deadline(&params, account, nonce))
        });
    });

    group.throughput(Throughput::Elements(4));
    group.bench_function("batch4", |b| {
        let mut base = 0u64;
        b.iter(|| {
            base += 4;
            let pairs = [
                (account, Nonce::new(base)),
                (account, Nonce::new(base + 1)),
                (account, Nonce::new(base + 2)),
                (account, Nonce::new(base + 3)),
            ];
            black_box(compute_deadlines_batch4(&params, &pairs))
        });
    });

    group.throughput(Throughput::Elements(8));
    group.bench_function("batch8", |b| {
        let mut base = 0u64;
        b.iter(|| {
            base += 8;
            let pairs = std::array::from_fn(|i| (account, Nonce::new(base + i as u64)));
            black_box(compute_deadlines_batch8(&params, &pairs))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scoop_selection, bench_deadline_computation);
criterion_main!(benches);
