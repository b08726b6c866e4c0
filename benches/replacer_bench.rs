use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::replacer::PolicyKind;
use pagesim::sim::{simulate, NullSink};
use pagesim::{FrameCapacity, PageId};

// Deterministic trace with a hot set and a cold scan, mixed by a small LCG.
fn generate_trace(len: usize, pages: i64) -> Vec<PageId> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let r = (state >> 33) as i64;
            if i % 4 == 0 {
                PageId((i as i64) % pages)
            } else {
                PageId(r % (pages / 8).max(1))
            }
        })
        .collect()
}

fn replacer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Replacer");
    let trace = generate_trace(10_000, 512);

    for frames in [16i64, 64, 256].iter() {
        let capacity = FrameCapacity::new(*frames).unwrap();
        for kind in PolicyKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), frames), &capacity, |b, &capacity| {
                b.iter(|| simulate(kind, capacity, &trace, NullSink).faults());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, replacer_benchmark);
criterion_main!(benches);
