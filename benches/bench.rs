use core::hint::black_box;
use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
    measurement::WallTime,
};
use ct_compare::Strategy;

/// Where the single differing byte sits.
#[derive(Clone, Copy)]
enum Mismatch {
    First,
    Last,
    None,
}

impl Mismatch {
    const ALL: [Mismatch; 3] = [Mismatch::First, Mismatch::Last, Mismatch::None];

    fn label(self) -> &'static str {
        match self {
            Mismatch::First => "first",
            Mismatch::Last => "last",
            Mismatch::None => "equal",
        }
    }
}

fn bench_strategy(group: &mut BenchmarkGroup<WallTime>, strategy: Strategy, size: usize) {
    let a = vec![0x5au8; size];
    for mismatch in Mismatch::ALL {
        let mut b = a.clone();
        match mismatch {
            Mismatch::First => b[0] ^= 0x01,
            Mismatch::Last => b[size - 1] ^= 0x01,
            Mismatch::None => {}
        }

        let input = (&a[..], &b[..]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new(mismatch.label(), size),
            &input,
            |bencher, &(x, y)| bencher.iter(|| strategy.compare(black_box(x), black_box(y), size)),
        );
    }
}

/// The insecure strategy should finish much faster with a mismatch in the first byte; the
/// constant-time ones should take the same time for all three inputs.
fn bench_mismatch_position(c: &mut Criterion) {
    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(strategy.name());
        for &size in &[16, 32, 64, 4 * 1024, 64 * 1024] {
            bench_strategy(&mut group, strategy, size);
        }
        group.finish();
    }
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_time_compare_xor_n");

    fn bench_array_n<const N: usize>(group: &mut BenchmarkGroup<WallTime>) {
        let input = (&[1; N], &[2; N]);
        group.throughput(Throughput::Bytes(N as u64));
        group.bench_with_input(BenchmarkId::from_parameter(N), &input, |b, &(x, y)| {
            b.iter(|| ct_compare::constant_time_compare_xor_n(black_box(x), black_box(y)))
        });
    }

    bench_array_n::<16>(&mut group);
    bench_array_n::<32>(&mut group);
    bench_array_n::<64>(&mut group);

    group.finish();
}

criterion_group!(benches, bench_mismatch_position, bench_array);
criterion_main!(benches);
