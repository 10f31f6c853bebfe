use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{sync::Barrier, thread::scope, time::Instant};
use token62::{
    ENCODED_CAPACITY, LockRandom, MAX_TOKEN_LENGTH, RandSource, ThreadRandom, Token,
    TokenGenerator, decode, encode, encode_to_buf, max_value_for_length,
};

// Number of tokens processed per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_TOKENS: usize = 4096;

/// Spreads values across every encoded length.
fn sample_values() -> Vec<u64> {
    (0..TOTAL_TOKENS as u64)
        .map(|i| {
            let len = (i as usize % MAX_TOKEN_LENGTH) + 1;
            (max_value_for_length(len) - 1).saturating_sub(i)
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let values = sample_values();
    let encoded: Vec<String> = values.iter().map(|v| encode(*v)).collect();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(TOTAL_TOKENS as u64));

    group.bench_function(format!("encode/elems/{TOTAL_TOKENS}"), |b| {
        b.iter(|| {
            for v in &values {
                black_box(encode(black_box(*v)));
            }
        });
    });

    group.bench_function(format!("encode_to_buf/elems/{TOTAL_TOKENS}"), |b| {
        let mut buf = [0_u8; ENCODED_CAPACITY];
        b.iter(|| {
            for v in &values {
                black_box(encode_to_buf(black_box(*v), &mut buf));
            }
        });
    });

    group.bench_function(format!("decode/elems/{TOTAL_TOKENS}"), |b| {
        b.iter(|| {
            for s in &encoded {
                let _ = black_box(decode(black_box(s)));
            }
        });
    });

    group.finish();
}

/// Benchmarks single-threaded generation from one shared generator.
fn bench_generator<R>(c: &mut Criterion, group_name: &str, generator: TokenGenerator<R>)
where
    R: RandSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_TOKENS as u64));

    group.bench_function(format!("elems/{TOTAL_TOKENS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_TOKENS {
                black_box(generator.next_token_with_length(MAX_TOKEN_LENGTH));
            }
        });
    });

    group.finish();
}

/// Benchmarks contended generation: every thread shares one generator.
fn bench_generator_threaded<R>(
    c: &mut Criterion,
    group_name: &str,
    generator: TokenGenerator<R>,
    thread_counts: &[usize],
) where
    R: RandSource<u64> + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for &threads in thread_counts {
        group.throughput(Throughput::Elements((TOTAL_TOKENS * threads) as u64));
        group.bench_function(format!("threads/{threads}"), |b| {
            b.iter_custom(|iters| {
                let barrier = Barrier::new(threads + 1);
                let mut elapsed = core::time::Duration::ZERO;
                scope(|s| {
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let (barrier, generator) = (&barrier, &generator);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..iters {
                                    for _ in 0..TOTAL_TOKENS {
                                        black_box(
                                            generator.next_token_with_length(MAX_TOKEN_LENGTH),
                                        );
                                    }
                                }
                            })
                        })
                        .collect();
                    barrier.wait();
                    let start = Instant::now();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    elapsed = start.elapsed();
                });
                elapsed
            });
        });
    }

    group.finish();
}

fn benchmarks(c: &mut Criterion) {
    bench_codec(c);

    bench_generator(c, "generator/thread_random", TokenGenerator::new(ThreadRandom));
    bench_generator(
        c,
        "generator/lock_random",
        TokenGenerator::new(LockRandom::seed_from_u64(42)),
    );
    bench_generator_threaded(
        c,
        "generator/thread_random/mt",
        TokenGenerator::new(ThreadRandom),
        &[1, 2, 4, 8],
    );
    bench_generator_threaded(
        c,
        "generator/lock_random/mt",
        TokenGenerator::new(LockRandom::seed_from_u64(42)),
        &[1, 2, 4, 8],
    );

    c.bench_function("token/random", |b| b.iter(|| black_box(Token::random())));
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
