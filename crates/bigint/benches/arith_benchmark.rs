// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bigint::BigInt;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 64, 256];

fn random_operand(rng: &mut StdRng, bytes: usize) -> BigInt {
    let mut buf = vec![0u8; bytes];
    rng.fill(&mut buf[..]);
    // Keep the top byte nonzero so every operand has the requested width.
    buf[bytes - 1] |= 0x80;
    BigInt::from_le_bytes(rng.random_bool(0.5), &buf)
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("arith_benchmark");

    for bytes in SIZES {
        let a = random_operand(&mut rng, bytes);
        let b = random_operand(&mut rng, bytes);
        let divisor = random_operand(&mut rng, bytes / 2);

        group.throughput(Throughput::Bytes(bytes as u64));

        group.bench_with_input(BenchmarkId::new("add", bytes), &bytes, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("mul", bytes), &bytes, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("div_rem", bytes), &bytes, |bench, _| {
            bench.iter(|| black_box(&a).checked_div_rem(black_box(&divisor)))
        });
        group.bench_with_input(BenchmarkId::new("shl", bytes), &bytes, |bench, _| {
            bench.iter(|| black_box(&a) << black_box(13_usize))
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xdec1);
    let mut group = c.benchmark_group("text_benchmark");

    for bytes in SIZES {
        let value = random_operand(&mut rng, bytes);
        let text = value.to_string();

        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("to_string", bytes), &value, |bench, v| {
            bench.iter(|| black_box(v).to_string())
        });
        group.bench_with_input(BenchmarkId::new("parse", bytes), &text, |bench, t| {
            bench.iter(|| black_box(t.as_str()).parse::<BigInt>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_text);
criterion_main!(benches);
