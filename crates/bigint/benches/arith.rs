// Copyright 2025 Irreducible Inc.

use std::iter::repeat_with;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dekker_bigint::{Integer, Radix};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_decimal(rng: &mut StdRng, n_digits: usize) -> Integer {
	let mut text = String::with_capacity(n_digits);
	text.push(char::from(b'1' + rng.random_range(0..9)));
	text.extend(repeat_with(|| char::from(b'0' + rng.random_range(0..10))).take(n_digits - 1));
	Integer::parse(&text, Radix::DEFAULT).expect("digits are valid")
}

fn bench_mul_div(c: &mut Criterion) {
	let mut group = c.benchmark_group("mul_div");
	let mut rng = StdRng::seed_from_u64(0);

	for n_digits in [64, 512, 4096] {
		let parameter = format!("digits={n_digits}");
		let a = random_decimal(&mut rng, 2 * n_digits);
		let b = random_decimal(&mut rng, n_digits);
		group.throughput(Throughput::Elements(a.limb_len() as u64));

		group.bench_function(BenchmarkId::new("multiply", &parameter), |bench| {
			bench.iter(|| b.multiply(&b))
		});
		group.bench_function(BenchmarkId::new("divide", &parameter), |bench| {
			bench.iter(|| a.divide(&b))
		});
		group.bench_function(BenchmarkId::new("remainder", &parameter), |bench| {
			bench.iter(|| a.remainder(&b))
		});
	}

	group.finish();
}

fn bench_radix(c: &mut Criterion) {
	let mut group = c.benchmark_group("radix");
	let mut rng = StdRng::seed_from_u64(1);

	for n_digits in [64, 512, 4096] {
		let parameter = format!("digits={n_digits}");
		let x = random_decimal(&mut rng, n_digits);
		let text = x.to_string();
		group.throughput(Throughput::Bytes(n_digits as u64));

		group.bench_function(BenchmarkId::new("parse", &parameter), |bench| {
			bench.iter(|| Integer::parse(&text, Radix::DEFAULT))
		});
		group.bench_function(BenchmarkId::new("format", &parameter), |bench| {
			bench.iter(|| x.format(Radix::DEFAULT))
		});
	}

	group.finish();
}

criterion_group! {
	name = default;
	config = Criterion::default().sample_size(20).significance_level(0.01);
	targets = bench_mul_div, bench_radix
}
criterion_main!(default);
