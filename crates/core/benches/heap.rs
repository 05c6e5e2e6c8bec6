// Copyright 2024-2025 Irreducible Inc.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use permrank_core::{HeapPermutations, StepCounter};

fn heap(c: &mut Criterion) {
	let mut group = c.benchmark_group("heap_permutations");
	for n in [6, 8, 10] {
		let total = (1..=n as u64).product::<u64>();
		group.throughput(Throughput::Elements(total));
		group.bench_function(format!("{n}"), |bench| {
			bench.iter(|| {
				let mut generator = HeapPermutations::new(n);
				let mut checksum = 0usize;
				while let Some(perm) = generator.advance() {
					checksum = checksum.wrapping_add(perm[n - 1]);
				}
				black_box(checksum)
			});
		});
		group.bench_function(format!("{n}/instrumented"), |bench| {
			bench.iter(|| {
				let mut generator = HeapPermutations::with_instrument(n, StepCounter::default());
				while generator.advance().is_some() {}
				black_box(generator.into_instrument())
			});
		});
	}
}

criterion_group!(generation, heap);
criterion_main!(generation);
