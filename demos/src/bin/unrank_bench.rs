// Copyright 2024-2025 Irreducible Inc.

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::{value_parser, Parser};
use permrank_core::{
	Algorithm, DynamicCodec, FactorialDigits, MyrvoldRuskeyCodec, PermutationCodec,
};
use permrank_utils::tracing::init_tracing;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

#[derive(Debug, Parser)]
struct Args {
	/// Length of the permutations.
	#[arg(long, env = "PERMRANK_N", default_value_t = 1_000_000, value_parser = value_parser!(u64).range(1..))]
	n: u64,
	/// Calls per algorithm and round.
	#[arg(long, env = "PERMRANK_ITERATIONS", default_value_t = 100)]
	iterations: u64,
	/// Number of distinct random inputs, reused cyclically.
	#[arg(long, default_value_t = 10, value_parser = value_parser!(u64).range(1..))]
	sample_size: u64,
	#[arg(long, default_value_t = 5)]
	rounds: u32,
	/// Seed for the sample generator.
	#[arg(long, default_value_t = 42)]
	seed: u64,
	/// Algorithms to run, in order. May be repeated.
	#[arg(long = "algorithm", default_values_t = [Algorithm::MyrvoldRuskey, Algorithm::PositionPure])]
	algorithms: Vec<Algorithm>,
	/// Time ranking instead of unranking.
	#[arg(long)]
	rank: bool,
	/// Check that every sample round-trips before timing.
	#[arg(long)]
	verify: bool,
}

struct Report {
	name: &'static str,
	n: usize,
	count: u64,
	elapsed: Duration,
	checksum: u64,
}

impl Report {
	fn print(&self) {
		let micros = self.elapsed.as_secs_f64() * 1e6;
		println!("{} - n = {}, count = {}", self.name, self.n, self.count);
		println!("Total Execution time: {:.6} seconds", self.elapsed.as_secs_f64());
		println!("Average time per iteration: {:.3} microseconds", micros / self.count as f64);
		println!("Checksum result: {}", self.checksum);
		println!("----------------------------------------");
	}
}

fn checksum_of(out: &[usize]) -> u64 {
	let n = out.len();
	(out[0] ^ out[n / 2] ^ out[n - 1]) as u64
}

/// Runs `codec` over the samples `count` times, reusing one output buffer.
fn run_test(
	codec: &mut DynamicCodec,
	rank: bool,
	samples: &[Vec<usize>],
	n: usize,
	count: u64,
) -> Result<Report> {
	let mut out = vec![0; n];
	let mut checksum = 0u64;

	let start = Instant::now();
	for (_, sample) in (0..count).zip(samples.iter().cycle()) {
		if rank {
			codec.rank(sample, &mut out)?;
		} else {
			codec.unrank(sample, &mut out)?;
		}
		checksum = checksum.wrapping_add(checksum_of(&out));
	}
	let elapsed = start.elapsed();

	Ok(Report {
		name: codec.name(),
		n,
		count,
		elapsed,
		checksum,
	})
}

fn verify(algorithm: Algorithm, digit_samples: &[FactorialDigits]) -> Result<()> {
	let mut codec = algorithm.codec();
	for (i, digits) in digit_samples.iter().enumerate() {
		let perm = codec.permutation_of(digits)?;
		ensure!(codec.digits_of(&perm)? == *digits, "{algorithm} does not round-trip sample {i}");
	}
	info!(%algorithm, samples = digit_samples.len(), "round trip verified");
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	let n = usize::try_from(args.n).context("n does not fit in usize")?;
	let sample_size =
		usize::try_from(args.sample_size).context("sample size does not fit in usize")?;

	println!("Preparing shared data for n = {n}...");
	let mut rng = StdRng::seed_from_u64(args.seed);
	let digit_samples = (0..sample_size)
		.map(|_| FactorialDigits::random(&mut rng, n))
		.collect::<Vec<_>>();

	if args.verify {
		for &algorithm in &args.algorithms {
			verify(algorithm, &digit_samples)?;
		}
	}

	// Ranking needs permutations as input. Any codec yields valid ones; Myrvold-Ruskey is used so
	// every algorithm ranks the same inputs.
	let samples = if args.rank {
		let mut reference = MyrvoldRuskeyCodec::new();
		digit_samples
			.iter()
			.map(|digits| -> Result<Vec<usize>> {
				Ok(reference.permutation_of(digits)?.into_inner())
			})
			.collect::<Result<Vec<_>>>()?
	} else {
		digit_samples.into_iter().map(FactorialDigits::into_inner).collect()
	};
	println!("Data ready. Starting benchmarks.\n");

	let mut codecs = args
		.algorithms
		.iter()
		.map(Algorithm::codec)
		.collect::<Vec<_>>();
	for round in 1..=args.rounds {
		println!("--- Round {round} ---");
		for codec in &mut codecs {
			let report = run_test(codec, args.rank, &samples, n, args.iterations)?;
			debug!(
				algorithm = report.name,
				round,
				elapsed_ms = report.elapsed.as_millis() as u64,
				"test finished"
			);
			report.print();
		}
	}

	Ok(())
}
