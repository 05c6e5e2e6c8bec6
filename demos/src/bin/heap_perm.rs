// Copyright 2024-2025 Irreducible Inc.

use std::time::Instant;

use anyhow::{ensure, Result};
use clap::{value_parser, Parser};
use permrank_core::{HeapPermutations, StepCounter};
use permrank_utils::tracing::init_tracing;
use tracing::info;

/// Permutations are printed individually up to this size.
const PRINT_LIMIT: usize = 5;

#[derive(Debug, Parser)]
struct Args {
	/// Number of elements to permute.
	#[arg(long, env = "PERMRANK_N", default_value_t = 12, value_parser = value_parser!(u32).range(..=20))]
	n: u32,
	/// Also report how many checks, swaps and resets the generator performed.
	#[arg(long)]
	count_steps: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	let n = args.n as usize;
	info!(n, "generating permutations");

	let mut generator = HeapPermutations::with_instrument(n, StepCounter::default());
	let mut checksum = 0u64;
	let start = Instant::now();
	while let Some(perm) = generator.advance() {
		if n <= PRINT_LIMIT {
			println!();
			for value in perm {
				print!("{value},");
			}
		}
		checksum = perm
			.iter()
			.fold(checksum, |acc, &value| acc.wrapping_add(value as u64));
	}
	let elapsed = start.elapsed();

	ensure!(
		generator.total() == Some(generator.emitted()),
		"generator stopped after {} permutations",
		generator.emitted()
	);

	print!("\nheap_perm\t{n}\t{:.6} seconds", elapsed.as_secs_f64());
	match generator.current().last() {
		Some(last) => println!("\nD[{}] = {last}, checksum = {checksum}", n - 1),
		None => println!("\nchecksum = {checksum}"),
	}

	if args.count_steps {
		let counter = generator.into_instrument();
		println!(
			"checks = {}, swaps = {}, resets = {}, total = {}",
			counter.checks,
			counter.swaps,
			counter.resets,
			counter.total()
		);
	}

	Ok(())
}
