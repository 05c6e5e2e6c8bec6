// Copyright 2024-2025 Irreducible Inc.

use std::time::Instant;

use permrank_core::{Algorithm, FactorialDigits, PermutationCodec};
use rand::{rngs::StdRng, SeedableRng};

fn check_large(n: usize, seed: u64) {
	let mut rng = StdRng::seed_from_u64(seed);
	let digits = FactorialDigits::random(&mut rng, n);
	let reference = Algorithm::MyrvoldRuskey
		.codec()
		.permutation_of(&digits)
		.unwrap();

	for algorithm in Algorithm::ALL {
		let mut codec = algorithm.codec();
		let perm = codec.permutation_of(&digits).unwrap();
		if algorithm.yields_inverse() {
			assert_eq!(perm.inverse(), reference, "{algorithm}");
		} else {
			assert_eq!(perm, reference, "{algorithm}");
		}
		assert_eq!(codec.digits_of(&perm).unwrap(), digits, "{algorithm}");
	}
}

#[test]
fn test_large_permutation() {
	check_large(1 << 16, 42);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_million_elements() {
	let start = Instant::now();
	check_large(1_000_000, 42);
	println!("n = 1000000 verified in {:?}", start.elapsed());
}
