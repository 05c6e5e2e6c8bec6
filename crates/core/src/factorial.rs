// Copyright 2024-2025 Irreducible Inc.

use std::iter::FusedIterator;

use permrank_utils::{checked_arithmetics::checked_factorial, ensure};

use crate::{
	error::Error,
	permutation::{validate_digits, FactorialDigits},
};

/// Evaluates a factorial-number-system digit sequence: `sum(digits[i] * i!)`.
///
/// Fails with [`Error::RankOverflow`] when the value does not fit in a `u128`, which can only
/// happen for sequences longer than 34 digits.
pub fn digits_to_rank(digits: &[usize]) -> Result<u128, Error> {
	validate_digits(digits)?;

	let n = digits.len();
	let overflow = || Error::RankOverflow { n };
	let mut rank = 0u128;
	for (i, &digit) in digits.iter().enumerate().rev() {
		rank = rank
			.checked_mul(i as u128 + 1)
			.and_then(|rank| rank.checked_add(digit as u128))
			.ok_or_else(overflow)?;
	}
	Ok(rank)
}

/// Writes `rank` as `n` factorial digits.
///
/// Fails with [`Error::RankOutOfRange`] unless `rank < n!`.
pub fn rank_to_digits(rank: u128, n: usize) -> Result<FactorialDigits, Error> {
	if let Some(limit) = checked_factorial(n) {
		ensure!(rank < limit, Error::RankOutOfRange { n });
	}

	let mut rest = rank;
	let digits = (0..n)
		.map(|i| {
			let radix = i as u128 + 1;
			let digit = rest % radix;
			rest /= radix;
			digit as usize
		})
		.collect();
	Ok(FactorialDigits::new_unchecked(digits))
}

/// Iterator over every factorial digit sequence of a fixed length, in increasing rank order.
///
/// Created by [`FactorialDigits::all`].
#[derive(Debug, Clone)]
pub struct AllDigits {
	next: Option<Vec<usize>>,
}

impl AllDigits {
	pub(crate) fn new(n: usize) -> Self {
		Self {
			next: Some(vec![0; n]),
		}
	}
}

impl Iterator for AllDigits {
	type Item = FactorialDigits;

	fn next(&mut self) -> Option<FactorialDigits> {
		let current = self.next.take()?;

		// Increment as a mixed-radix counter; digit 0 has radix 1 and never moves.
		let mut successor = current.clone();
		for (i, digit) in successor.iter_mut().enumerate().skip(1) {
			if *digit < i {
				*digit += 1;
				self.next = Some(successor);
				break;
			}
			*digit = 0;
		}

		Some(FactorialDigits::new_unchecked(current))
	}
}

impl FusedIterator for AllDigits {}
