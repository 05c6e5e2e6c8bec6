// Copyright 2024-2025 Irreducible Inc.

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_U128_FACTORIAL_ARG: usize = 34;

/// Largest `n` whose factorial fits in a `usize` on this target.
pub const MAX_USIZE_FACTORIAL_ARG: usize = if usize::BITS == 64 { 20 } else { 12 };

/// Computes `n!`, or `None` when it does not fit in a `u128`.
pub const fn checked_factorial(n: usize) -> Option<u128> {
	let mut acc: u128 = 1;
	let mut i = 2;
	while i <= n {
		acc = match acc.checked_mul(i as u128) {
			Some(next) => next,
			None => return None,
		};
		i += 1;
	}
	Some(acc)
}

/// Computes `n!` as a `usize`, or `None` on overflow.
pub fn checked_factorial_usize(n: usize) -> Option<usize> {
	checked_factorial(n).and_then(|f| usize::try_from(f).ok())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_small_factorials() {
		assert_eq!(checked_factorial(0), Some(1));
		assert_eq!(checked_factorial(1), Some(1));
		assert_eq!(checked_factorial(5), Some(120));
		assert_eq!(checked_factorial(12), Some(479_001_600));
		assert_eq!(checked_factorial(20), Some(2_432_902_008_176_640_000));
	}

	#[test]
	fn test_factorial_limits() {
		assert!(checked_factorial(MAX_U128_FACTORIAL_ARG).is_some());
		assert_eq!(checked_factorial(MAX_U128_FACTORIAL_ARG + 1), None);
		assert!(checked_factorial_usize(MAX_USIZE_FACTORIAL_ARG).is_some());
		assert_eq!(checked_factorial_usize(MAX_USIZE_FACTORIAL_ARG + 1), None);
	}
}
