// Copyright 2024-2025 Irreducible Inc.

use std::ops::Deref;

use permrank_utils::{bail, ensure};
use rand::Rng;

use crate::{
	error::Error,
	factorial::{digits_to_rank, rank_to_digits, AllDigits},
};

/// Checks that `digits` is a factorial-number-system digit sequence, i.e. `digits[i] <= i`.
pub fn validate_digits(digits: &[usize]) -> Result<(), Error> {
	for (index, &digit) in digits.iter().enumerate() {
		ensure!(digit <= index, Error::InvalidDigit { index, digit });
	}
	Ok(())
}

/// Checks that `values` contains every integer in `[0, values.len())` exactly once.
pub fn validate_permutation(values: &[usize]) -> Result<(), Error> {
	let len = values.len();
	let mut seen = vec![false; len];
	for (index, &value) in values.iter().enumerate() {
		ensure!(value < len, Error::OutOfRange { index, value, len });
		if seen[value] {
			bail!(Error::DuplicateValue { value });
		}
		seen[value] = true;
	}
	Ok(())
}

/// An arrangement of `{0, ..., n-1}`: every value in `[0, n)` appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation(Vec<usize>);

impl Permutation {
	/// Validates and wraps `values`.
	pub fn new(values: Vec<usize>) -> Result<Self, Error> {
		validate_permutation(&values)?;
		Ok(Self(values))
	}

	pub(crate) fn new_unchecked(values: Vec<usize>) -> Self {
		debug_assert!(validate_permutation(&values).is_ok());
		Self(values)
	}

	/// The identity permutation of length `n`.
	pub fn identity(n: usize) -> Self {
		Self((0..n).collect())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn is_identity(&self) -> bool {
		self.0.iter().enumerate().all(|(i, &v)| i == v)
	}

	pub fn as_slice(&self) -> &[usize] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<usize> {
		self.0
	}

	/// The permutation mapping each value back to its position.
	pub fn inverse(&self) -> Self {
		let mut inverse = vec![0; self.len()];
		for (i, &v) in self.0.iter().enumerate() {
			inverse[v] = i;
		}
		Self(inverse)
	}
}

impl Deref for Permutation {
	type Target = [usize];

	fn deref(&self) -> &[usize] {
		&self.0
	}
}

impl AsRef<[usize]> for Permutation {
	fn as_ref(&self) -> &[usize] {
		&self.0
	}
}

impl TryFrom<Vec<usize>> for Permutation {
	type Error = Error;

	fn try_from(values: Vec<usize>) -> Result<Self, Error> {
		Self::new(values)
	}
}

impl From<Permutation> for Vec<usize> {
	fn from(perm: Permutation) -> Self {
		perm.0
	}
}

/// A rank written in the factorial number system: digit `i` lies in `[0, i]` and carries place
/// value `i!`.
///
/// Digit `0` is always zero; it is kept so that digits and permutations have the same length and
/// can share buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactorialDigits(Vec<usize>);

impl FactorialDigits {
	/// Validates and wraps `digits`.
	pub fn new(digits: Vec<usize>) -> Result<Self, Error> {
		validate_digits(&digits)?;
		Ok(Self(digits))
	}

	pub(crate) fn new_unchecked(digits: Vec<usize>) -> Self {
		debug_assert!(validate_digits(&digits).is_ok());
		Self(digits)
	}

	/// The all-zero digit sequence, rank 0.
	pub fn zero(n: usize) -> Self {
		Self(vec![0; n])
	}

	/// The digits `[0, 1, ..., n-1]`, rank `n! - 1`. Every codec unranks them to the identity.
	pub fn identity(n: usize) -> Self {
		Self((0..n).collect())
	}

	/// Samples a digit sequence with digit `i` drawn uniformly from `[0, i]`.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
		Self((0..n).map(|i| rng.gen_range(0..=i)).collect())
	}

	/// The digits of `rank`, see [`rank_to_digits`].
	pub fn from_rank(rank: u128, n: usize) -> Result<Self, Error> {
		rank_to_digits(rank, n)
	}

	/// Iterates over all `n!` digit sequences of length `n` in increasing rank order.
	pub fn all(n: usize) -> AllDigits {
		AllDigits::new(n)
	}

	/// The integer this digit sequence denotes, see [`digits_to_rank`].
	pub fn rank(&self) -> Result<u128, Error> {
		digits_to_rank(&self.0)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[usize] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<usize> {
		self.0
	}
}

impl Deref for FactorialDigits {
	type Target = [usize];

	fn deref(&self) -> &[usize] {
		&self.0
	}
}

impl AsRef<[usize]> for FactorialDigits {
	fn as_ref(&self) -> &[usize] {
		&self.0
	}
}

impl TryFrom<Vec<usize>> for FactorialDigits {
	type Error = Error;

	fn try_from(digits: Vec<usize>) -> Result<Self, Error> {
		Self::new(digits)
	}
}

impl From<FactorialDigits> for Vec<usize> {
	fn from(digits: FactorialDigits) -> Self {
		digits.0
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_validate_digits() {
		assert!(validate_digits(&[]).is_ok());
		assert!(validate_digits(&[0, 1, 2, 0]).is_ok());
		assert_matches!(
			validate_digits(&[0, 1, 3]),
			Err(Error::InvalidDigit { index: 2, digit: 3 })
		);
		assert_matches!(validate_digits(&[1]), Err(Error::InvalidDigit { index: 0, digit: 1 }));
	}

	#[test]
	fn test_validate_permutation() {
		assert!(validate_permutation(&[]).is_ok());
		assert!(validate_permutation(&[2, 0, 1]).is_ok());
		assert_matches!(
			validate_permutation(&[0, 3, 1]),
			Err(Error::OutOfRange {
				index: 1,
				value: 3,
				len: 3
			})
		);
		assert_matches!(validate_permutation(&[1, 0, 1]), Err(Error::DuplicateValue { value: 1 }));
	}

	#[test]
	fn test_inverse() {
		let perm = Permutation::new(vec![2, 0, 3, 1]).unwrap();
		let inverse = perm.inverse();
		assert_eq!(inverse.as_slice(), &[1, 3, 0, 2]);
		assert_eq!(inverse.inverse(), perm);
		assert!(Permutation::identity(5).inverse().is_identity());
	}

	#[test]
	fn test_try_from() {
		assert!(Permutation::try_from(vec![1, 0]).is_ok());
		assert!(Permutation::try_from(vec![1, 1]).is_err());
		assert!(FactorialDigits::try_from(vec![0, 1, 1]).is_ok());
		assert!(FactorialDigits::try_from(vec![0, 2]).is_err());
	}

	#[test]
	fn test_random_digits_are_valid() {
		let mut rng = StdRng::seed_from_u64(0);
		for n in [0, 1, 2, 17, 1000] {
			let digits = FactorialDigits::random(&mut rng, n);
			assert_eq!(digits.len(), n);
			assert!(validate_digits(&digits).is_ok());
		}
	}

	#[test]
	fn test_identity_digits_rank() {
		assert_eq!(FactorialDigits::identity(4).rank(), Ok(23));
		assert_eq!(FactorialDigits::zero(4).rank(), Ok(0));
	}
}
