// Copyright 2024-2025 Irreducible Inc.

mod dispatch;
mod myrvold_ruskey;
mod per_thread;
mod position;
mod position_pure;

pub use dispatch::{Algorithm, DynamicCodec, ParseAlgorithmError};
pub use myrvold_ruskey::MyrvoldRuskeyCodec;
pub use per_thread::ThreadLocalPositionCodec;
pub use position::{PositionCodec, PositionMapCache};
pub use position_pure::PositionPureCodec;

use permrank_utils::ensure;

use crate::{
	error::Error,
	permutation::{validate_digits, validate_permutation, FactorialDigits, Permutation},
};

/// A bijection between factorial digit sequences and permutations of the same length.
///
/// Both directions validate their input and the length of the output buffer before writing
/// anything, so on error the output is left untouched. For every implementation and every valid
/// input of matching length, `rank` inverts `unrank` and vice versa.
///
/// Implementations take `&mut self` so they may keep scratch buffers between calls. A codec
/// value must therefore not be shared between threads; see [`ThreadLocalPositionCodec`] for a
/// shareable variant.
pub trait PermutationCodec {
	/// Human-readable algorithm name, as used in benchmark reports.
	fn name(&self) -> &'static str;

	/// Writes the permutation denoted by `digits` into `perm`.
	///
	/// ## Preconditions
	///
	/// * `perm.len() == digits.len()`
	/// * `digits[i] <= i` for every `i`
	fn unrank(&mut self, digits: &[usize], perm: &mut [usize]) -> Result<(), Error>;

	/// Writes the factorial digits of `perm` into `digits`.
	///
	/// ## Preconditions
	///
	/// * `digits.len() == perm.len()`
	/// * `perm` is a permutation of `[0, perm.len())`
	fn rank(&mut self, perm: &[usize], digits: &mut [usize]) -> Result<(), Error>;

	/// Allocating form of [`Self::unrank`].
	fn permutation_of(&mut self, digits: &FactorialDigits) -> Result<Permutation, Error> {
		let mut perm = vec![0; digits.len()];
		self.unrank(digits, &mut perm)?;
		Ok(Permutation::new_unchecked(perm))
	}

	/// Allocating form of [`Self::rank`].
	fn digits_of(&mut self, perm: &Permutation) -> Result<FactorialDigits, Error> {
		let mut digits = vec![0; perm.len()];
		self.rank(perm, &mut digits)?;
		Ok(FactorialDigits::new_unchecked(digits))
	}
}

pub(crate) fn check_unrank_args(digits: &[usize], perm: &[usize]) -> Result<(), Error> {
	ensure!(
		perm.len() == digits.len(),
		Error::InvalidLength {
			arg: "perm",
			expected: digits.len(),
			actual: perm.len(),
		}
	);
	validate_digits(digits)
}

pub(crate) fn check_rank_args(perm: &[usize], digits: &[usize]) -> Result<(), Error> {
	ensure!(
		digits.len() == perm.len(),
		Error::InvalidLength {
			arg: "digits",
			expected: perm.len(),
			actual: digits.len(),
		}
	);
	validate_permutation(perm)
}
