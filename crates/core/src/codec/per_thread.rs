// Copyright 2024-2025 Irreducible Inc.

use permrank_utils::thread_local_mut::ThreadLocalMut;

use super::{PermutationCodec, PositionCodec};
use crate::{
	error::Error,
	permutation::{FactorialDigits, Permutation},
};

/// A [`PositionCodec`] that can be shared between threads.
///
/// Every thread that calls into it gets its own codec, and with it its own position map, so
/// concurrent calls never contend for the cache.
#[derive(Debug, Default)]
pub struct ThreadLocalPositionCodec {
	codecs: ThreadLocalMut<PositionCodec>,
}

impl ThreadLocalPositionCodec {
	pub fn new() -> Self {
		Self::default()
	}

	/// See [`PermutationCodec::unrank`].
	pub fn unrank(&self, digits: &[usize], perm: &mut [usize]) -> Result<(), Error> {
		self.codecs
			.with_mut(PositionCodec::new, |codec| codec.unrank(digits, perm))
	}

	/// See [`PermutationCodec::rank`].
	pub fn rank(&self, perm: &[usize], digits: &mut [usize]) -> Result<(), Error> {
		self.codecs
			.with_mut(PositionCodec::new, |codec| codec.rank(perm, digits))
	}

	pub fn permutation_of(&self, digits: &FactorialDigits) -> Result<Permutation, Error> {
		self.codecs
			.with_mut(PositionCodec::new, |codec| codec.permutation_of(digits))
	}

	pub fn digits_of(&self, perm: &Permutation) -> Result<FactorialDigits, Error> {
		self.codecs
			.with_mut(PositionCodec::new, |codec| codec.digits_of(perm))
	}

	/// Number of threads that have used this codec so far.
	pub fn threads(&mut self) -> usize {
		self.codecs.instances()
	}
}
