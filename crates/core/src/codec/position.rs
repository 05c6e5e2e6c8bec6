// Copyright 2024-2025 Irreducible Inc.

use tracing::{debug, instrument};

use super::{check_rank_args, check_unrank_args, PermutationCodec};
use crate::error::Error;

/// A reusable position map, keyed by length.
///
/// The map is reallocated only when a call needs a different length than the previous one.
/// Codecs that borrow it overwrite every entry they read, so stale contents from an earlier call
/// never influence a result.
#[derive(Debug, Default, Clone)]
pub struct PositionMapCache {
	map: Vec<usize>,
	resizes: usize,
}

impl PositionMapCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a cache already sized for permutations of length `n`.
	pub fn with_len(n: usize) -> Self {
		Self {
			map: vec![0; n],
			resizes: 0,
		}
	}

	/// Length the cache is currently sized for.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// How many times the map had to be resized to serve a request.
	pub fn resizes(&self) -> usize {
		self.resizes
	}

	/// Releases the storage.
	pub fn clear(&mut self) {
		self.map = Vec::new();
	}

	/// Borrows the map sized for length `n`. The contents are unspecified.
	pub fn get_mut(&mut self, n: usize) -> &mut [usize] {
		if self.map.len() != n {
			debug!(from = self.map.len(), to = n, "resizing position map");
			self.map.resize(n, 0);
			self.resizes += 1;
		}
		&mut self.map
	}
}

/// Ranking through a single position map.
///
/// For the same digits this produces exactly the permutations of
/// [`MyrvoldRuskeyCodec`](super::MyrvoldRuskeyCodec), without swapping through an identity
/// array: unranking copies the digits into the output and patches it in one forward pass,
/// ranking relabels a copy of the permutation in one backward pass. The position map lives in a
/// [`PositionMapCache`] owned by the codec, so repeated calls at the same length do not allocate.
#[derive(Debug, Default, Clone)]
pub struct PositionCodec {
	cache: PositionMapCache,
}

impl PositionCodec {
	pub const NAME: &'static str = "Position";

	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_cache(cache: PositionMapCache) -> Self {
		Self { cache }
	}

	pub fn cache(&self) -> &PositionMapCache {
		&self.cache
	}

	pub fn into_cache(self) -> PositionMapCache {
		self.cache
	}
}

impl PermutationCodec for PositionCodec {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	#[instrument(skip_all, level = "trace", fields(n = digits.len()))]
	fn unrank(&mut self, digits: &[usize], perm: &mut [usize]) -> Result<(), Error> {
		check_unrank_args(digits, perm)?;
		unrank_into(digits, perm, self.cache.get_mut(digits.len()));
		Ok(())
	}

	#[instrument(skip_all, level = "trace", fields(n = perm.len()))]
	fn rank(&mut self, perm: &[usize], digits: &mut [usize]) -> Result<(), Error> {
		check_rank_args(perm, digits)?;
		rank_into(perm, digits, self.cache.get_mut(perm.len()));
		Ok(())
	}
}

fn unrank_into(digits: &[usize], perm: &mut [usize], map: &mut [usize]) {
	perm.copy_from_slice(digits);
	for i in 0..perm.len() {
		// map[i] is read below when digits[i] == i, before anything else writes it.
		map[i] = i;
		let c_i = perm[i];
		let m_c_i = map[c_i];
		map[i] = m_c_i;
		map[c_i] = i;
		perm[m_c_i] = i;
	}
}

fn rank_into(perm: &[usize], digits: &mut [usize], map: &mut [usize]) {
	for (i, &value) in perm.iter().enumerate() {
		map[value] = i;
	}
	digits.copy_from_slice(perm);
	// Statement order and traversal direction both matter here.
	for i in (0..perm.len()).rev() {
		digits[map[i]] = digits[i];
		map[digits[i]] = map[i];
	}
}
