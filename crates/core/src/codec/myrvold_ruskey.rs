// Copyright 2024-2025 Irreducible Inc.

use tracing::instrument;

use super::{check_rank_args, check_unrank_args, PermutationCodec};
use crate::error::Error;

/// The linear-time ranking scheme of Myrvold and Ruskey.
///
/// Unranking starts from the identity and, for `i` from `n - 1` down to `1`, swaps positions `i`
/// and `digits[i]`. Ranking undoes those swaps from the top, tracking the inverse permutation so
/// each step is constant time. Ranking works on a private copy; the caller's permutation is never
/// modified.
///
/// See W. Myrvold, F. Ruskey, "Ranking and unranking permutations in linear time", Information
/// Processing Letters 79 (2001).
#[derive(Debug, Default, Clone, Copy)]
pub struct MyrvoldRuskeyCodec;

impl MyrvoldRuskeyCodec {
	pub const NAME: &'static str = "MyrvoldRuskey";

	pub fn new() -> Self {
		Self
	}
}

impl PermutationCodec for MyrvoldRuskeyCodec {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	#[instrument(skip_all, level = "trace", fields(n = digits.len()))]
	fn unrank(&mut self, digits: &[usize], perm: &mut [usize]) -> Result<(), Error> {
		check_unrank_args(digits, perm)?;
		unrank_into(digits, perm);
		Ok(())
	}

	#[instrument(skip_all, level = "trace", fields(n = perm.len()))]
	fn rank(&mut self, perm: &[usize], digits: &mut [usize]) -> Result<(), Error> {
		check_rank_args(perm, digits)?;
		rank_into(perm, digits);
		Ok(())
	}
}

fn unrank_into(digits: &[usize], perm: &mut [usize]) {
	for (i, slot) in perm.iter_mut().enumerate() {
		*slot = i;
	}
	for i in (1..digits.len()).rev() {
		perm.swap(i, digits[i]);
	}
}

fn rank_into(perm: &[usize], digits: &mut [usize]) {
	let n = perm.len();
	let mut pi = perm.to_vec();
	let mut pi_inv = vec![0; n];
	for (i, &value) in pi.iter().enumerate() {
		pi_inv[value] = i;
	}

	for k in (2..=n).rev() {
		let s = pi[k - 1];
		digits[k - 1] = s;
		pi.swap(k - 1, pi_inv[k - 1]);
		pi_inv.swap(s, k - 1);
	}
	if let Some(first) = digits.first_mut() {
		*first = 0;
	}
}
