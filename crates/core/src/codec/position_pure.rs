// Copyright 2024-2025 Irreducible Inc.

use tracing::instrument;

use super::{check_rank_args, check_unrank_args, PermutationCodec};
use crate::error::Error;

/// In-place position-map ranking.
///
/// Unranking writes straight into the output with no initialization or copy pass: step `i` moves
/// the value at position `digits[i]` to position `i` and puts `i` in its place. The previous
/// contents of the output buffer are never observed.
///
/// For the same digits the result is the inverse of the permutation produced by
/// [`MyrvoldRuskeyCodec`](super::MyrvoldRuskeyCodec) and [`PositionCodec`](super::PositionCodec),
/// so digit sequences are not interchangeable between this codec and the other two.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionPureCodec;

impl PositionPureCodec {
	pub const NAME: &'static str = "PositionPure";

	pub fn new() -> Self {
		Self
	}
}

impl PermutationCodec for PositionPureCodec {
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
	for (i, &a) in digits.iter().enumerate() {
		// a <= i, so perm[a] was written at an earlier step, or a == i and it is overwritten next.
		perm[i] = perm[a];
		perm[a] = i;
	}
}

fn rank_into(perm: &[usize], digits: &mut [usize]) {
	let n = perm.len();
	let mut local = perm.to_vec();
	let mut map = vec![0; n];
	for (i, &value) in local.iter().enumerate() {
		map[value] = i;
	}

	for i in (0..n).rev() {
		digits[i] = map[i];
		local[map[i]] = local[i];
		map[local[i]] = map[i];
	}
}
