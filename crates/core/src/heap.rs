// Copyright 2024-2025 Irreducible Inc.

use std::iter::FusedIterator;

use permrank_utils::checked_arithmetics::checked_factorial_usize;
use tracing::debug;

use crate::{
	instrument::{HeapStep, Instrument, NoInstrument},
	permutation::Permutation,
};

/// Generates every permutation of `{0, ..., n-1}` with Heap's algorithm.
///
/// The identity is produced first. Each subsequent permutation differs from its predecessor by a
/// single swap, so walking all `n!` permutations through [`Self::advance`] costs `O(n!)` in
/// total. The [`Iterator`] implementation copies each permutation out and is correspondingly
/// `O(n * n!)`.
///
/// The generator is driven by a counter array `c` and a driving index `i`: while `c[i] < i`, it
/// swaps position `i` with position `0` (even `i`) or `c[i]` (odd `i`), bumps `c[i]` and restarts
/// from `i = 1`; otherwise it clears `c[i]` and moves to `i + 1`. It ends when `i` reaches `n`.
#[derive(Debug, Clone)]
pub struct HeapPermutations<I = NoInstrument> {
	data: Vec<usize>,
	counters: Vec<usize>,
	index: usize,
	emitted: usize,
	last_swap: Option<(usize, usize)>,
	done: bool,
	instrument: I,
}

impl HeapPermutations {
	pub fn new(n: usize) -> Self {
		Self::with_instrument(n, NoInstrument)
	}
}

impl<I: Instrument> HeapPermutations<I> {
	/// Creates a generator that reports every step to `instrument`.
	pub fn with_instrument(n: usize, instrument: I) -> Self {
		Self {
			data: (0..n).collect(),
			counters: vec![0; n],
			index: 1,
			emitted: 0,
			last_swap: None,
			done: false,
			instrument,
		}
	}

	/// Number of elements being permuted.
	pub fn n(&self) -> usize {
		self.data.len()
	}

	/// Total number of permutations this generator yields, `None` if `n!` overflows `usize`.
	pub fn total(&self) -> Option<usize> {
		checked_factorial_usize(self.n())
	}

	/// Number of permutations produced since construction or the last [`Self::reset`].
	pub fn emitted(&self) -> usize {
		self.emitted
	}

	/// The most recently produced permutation (the identity before the first call).
	pub fn current(&self) -> &[usize] {
		&self.data
	}

	/// Positions exchanged to produce the current permutation, `None` for the identity.
	pub fn last_swap(&self) -> Option<(usize, usize)> {
		self.last_swap
	}

	pub fn instrument(&self) -> &I {
		&self.instrument
	}

	pub fn into_instrument(self) -> I {
		self.instrument
	}

	/// Restarts the enumeration from the identity. The instrument keeps its state.
	pub fn reset(&mut self) {
		for (i, (value, counter)) in self.data.iter_mut().zip(&mut self.counters).enumerate() {
			*value = i;
			*counter = 0;
		}
		self.index = 1;
		self.emitted = 0;
		self.last_swap = None;
		self.done = false;
	}

	/// Produces the next permutation in place and returns a view of it.
	pub fn advance(&mut self) -> Option<&[usize]> {
		if self.done {
			return None;
		}
		if self.emitted == 0 {
			self.emitted = 1;
			return Some(self.data.as_slice());
		}

		let n = self.data.len();
		while self.index < n {
			let i = self.index;
			self.instrument.record(HeapStep::Check);
			if self.counters[i] < i {
				self.instrument.record(HeapStep::Swap);
				let j = if i % 2 == 0 { 0 } else { self.counters[i] };
				self.data.swap(j, i);
				self.last_swap = Some((j, i));
				self.counters[i] += 1;
				self.index = 1;
				self.emitted += 1;
				return Some(self.data.as_slice());
			}
			self.instrument.record(HeapStep::Reset);
			self.counters[i] = 0;
			self.index += 1;
		}

		self.done = true;
		debug!(n, emitted = self.emitted, "heap permutations exhausted");
		None
	}
}

impl<I: Instrument> Iterator for HeapPermutations<I> {
	type Item = Permutation;

	fn next(&mut self) -> Option<Permutation> {
		self.advance()
			.map(|perm| Permutation::new_unchecked(perm.to_vec()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			return (0, Some(0));
		}
		match self.total() {
			Some(total) => {
				let remaining = total - self.emitted;
				(remaining, Some(remaining))
			}
			None => (usize::MAX, None),
		}
	}
}

impl<I: Instrument> FusedIterator for HeapPermutations<I> {}

/// Calls `visit` on every permutation of `{0, ..., n-1}`, in Heap's order, without copying.
pub fn heap_permutations(n: usize, mut visit: impl FnMut(&[usize])) {
	let mut generator = HeapPermutations::new(n);
	while let Some(perm) = generator.advance() {
		visit(perm);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::instrument::StepCounter;

	fn collect(n: usize) -> Vec<Vec<usize>> {
		let mut out = Vec::new();
		heap_permutations(n, |perm| out.push(perm.to_vec()));
		out
	}

	#[test]
	fn test_order_n3() {
		assert_eq!(
			collect(3),
			vec![
				vec![0, 1, 2],
				vec![1, 0, 2],
				vec![2, 0, 1],
				vec![0, 2, 1],
				vec![1, 2, 0],
				vec![2, 1, 0],
			]
		);
	}

	#[test]
	fn test_trivial_sizes() {
		assert_eq!(collect(0), vec![Vec::<usize>::new()]);
		assert_eq!(collect(1), vec![vec![0]]);
		assert_eq!(collect(2), vec![vec![0, 1], vec![1, 0]]);
	}

	#[test]
	fn test_last_swap() {
		let mut generator = HeapPermutations::new(4);
		generator.advance();
		assert_eq!(generator.last_swap(), None);

		let mut swaps = Vec::new();
		while generator.advance().is_some() {
			swaps.push(generator.last_swap().unwrap());
		}
		assert_eq!(swaps.len(), 23);
		assert_eq!(&swaps[..6], &[(0, 1), (0, 2), (0, 1), (0, 2), (0, 1), (0, 3)]);
	}

	#[test]
	fn test_step_counts() {
		let expected = [(0, 0, 0, 0), (1, 0, 0, 0), (2, 2, 1, 1), (3, 9, 5, 4), (4, 40, 23, 17)];
		for (n, checks, swaps, resets) in expected {
			let mut generator = HeapPermutations::with_instrument(n, StepCounter::default());
			while generator.advance().is_some() {}
			let counter = generator.into_instrument();
			assert_eq!(
				(counter.checks, counter.swaps, counter.resets),
				(checks, swaps, resets),
				"n = {n}"
			);
		}
	}

	#[test]
	fn test_closure_instrument() {
		let mut swaps = 0;
		let mut generator = HeapPermutations::with_instrument(5, |step: HeapStep| {
			if step == HeapStep::Swap {
				swaps += 1;
			}
		});
		while generator.advance().is_some() {}
		drop(generator);
		assert_eq!(swaps, 119);
	}

	#[test]
	fn test_reset_restarts() {
		let mut generator = HeapPermutations::new(4);
		let first = generator.by_ref().collect::<Vec<_>>();
		assert_eq!(generator.next(), None);

		generator.reset();
		assert_eq!(generator.current(), &[0, 1, 2, 3]);
		let second = generator.collect::<Vec<_>>();
		assert_eq!(first, second);
	}

	#[test]
	fn test_size_hint() {
		let mut generator = HeapPermutations::new(4);
		assert_eq!(generator.size_hint(), (24, Some(24)));
		generator.next();
		assert_eq!(generator.size_hint(), (23, Some(23)));
		assert_eq!(generator.count(), 23);
	}
}
