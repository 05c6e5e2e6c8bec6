// Copyright 2024-2025 Irreducible Inc.

/// One unit of work performed by [`HeapPermutations`](crate::HeapPermutations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapStep {
	/// The counter at the driving index was inspected.
	Check,
	/// Two elements were exchanged and a new permutation emitted.
	Swap,
	/// An exhausted counter was cleared and the driving index advanced.
	Reset,
}

/// Receives a callback for every [`HeapStep`] of a generator.
///
/// Closures taking a [`HeapStep`] are instruments, so ad-hoc probes need no wrapper type.
pub trait Instrument {
	fn record(&mut self, step: HeapStep);
}

/// The default instrument. Records nothing and compiles away.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoInstrument;

impl Instrument for NoInstrument {
	#[inline(always)]
	fn record(&mut self, _step: HeapStep) {}
}

impl<F: FnMut(HeapStep)> Instrument for F {
	#[inline]
	fn record(&mut self, step: HeapStep) {
		self(step)
	}
}

/// Tallies the steps of a generator run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
	pub checks: u64,
	pub swaps: u64,
	pub resets: u64,
}

impl StepCounter {
	pub fn total(&self) -> u64 {
		self.checks + self.swaps + self.resets
	}
}

impl Instrument for StepCounter {
	#[inline]
	fn record(&mut self, step: HeapStep) {
		match step {
			HeapStep::Check => self.checks += 1,
			HeapStep::Swap => self.swaps += 1,
			HeapStep::Reset => self.resets += 1,
		}
	}
}
