// Copyright 2024-2025 Irreducible Inc.

use std::cell::RefCell;

use thread_local::ThreadLocal;

/// Per-thread scratch state with mutable access through a shared reference.
///
/// Each thread lazily creates its own `T` on first use and keeps it until the container is
/// dropped, so state that is expensive to allocate (buffers sized by the input length) is paid
/// for once per thread rather than once per call.
#[derive(Debug, Default)]
pub struct ThreadLocalMut<T: Send>(ThreadLocal<RefCell<T>>);

impl<T: Send> ThreadLocalMut<T> {
	pub fn new() -> Self {
		Self(ThreadLocal::new())
	}

	/// Runs `run_scope` with this thread's value, creating it with `init` if needed.
	///
	/// ## Panics
	///
	/// Panics if called re-entrantly from within `run_scope` on the same thread.
	#[inline]
	pub fn with_mut<U>(&self, init: impl FnOnce() -> T, run_scope: impl FnOnce(&mut T) -> U) -> U {
		let cell = self.0.get_or(|| RefCell::new(init()));
		run_scope(&mut cell.borrow_mut())
	}

	/// Number of threads that have created a value so far.
	pub fn instances(&mut self) -> usize {
		self.0.iter_mut().count()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Barrier;

	use super::*;

	#[test]
	fn test_value_persists_within_thread() {
		let mut scratch = ThreadLocalMut::<Vec<usize>>::new();
		scratch.with_mut(Vec::new, |v| v.push(1));
		scratch.with_mut(Vec::new, |v| v.push(2));
		assert_eq!(scratch.with_mut(Vec::new, |v| v.clone()), vec![1, 2]);
		assert_eq!(scratch.instances(), 1);
	}

	#[test]
	fn test_threads_get_private_values() {
		const THREADS: usize = 4;

		let mut scratch = ThreadLocalMut::<Vec<usize>>::new();
		let barrier = Barrier::new(THREADS);
		std::thread::scope(|s| {
			for id in 0..THREADS {
				let (scratch, barrier) = (&scratch, &barrier);
				s.spawn(move || {
					// Keep every thread alive until all have pushed, so no slot is recycled.
					barrier.wait();
					scratch.with_mut(Vec::new, |v| v.push(id));
					assert_eq!(scratch.with_mut(Vec::new, |v| v.clone()), vec![id]);
					barrier.wait();
				});
			}
		});
		assert_eq!(scratch.instances(), THREADS);
	}
}
