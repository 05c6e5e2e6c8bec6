// Copyright 2024-2025 Irreducible Inc.

/// Returns early with the given error, converted with `Into`.
///
/// With the `bail_panic` feature the macro panics instead, which gives a backtrace pointing at
/// the failing precondition.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Bails with the given error unless the condition holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct Failure(usize);

	fn check_below(value: usize, limit: usize) -> Result<usize, Failure> {
		ensure!(value < limit, Failure(value));
		Ok(value)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_below(3, 4), Ok(3));
	}

	#[test]
	fn test_ensure_bails() {
		assert_eq!(check_below(4, 4), Err(Failure(4)));
	}
}
