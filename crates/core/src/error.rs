// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("argument {arg} does not have expected length {expected} (got {actual})")]
	InvalidLength {
		arg: &'static str,
		expected: usize,
		actual: usize,
	},
	#[error("factorial digit {digit} at position {index} is not in [0, {index}]")]
	InvalidDigit { index: usize, digit: usize },
	#[error("value {value} at position {index} is not in [0, {len})")]
	OutOfRange {
		index: usize,
		value: usize,
		len: usize,
	},
	#[error("value {value} occurs more than once in the permutation")]
	DuplicateValue { value: usize },
	#[error("rank is not less than {n}!")]
	RankOutOfRange { n: usize },
	#[error("the rank of a length-{n} digit sequence does not fit in 128 bits")]
	RankOverflow { n: usize },
}
