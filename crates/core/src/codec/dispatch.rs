// Copyright 2024-2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use super::{MyrvoldRuskeyCodec, PermutationCodec, PositionCodec, PositionPureCodec};
use crate::error::Error;

/// Names one of the ranking algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	MyrvoldRuskey,
	Position,
	PositionPure,
}

impl Algorithm {
	pub const ALL: [Algorithm; 3] = [
		Algorithm::MyrvoldRuskey,
		Algorithm::Position,
		Algorithm::PositionPure,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Algorithm::MyrvoldRuskey => MyrvoldRuskeyCodec::NAME,
			Algorithm::Position => PositionCodec::NAME,
			Algorithm::PositionPure => PositionPureCodec::NAME,
		}
	}

	/// Creates a fresh codec for this algorithm.
	pub fn codec(&self) -> DynamicCodec {
		DynamicCodec::new(*self)
	}

	/// Whether unranking yields the inverse of the Myrvold-Ruskey permutation for the same digits.
	pub fn yields_inverse(&self) -> bool {
		matches!(self, Algorithm::PositionPure)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}, expected one of MyrvoldRuskey, Position, PositionPure")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
	type Err = ParseAlgorithmError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Algorithm::ALL
			.into_iter()
			.find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| ParseAlgorithmError(s.to_string()))
	}
}

/// An enum that can be used to switch between codecs at runtime without passing
/// [`PermutationCodec`] as a type parameter.
#[derive(Debug, Clone)]
pub enum DynamicCodec {
	MyrvoldRuskey(MyrvoldRuskeyCodec),
	Position(PositionCodec),
	PositionPure(PositionPureCodec),
}

impl DynamicCodec {
	pub fn new(algorithm: Algorithm) -> Self {
		match algorithm {
			Algorithm::MyrvoldRuskey => DynamicCodec::MyrvoldRuskey(MyrvoldRuskeyCodec::new()),
			Algorithm::Position => DynamicCodec::Position(PositionCodec::new()),
			Algorithm::PositionPure => DynamicCodec::PositionPure(PositionPureCodec::new()),
		}
	}

	pub fn algorithm(&self) -> Algorithm {
		match self {
			DynamicCodec::MyrvoldRuskey(_) => Algorithm::MyrvoldRuskey,
			DynamicCodec::Position(_) => Algorithm::Position,
			DynamicCodec::PositionPure(_) => Algorithm::PositionPure,
		}
	}
}

impl From<Algorithm> for DynamicCodec {
	fn from(algorithm: Algorithm) -> Self {
		Self::new(algorithm)
	}
}

impl PermutationCodec for DynamicCodec {
	fn name(&self) -> &'static str {
		match self {
			DynamicCodec::MyrvoldRuskey(codec) => codec.name(),
			DynamicCodec::Position(codec) => codec.name(),
			DynamicCodec::PositionPure(codec) => codec.name(),
		}
	}

	fn unrank(&mut self, digits: &[usize], perm: &mut [usize]) -> Result<(), Error> {
		match self {
			DynamicCodec::MyrvoldRuskey(codec) => codec.unrank(digits, perm),
			DynamicCodec::Position(codec) => codec.unrank(digits, perm),
			DynamicCodec::PositionPure(codec) => codec.unrank(digits, perm),
		}
	}

	fn rank(&mut self, perm: &[usize], digits: &mut [usize]) -> Result<(), Error> {
		match self {
			DynamicCodec::MyrvoldRuskey(codec) => codec.rank(perm, digits),
			DynamicCodec::Position(codec) => codec.rank(perm, digits),
			DynamicCodec::PositionPure(codec) => codec.rank(perm, digits),
		}
	}
}
