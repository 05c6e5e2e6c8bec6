// Copyright 2024-2025 Irreducible Inc.

//! Linear-time permutation ranking and unranking, and Heap's permutation generator.
//!
//! A permutation of length `n` is identified by its *factorial digits*: a sequence `C` with
//! `0 <= C[i] <= i`, i.e. a number written in the factorial number system. This crate provides
//! three codecs converting between the two representations:
//!
//! * [`MyrvoldRuskeyCodec`]: the classic swap-based scheme of Myrvold and Ruskey.
//! * [`PositionCodec`]: a position-map formulation that produces the same permutations as
//!   Myrvold-Ruskey, using one reusable auxiliary map.
//! * [`PositionPureCodec`]: an in-place unranking that writes straight into the output and needs
//!   no initialization pass. For the same digits it yields the *inverse* of the other two.
//!
//! [`HeapPermutations`] enumerates all `n!` permutations with a single swap per step.
//!
//! All codec operations validate their inputs before touching the output buffer and fail with
//! [`Error`] on malformed arguments.

mod codec;
mod error;
mod factorial;
mod heap;
mod instrument;
mod permutation;

pub use codec::*;
pub use error::*;
pub use factorial::*;
pub use heap::*;
pub use instrument::*;
pub use permutation::*;
