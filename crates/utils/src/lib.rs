// Copyright 2024-2025 Irreducible Inc.

//! Shared plumbing for the permrank crates: error macros, environment flags, checked
//! arithmetic, thread-local scratch space and tracing setup.

pub mod checked_arithmetics;
pub mod env;
pub mod error_utils;
pub mod thread_local_mut;
pub mod tracing;
