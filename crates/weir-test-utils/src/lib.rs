//! Test utilities for weir development.
//!
//! - [`fixtures`]: drop-tracking values and an instrumented allocator
//!   wrapper that can be told to fail.
//! - [`model`]: a `Vec`-backed reference model of the list and proptest
//!   strategies for generating operation sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use fixtures::{CountingAllocator, DropTally, Tracked};
pub use model::{apply_to_list, list_op, list_ops, ListOp, Outcome, VecModel};
