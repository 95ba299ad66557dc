//! Core traits for the crc32itu workspace.
//!
//! This crate provides the interfaces the checksum implementation conforms to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | One-shot and incremental checksum computation |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` |
//! | [`Hash32`] | Streaming 32-bit hash capability set (size, block size, sum, append) |
//!
//! # Error Types
//!
//! - [`ChecksumMismatch`] - a stored checksum did not match the computed one
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
mod hash32;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::ChecksumMismatch;
pub use hash32::Hash32;
