//! CRC-32 as specified by ITU-T I.363.5 (ATM AAL5), also used by bzip2.
//!
//! This is the MSB-first sibling of the zlib/Ethernet CRC-32: same generator
//! polynomial, but input bits are not reflected, so the two produce different
//! values for the same input.
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | 0x04C11DB7 |
//! | Initial / final XOR | 0xFFFFFFFF / 0xFFFFFFFF |
//! | Reflected | no |
//! | Check (`"123456789"`) | 0xFC891918 |
//! | Residue | 0x38FB2284 |
//!
//! # Example
//!
//! ```rust
//! use crc32itu::{Checksum, ChecksumCombine, Crc32Itu, Hash32};
//!
//! // One-shot
//! let crc = crc32itu::checksum(b"123456789");
//! assert_eq!(crc, 0xFC89_1918);
//!
//! // Chaining a previous result
//! assert_eq!(crc32itu::update(crc32itu::checksum(b"1234"), b"56789"), crc);
//!
//! // Streaming
//! let mut h = crc32itu::new();
//! h.append(b"1234");
//! h.append(b"56789");
//! assert_eq!(h.sum32(), crc);
//! assert_eq!(h.sum(&[]), crc.to_be_bytes());
//!
//! // Combine independently computed parts
//! let combined = Crc32Itu::combine(crc32itu::checksum(b"1234"), crc32itu::checksum(b"56789"), 5);
//! assert_eq!(combined, crc);
//! ```
//!
//! # Kernel Selection
//!
//! All kernels are portable and compute the same function. The slice-by-8
//! kernel handles buffers of at least 64 bytes, a single-table loop handles
//! the rest. `CRC32ITU_FORCE` and `CRC32ITU_THRESHOLD_SLICE8` override the
//! choice; see [`Crc32ItuConfig`].
//!
//! # no_std Support
//!
//! Disable default features for `no_std`. The `alloc` feature brings back
//! [`Hash32::sum`]; `std` adds the I/O adapters and environment overrides.
//!
//! ```toml
//! [dependencies]
//! crc32itu = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;
pub mod constants;
mod crc32;
pub mod dispatchers;
#[cfg(feature = "std")]
pub mod io;

#[doc(hidden)]
pub mod __internal {
  pub use crate::{
    common::reference::crc32_itu_reference,
    crc32::portable::{crc32_itu_bytewise, crc32_itu_reference as crc32_itu_bitwise, crc32_itu_slice8},
  };
}

pub use constants::POLYNOMIAL;
pub use crc32::{Crc32Itu, Crc32ItuConfig, Crc32ItuForce, Crc32ItuTunables};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine, ChecksumMismatch, Hash32};

/// Size of a CRC-32/ITU checksum in bytes.
pub const SIZE: usize = 4;

/// Preferred input granularity of [`Crc32Itu`] in bytes.
pub const BLOCK_SIZE: usize = 1;

/// Compute the CRC-32/ITU checksum of `data`.
///
/// ```rust
/// assert_eq!(crc32itu::checksum(b"123456789"), crc32itu::constants::CHECK);
/// assert_eq!(crc32itu::checksum(b""), 0);
/// ```
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
  crc32::update(0, data)
}

/// Continue a checksum: returns the checksum of `A ++ data` given
/// `prior == checksum(A)`.
///
/// `update(0, data)` is `checksum(data)`.
#[inline]
#[must_use]
pub fn update(prior: u32, data: &[u8]) -> u32 {
  crc32::update(prior, data)
}

/// New streaming accumulator in the empty-input state.
#[inline]
#[must_use]
pub fn new() -> Crc32Itu {
  Crc32Itu::new()
}

/// The shared byte-at-a-time lookup table.
///
/// Entry `i` is the register after dividing `i << 24` by the polynomial.
#[inline]
#[must_use]
pub fn table() -> &'static [u32; 256] {
  &constants::TABLE
}

/// Build a fresh copy of the lookup table.
///
/// Always equal to [`table()`]; usable in `const` contexts.
#[inline]
#[must_use]
pub const fn generate_table() -> [u32; 256] {
  common::tables::generate_table(POLYNOMIAL)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sizes() {
    assert_eq!(SIZE, <Crc32Itu as Checksum>::OUTPUT_SIZE);
    assert_eq!(BLOCK_SIZE, <Crc32Itu as Hash32>::BLOCK_SIZE);
  }

  #[test]
  fn table_is_generated_table() {
    const BUILT: [u32; 256] = generate_table();
    assert_eq!(table(), &BUILT);
    assert_eq!(table()[1], POLYNOMIAL);
    assert_eq!(table()[255], 0xB1F7_40B4);
  }

  #[test]
  fn update_from_zero_is_checksum() {
    for data in [&b""[..], b"a", b"abc", b"123456789"] {
      assert_eq!(update(0, data), checksum(data));
    }
    assert_eq!(update(checksum(b"123"), b""), checksum(b"123"));
  }

  #[test]
  fn free_new_matches_default() {
    assert_eq!(new(), Crc32Itu::default());
  }
}
