//! CRC-32/ITU (ITU-T I.363.5, MSB-first) implementation.
//!
//! This module provides:
//! - [`Crc32Itu`] - the streaming accumulator
//! - kernel selection (byte-at-a-time vs slice-by-8) and its configuration
//!
//! # Quick Start
//!
//! ```rust
//! use crc32itu::{Checksum, ChecksumCombine, Crc32Itu};
//!
//! let data = b"123456789";
//! assert_eq!(Crc32Itu::checksum(data), 0xFC89_1918);
//!
//! let (a, b) = data.split_at(4);
//! let combined = Crc32Itu::combine(Crc32Itu::checksum(a), Crc32Itu::checksum(b), b.len());
//! assert_eq!(combined, Crc32Itu::checksum(data));
//! ```

pub(crate) mod config;
pub(crate) mod kernels;
pub(crate) mod portable;

use core::fmt;

pub use config::{Crc32ItuConfig, Crc32ItuForce, Crc32ItuTunables};
// Re-export traits for test modules (`use super::*`).
#[allow(unused_imports)]
pub(super) use traits::{Checksum, ChecksumCombine, ChecksumMismatch, Hash32};

use crate::{
  common::combine::{Gf2Matrix32, combine_crc32, generate_shift8_matrix_32_msb},
  constants::POLYNOMIAL,
  dispatchers::{Crc32Dispatcher, Selected},
};

// ─────────────────────────────────────────────────────────────────────────────
// Portable Kernel Wrapper (auto selection)
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn crc32_itu_portable_auto(crc: u32, data: &[u8]) -> u32 {
  if data.len() < crc32_itu_bytewise_to_slice8() {
    portable::crc32_itu_bytewise(crc, data)
  } else {
    portable::crc32_itu_slice8(crc, data)
  }
}

#[cfg(feature = "std")]
use std::sync::OnceLock;

#[cfg(feature = "std")]
static CRC32_ITU_BYTEWISE_TO_SLICE8: OnceLock<usize> = OnceLock::new();

#[inline]
#[must_use]
fn crc32_itu_bytewise_to_slice8() -> usize {
  #[cfg(feature = "std")]
  {
    *CRC32_ITU_BYTEWISE_TO_SLICE8.get_or_init(|| config::get().tunables.bytewise_to_slice8)
  }
  #[cfg(not(feature = "std"))]
  {
    config::get().tunables.bytewise_to_slice8
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Introspection
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
#[must_use]
pub(crate) fn crc32_itu_selected_kernel_name(len: usize) -> &'static str {
  let cfg = config::get();
  match cfg.effective_force {
    Crc32ItuForce::Reference => kernels::REFERENCE,
    Crc32ItuForce::Bytewise => kernels::PORTABLE_BYTEWISE,
    Crc32ItuForce::Slice8 => kernels::PORTABLE_SLICE8,
    Crc32ItuForce::Auto => kernels::portable_name_for_len(len, cfg.tunables.bytewise_to_slice8),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher Selection
// ─────────────────────────────────────────────────────────────────────────────

fn select_crc32_itu() -> Selected<crate::dispatchers::Crc32Fn> {
  let cfg = config::get();
  #[cfg(feature = "std")]
  let _ = CRC32_ITU_BYTEWISE_TO_SLICE8.get_or_init(|| cfg.tunables.bytewise_to_slice8);

  match cfg.effective_force {
    Crc32ItuForce::Reference => Selected::new(kernels::REFERENCE, portable::crc32_itu_reference),
    Crc32ItuForce::Bytewise => Selected::new(kernels::PORTABLE_BYTEWISE, portable::crc32_itu_bytewise),
    Crc32ItuForce::Slice8 => Selected::new(kernels::PORTABLE_SLICE8, portable::crc32_itu_slice8),
    Crc32ItuForce::Auto => Selected::new(kernels::PORTABLE_AUTO, crc32_itu_portable_auto),
  }
}

static CRC32_ITU_DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select_crc32_itu);

/// Run the selected kernel over `data`, starting from a finalized CRC value.
#[inline]
#[must_use]
pub(crate) fn update(crc: u32, data: &[u8]) -> u32 {
  CRC32_ITU_DISPATCHER.call(crc ^ Crc32Itu::XOROUT, data) ^ Crc32Itu::XOROUT
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32/ITU Type
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ITU checksum: the ITU-T I.363.5 CRC used by ATM AAL5 and bzip2.
///
/// Unlike the common zlib/Ethernet CRC-32, input bits enter the division most
/// significant bit first.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: No
/// - **Check** (`"123456789"`): 0xFC891918
///
/// # Examples
///
/// ```rust
/// use crc32itu::{Checksum, Crc32Itu, Hash32};
///
/// let mut crc = Crc32Itu::new();
/// assert_eq!(crc.append(b"1234"), 4);
/// assert_eq!(crc.append(b"56789"), 5);
/// assert_eq!(crc.sum32(), 0xFC89_1918);
/// assert_eq!(crc.sum(b">"), [b'>', 0xFC, 0x89, 0x19, 0x18]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Crc32Itu {
  state: u32,
}

impl Crc32Itu {
  const INIT: u32 = !0;
  const XOROUT: u32 = !0;

  /// Pre-computed shift-by-8 matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix32 = generate_shift8_matrix_32_msb(POLYNOMIAL);

  /// Create a hasher to resume from a previous CRC value.
  ///
  /// Equivalent to [`Checksum::with_initial`], usable in `const` contexts.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ Self::XOROUT }
  }

  /// Check `data` against a stored checksum.
  ///
  /// # Errors
  ///
  /// Returns [`ChecksumMismatch`] carrying both values when they differ.
  pub fn verify(data: &[u8], expected: u32) -> Result<(), ChecksumMismatch> {
    let actual = update(0, data);
    if actual == expected { Ok(()) } else { Err(ChecksumMismatch::new(expected, actual)) }
  }

  /// Get the name of the currently selected backend.
  #[must_use]
  pub fn backend_name() -> &'static str {
    CRC32_ITU_DISPATCHER.backend_name()
  }

  /// Get the effective CRC-32/ITU configuration.
  #[must_use]
  pub fn config() -> Crc32ItuConfig {
    config::get()
  }

  /// Convenience accessor for the active tunables.
  #[must_use]
  pub fn tunables() -> Crc32ItuTunables {
    Self::config().tunables
  }

  /// Returns the kernel name that the selector would choose for `len`.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    crc32_itu_selected_kernel_name(len)
  }
}

impl traits::Checksum for Crc32Itu {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: Self::INIT }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = CRC32_ITU_DISPATCHER.call(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ Self::XOROUT
  }

  #[inline]
  fn reset(&mut self) {
    self.state = Self::INIT;
  }
}

impl Default for Crc32Itu {
  fn default() -> Self {
    <Self as traits::Checksum>::new()
  }
}

impl traits::ChecksumCombine for Crc32Itu {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

impl traits::Hash32 for Crc32Itu {}

impl fmt::Debug for Crc32Itu {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32Itu").field("crc", &format_args!("{:#010x}", self.finalize())).finish()
  }
}

/// `Hasher::finish` returns the current CRC widened to `u64`.
impl core::hash::Hasher for Crc32Itu {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    traits::Checksum::update(self, bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    u64::from(self.finalize())
  }
}

/// Writing never fails: `write` always consumes the whole buffer.
#[cfg(feature = "std")]
impl std::io::Write for Crc32Itu {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(self.append(buf))
  }

  #[inline]
  fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
    traits::Checksum::update(self, buf);
    Ok(())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;
