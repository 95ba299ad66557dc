//! Static kernel names for CRC-32/ITU.
//!
//! Keeping every kernel name in one place lets introspection and dispatch share
//! identifiers.
//!
//! # Kernel Tiers
//!
//! - Tier 0 (Reference): Bitwise implementation
//! - Tier 1 (Portable): Sarwate byte-at-a-time, slice-by-8

/// Bitwise reference kernel name.
pub const REFERENCE: &str = "reference/bitwise";
/// Byte-at-a-time kernel name.
pub const PORTABLE_BYTEWISE: &str = "portable/bytewise";
/// Slice-by-8 kernel name.
pub const PORTABLE_SLICE8: &str = "portable/slice8";
/// Auto-selection kernel name (bytewise vs slice-by-8 by length).
pub const PORTABLE_AUTO: &str = "portable/auto";

/// Name of the kernel the auto selector runs for a buffer of `len` bytes.
#[inline]
#[must_use]
pub const fn portable_name_for_len(len: usize, bytewise_to_slice8: usize) -> &'static str {
  if len < bytewise_to_slice8 { PORTABLE_BYTEWISE } else { PORTABLE_SLICE8 }
}
