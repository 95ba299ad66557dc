//! Streaming 32-bit hash capability set.
//!
//! [`Hash32`] is the interface generic hashing consumers program against: it
//! reports the digest and block sizes, accepts bytes of any length, and reads
//! the running value either as a `u32` or as big-endian bytes appended to a
//! caller-supplied prefix. None of these operations can fail.

use crate::Checksum;

/// A streaming hash producing a 32-bit value.
///
/// Blanket-friendly: every method has a default expressed in terms of
/// [`Checksum`], so implementors normally only write `impl Hash32 for T {}`.
///
/// # Example
///
/// ```rust,ignore
/// use crc32itu::{Crc32Itu, Hash32};
///
/// let mut h = crc32itu::new();
/// assert_eq!(h.append(b"123456789"), 9);
/// assert_eq!(h.sum32(), 0xFC89_1918);
/// assert_eq!(h.sum(b"crc:"), b"crc:\xFC\x89\x19\x18");
/// ```
pub trait Hash32: Checksum<Output = u32> {
  /// Preferred input granularity in bytes.
  const BLOCK_SIZE: usize = 1;

  /// Number of bytes produced by [`sum`](Self::sum).
  #[inline]
  #[must_use]
  fn size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Preferred input granularity in bytes. Any length is accepted regardless.
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Current value of the running hash. Has no side effects.
  #[inline]
  #[must_use]
  fn sum32(&self) -> u32 {
    self.finalize()
  }

  /// Current value as big-endian bytes.
  #[inline]
  #[must_use]
  fn sum_bytes(&self) -> [u8; 4] {
    self.sum32().to_be_bytes()
  }

  /// Consume `data` and return the number of bytes consumed, which is always `data.len()`.
  #[inline]
  fn append(&mut self, data: &[u8]) -> usize {
    self.update(data);
    data.len()
  }

  /// Return `prefix` followed by the big-endian bytes of [`sum32`](Self::sum32).
  ///
  /// Does not modify the running state; may be called repeatedly.
  #[cfg(feature = "alloc")]
  #[must_use]
  fn sum(&self, prefix: &[u8]) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec::Vec::with_capacity(prefix.len().saturating_add(Self::OUTPUT_SIZE));
    out.extend_from_slice(prefix);
    out.extend_from_slice(&self.sum_bytes());
    out
  }
}
