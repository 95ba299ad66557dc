//! Error types for checksum verification.
//!
//! Computing a checksum cannot fail. The only error in this workspace is the
//! outcome of comparing a computed value against a stored one.

use core::fmt;

/// A stored checksum did not match the value computed over the data.
///
/// # Examples
///
/// ```
/// use traits::ChecksumMismatch;
///
/// fn verify(computed: u32, stored: u32) -> Result<(), ChecksumMismatch> {
///   if computed == stored {
///     Ok(())
///   } else {
///     Err(ChecksumMismatch::new(stored, computed))
///   }
/// }
///
/// let err = verify(0x1234_5678, 0xDEAD_BEEF).unwrap_err();
/// assert_eq!(err.expected(), 0xDEAD_BEEF);
/// assert_eq!(err.actual(), 0x1234_5678);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ChecksumMismatch {
  expected: u32,
  actual: u32,
}

impl ChecksumMismatch {
  /// Create a new mismatch error.
  #[inline]
  #[must_use]
  pub const fn new(expected: u32, actual: u32) -> Self {
    Self { expected, actual }
  }

  /// The value the caller expected (stored alongside the data).
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> u32 {
    self.expected
  }

  /// The value computed over the data.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> u32 {
    self.actual
  }
}

impl fmt::Display for ChecksumMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "checksum mismatch: expected {:#010x}, computed {:#010x}", self.expected, self.actual)
  }
}

impl core::error::Error for ChecksumMismatch {}
