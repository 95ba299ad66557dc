//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: Incremental updates for data arriving in chunks
//! - **Resumable**: A stored checksum value can seed a new hasher
//! - **Parallelism**: Combine operation for independently checksummed parts

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crc32itu::{Checksum, Crc32Itu};
///
/// // One-shot
/// let crc = Crc32Itu::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc32Itu::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must not mutate state (calling it repeatedly returns the same value)
/// - `reset()` must restore the hasher to its initial state
/// - `with_initial(c)` followed by `update(d)` must equal a hasher that saw the
///   bytes behind `c` and then `d`
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher in the initial (empty input) state.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously finalized checksum.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed since construction or the last reset.
  ///
  /// Does not consume or modify the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum of everything read through it.
  ///
  /// ```rust,ignore
  /// let mut reader = Crc32Itu::reader(std::fs::File::open("frame.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum of everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums that support combining independently computed parts.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time, so chunks can be checksummed on separate threads and merged.
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// The identity above holds directly when the initial value equals the final XOR,
/// as it does for complemented CRCs.
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Wrapping byte sum: trivial but enough to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }
    fn finalize(&self) -> u32 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum::checksum_vectored(&[b"ab", b"", b"c"]), Sum::checksum(b"abc"));
  }

  #[test]
  fn finalize_is_repeatable() {
    let mut h = Sum::new();
    h.update(b"xyz");
    assert_eq!(h.finalize(), h.finalize());
  }

  #[test]
  fn with_initial_resumes() {
    let mut h = Sum::with_initial(Sum::checksum(b"ab"));
    h.update(b"c");
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }
}
