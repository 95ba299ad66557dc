//! I/O adapters that checksum bytes as they pass through.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap any [`std::io::Read`] /
//! [`std::io::Write`] and feed exactly the transferred bytes to a
//! [`Checksum`](crate::Checksum): short reads and partial writes only hash
//! what the inner stream actually moved. Errors from the inner stream are
//! returned unchanged.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.crc(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and checksums every byte read through it.
#[cfg(feature = "std")]
#[derive(Clone)]
pub struct ChecksumReader<R, C: crate::Checksum> {
  inner: R,
  hasher: C,
}

#[cfg(feature = "std")]
impl<R, C: crate::Checksum> ChecksumReader<R, C> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Create a new reader wrapper resuming from a known checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self { inner, hasher: C::with_initial(initial) }
  }

  /// Checksum of everything read so far. Further reads keep updating it.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap, returning the inner reader and discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, C: crate::Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and checksums every byte the inner writer accepts.
///
/// Only the prefix the inner writer reports as written is hashed, so a
/// partial write followed by a retry of the remainder hashes each byte once.
#[cfg(feature = "std")]
#[derive(Clone)]
pub struct ChecksumWriter<W, C: crate::Checksum> {
  inner: W,
  hasher: C,
}

#[cfg(feature = "std")]
impl<W, C: crate::Checksum> ChecksumWriter<W, C> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Create a new writer wrapper resuming from a known checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self { inner, hasher: C::with_initial(initial) }
  }

  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap, returning the inner writer and discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, C: crate::Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{
    io::{self, Read, Write},
    vec::Vec,
  };

  use super::{ChecksumReader, ChecksumWriter};
  use crate::Checksum;

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

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  struct Broken;

  impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::other("broken"))
    }
  }

  #[test]
  fn partial_writes_hash_each_byte_once() {
    let mut w = ChecksumWriter::<_, Sum>::new(Trickle { out: Vec::new(), limit: 3 });
    w.write_all(b"abcdefgh").unwrap();
    let (inner, crc) = w.into_parts();
    assert_eq!(inner.out, b"abcdefgh");
    assert_eq!(crc, Sum::checksum(b"abcdefgh"));
  }

  #[test]
  fn reader_hashes_transferred_bytes() {
    let mut r = ChecksumReader::<_, Sum>::new(&b"hello"[..]);
    let mut buf = [0u8; 2];
    assert_eq!(r.read(&mut buf).unwrap(), 2);
    assert_eq!(r.crc(), Sum::checksum(b"he"));
  }

  #[test]
  fn reader_propagates_errors() {
    let mut r = ChecksumReader::<_, Sum>::new(Broken);
    let err = r.read(&mut [0u8; 4]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(r.crc(), 0);
  }

  #[test]
  fn accessors_expose_inner_and_hasher() {
    let mut r = ChecksumReader::<_, Sum>::new(&b"xy"[..]);
    assert_eq!(*r.inner(), &b"xy"[..]);
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf).unwrap();
    assert!(r.inner().is_empty());
    r.hasher_mut().reset();
    assert_eq!(r.crc(), 0);
    r.hasher_mut().update(b"z");
    assert_eq!(r.crc(), Sum::checksum(b"z"));

    let mut w = ChecksumWriter::<_, Sum>::new(Vec::new());
    w.write_all(b"ab").unwrap();
    assert_eq!(w.inner().as_slice(), b"ab");
    w.hasher_mut().update(b"c");
    assert_eq!(w.crc(), Sum::checksum(b"abc"));
    // Bytes fed to the hasher directly never reach the inner writer.
    assert_eq!(w.into_inner(), b"ab");
  }

  #[test]
  fn with_initial_resumes() {
    let r = ChecksumReader::<_, Sum>::with_initial(io::empty(), 41);
    assert_eq!(r.crc(), 41);
  }
}
