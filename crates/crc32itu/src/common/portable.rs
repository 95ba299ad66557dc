//! Portable table-driven kernels for MSB-first 32-bit CRCs.
//!
//! Both kernels operate on the raw (complemented) register and never apply
//! the initial or final XOR themselves.
//!
//! # Algorithm Overview
//!
//! Byte-at-a-time (Sarwate) consumes one byte per table lookup:
//!
//! ```text
//! crc = T[(crc >> 24) ^ b] ^ (crc << 8)
//! ```
//!
//! Slice-by-8 loads 8 bytes big-endian, folds the first 4 into the register,
//! and combines 8 independent lookups with XOR. The tail shorter than 8 bytes
//! goes through the byte-at-a-time loop.
//!
//! | Algorithm | Bytes/iter | Tables |
//! |-----------|------------|--------|
//! | Sarwate | 1 | 1×256×u32 |
//! | slice-by-8 | 8 | 8×256×u32 |

// SAFETY: All array indexing in this module uses bounded indices:
// - chunks_exact guarantees chunk sizes
// - Table indices are `>> 24` of a u32 or masked with `& 0xFF` (0..255)
#![allow(clippy::indexing_slicing)]

/// Update the register one byte at a time.
///
/// # Arguments
///
/// * `crc` - Current register state (already complemented)
/// * `data` - Input data
/// * `table` - Byte-at-a-time lookup table
#[inline]
pub(crate) fn bytewise_32_msb(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    let index = ((crc >> 24) ^ u32::from(byte)) as usize;
    crc = table[index] ^ (crc << 8);
  }
  crc
}

/// Update the register eight bytes at a time.
///
/// # Arguments
///
/// * `crc` - Current register state (already complemented)
/// * `data` - Input data
/// * `tables` - 8 lookup tables; `tables[0]` is the byte-at-a-time table
#[inline]
pub(crate) fn slice8_32_msb(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let mut chunks = data.chunks_exact(8);

  for chunk in chunks.by_ref() {
    let a = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a >> 24) as usize]
      ^ tables[6][((a >> 16) & 0xFF) as usize]
      ^ tables[5][((a >> 8) & 0xFF) as usize]
      ^ tables[4][(a & 0xFF) as usize]
      ^ tables[3][(b >> 24) as usize]
      ^ tables[2][((b >> 16) & 0xFF) as usize]
      ^ tables[1][((b >> 8) & 0xFF) as usize]
      ^ tables[0][(b & 0xFF) as usize];
  }

  bytewise_32_msb(crc, chunks.remainder(), &tables[0])
}
