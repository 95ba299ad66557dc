//! Const-fn lookup table generation for MSB-first 32-bit CRCs.
//!
//! Tables are computed with `const fn` and embedded directly in the binary,
//! so they exist before any code runs and are never rebuilt.
//!
//! # Table Strategies
//!
//! | Strategy | Bytes/iter | Size |
//! |----------|------------|------|
//! | byte-at-a-time (Sarwate) | 1 | 1×256×u32 (1 KiB) |
//! | slice-by-8 | 8 | 8×256×u32 (8 KiB) |
//!
//! In MSB-first order the byte being absorbed lines up with the top byte of the
//! register, so every entry is seeded with `index << 24` and the register
//! shifts left.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Generate a single lookup table entry.
///
/// The result is `index * x^32 mod P(x)`: the byte placed in the top 8 bits
/// of a zeroed register, divided bit by bit, most significant bit first.
#[must_use]
pub const fn table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = (index as u32) << 24;
  let mut i = 0;
  while i < 8 {
    if crc & 0x8000_0000 != 0 {
      crc = (crc << 1) ^ poly;
    } else {
      crc <<= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry byte-at-a-time table.
#[must_use]
pub const fn generate_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Generate 8 lookup tables for slice-by-8 computation.
///
/// `tables[k][i]` is the contribution of byte `i` followed by `k` zero bytes:
///
/// ```text
/// T[k][i] = (T[k-1][i] << 8) ^ T[0][T[k-1][i] >> 24]
/// ```
#[must_use]
pub const fn generate_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];
  tables[0] = generate_table(poly);

  let mut k = 1usize;
  while k < 8 {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev << 8) ^ tables[0][(prev >> 24) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}
