//! Bitwise reference implementation.
//!
//! This is the "source of truth" for the CRC: it processes one bit at a time
//! and directly mirrors polynomial division, with no lookup tables. Every
//! table-driven kernel must produce identical results.
//!
//! # CRC Model
//!
//! In Rocksoft / CRC RevEng terms:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `width`   | 32 |
//! | `poly`    | 0x04C11DB7 |
//! | `init`    | 0xFFFFFFFF |
//! | `refin`   | false |
//! | `refout`  | false |
//! | `xorout`  | 0xFFFFFFFF |
//!
//! Intentionally slow (~8 operations per bit). Use for test oracles and
//! for auditing the table-driven paths.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation (non-reflected, MSB-first).
///
/// Operates on the raw register: the caller applies the initial and final
/// complement.
///
/// # Arguments
///
/// * `poly` - Normal polynomial (0x04C11DB7)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_msb_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Complete reference checksum: `!crc32_msb_bitwise(poly, !prior, data)`.
#[must_use]
pub const fn crc32_itu_reference(prior: u32, data: &[u8]) -> u32 {
  !crc32_msb_bitwise(crate::constants::POLYNOMIAL, !prior, data)
}
