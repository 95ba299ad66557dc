//! CRC-32/ITU constants.
//!
//! Polynomial: 0x04C11DB7 (normal, MSB-first)
//! Used by: ATM AAL5 (ITU-T I.363.5), bzip2

use crate::common::tables::{generate_table, generate_tables_8};

/// Generator polynomial (normal form).
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Checksum of the empty input.
pub const INITIAL: u32 = 0;

/// Check value: the checksum of ASCII `"123456789"`.
pub const CHECK: u32 = 0xFC89_1918;

/// Checksum of any frame that carries its own checksum as a big-endian trailer.
///
/// `checksum(data ++ checksum(data).to_be_bytes()) == RESIDUE` for every `data`.
pub const RESIDUE: u32 = 0x38FB_2284;

/// Single-byte lookup table (MSB-first).
///
/// Computed at compile time; lives for the process lifetime and is shared
/// read-only by every computation. Total size: 256 * 4 = 1 KiB.
pub static TABLE: [u32; 256] = generate_table(POLYNOMIAL);

/// Slice-by-8 lookup tables (MSB-first). `TABLES_8[0]` equals [`TABLE`].
///
/// Total size: 8 * 256 * 4 = 8 KiB.
pub(crate) static TABLES_8: [[u32; 256]; 8] = generate_tables_8(POLYNOMIAL);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_polynomial() {
    assert_eq!(POLYNOMIAL, 0x04C1_1DB7);
  }

  #[test]
  fn static_tables_agree() {
    assert_eq!(TABLES_8[0], TABLE);
    assert_eq!(TABLE, generate_table(POLYNOMIAL));
  }
}
