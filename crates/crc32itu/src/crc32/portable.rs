//! Polynomial-specific wrappers around the MSB-first kernels in
//! `common::portable`.
//!
//! Every kernel here has the dispatcher signature `fn(u32, &[u8]) -> u32` and
//! works on the complemented register.

use crate::{
  common::{portable, reference},
  constants::{POLYNOMIAL, TABLE, TABLES_8},
};

/// CRC-32/ITU byte-at-a-time (Sarwate) computation.
///
/// Fastest for tiny buffers because it touches a single 1 KiB table.
#[inline]
pub fn crc32_itu_bytewise(crc: u32, data: &[u8]) -> u32 {
  portable::bytewise_32_msb(crc, data, &TABLE)
}

/// CRC-32/ITU slice-by-8 computation.
#[inline]
pub fn crc32_itu_slice8(crc: u32, data: &[u8]) -> u32 {
  portable::slice8_32_msb(crc, data, &TABLES_8)
}

/// CRC-32/ITU bit-at-a-time computation. Only reachable through a forced config.
#[inline]
pub fn crc32_itu_reference(crc: u32, data: &[u8]) -> u32 {
  reference::crc32_msb_bitwise(POLYNOMIAL, crc, data)
}
