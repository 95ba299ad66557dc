//! GF(2) matrix operations for CRC combination.
//!
//! Given `crc(A)` and `crc(B)`, `crc(A || B)` can be computed without
//! reprocessing `A`, in O(log n) time using matrix exponentiation over GF(2).
//!
//! # Mathematical Background
//!
//! Appending `n` bytes multiplies the register by `x^(8n) mod G(x)`. That map
//! is linear, so it is a 32x32 GF(2) matrix `M^n` where `M` shifts by one byte.
//! With the initial value equal to the final XOR (both `0xFFFFFFFF` here) the
//! affine terms cancel and:
//!
//! ```text
//! crc(A || B) = M^len(B) * crc(A) XOR crc(B)
//! ```

// SAFETY: All array indexing in this module uses bounded loop indices (0..32).
// Clippy cannot prove this in const fn contexts, but the bounds are statically
// guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// A 32x32 GF(2) matrix represented as 32 u32 values.
///
/// Entry `i` is the image of the basis vector `1 << i` (column `i`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix32([u32; 32]);

impl Gf2Matrix32 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply matrix by a vector (u32 treated as column vector).
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u32) -> u32 {
    let mut result = 0u32;
    let mut i = 0;
    while i < 32 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix (self * self).
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Generate the "shift by 1 bit" matrix for an MSB-first CRC-32 polynomial.
///
/// For MSB-first, shifting by one bit moves bit `j` to bit `j + 1`; bit 31
/// falls off the top and XORs the polynomial into the register.
#[must_use]
pub const fn generate_shift1_matrix_32_msb(poly: u32) -> Gf2Matrix32 {
  let mut m = [0u32; 32];

  let mut j = 0;
  while j < 31 {
    m[j] = 1 << (j + 1);
    j += 1;
  }
  m[31] = poly;

  Gf2Matrix32(m)
}

/// Generate the "shift by 8 bits" matrix (one zero byte) for an MSB-first polynomial.
#[must_use]
pub const fn generate_shift8_matrix_32_msb(poly: u32) -> Gf2Matrix32 {
  let shift1 = generate_shift1_matrix_32_msb(poly);
  let shift2 = shift1.square();
  let shift4 = shift2.square();

  shift4.square()
}

/// Combine two finalized CRC-32 values whose initial value equals their final XOR.
///
/// # Arguments
///
/// * `crc_a` - CRC of the first part
/// * `crc_b` - CRC of the second part
/// * `len_b` - Length of the second part in bytes
/// * `shift8_matrix` - Pre-computed "shift by 8 bits" matrix for the polynomial
///
/// Uses square-and-multiply to compute `M^len_b` in O(log len_b) matrix products.
#[must_use]
pub const fn combine_crc32(crc_a: u32, crc_b: u32, len_b: usize, shift8_matrix: Gf2Matrix32) -> u32 {
  if len_b == 0 {
    return crc_a;
  }

  let mut mat = shift8_matrix;
  let mut result_mat = Gf2Matrix32::identity();
  let mut remaining = len_b;

  while remaining > 0 {
    if remaining & 1 != 0 {
      result_mat = result_mat.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result_mat.mul_vec(crc_a) ^ crc_b
}
