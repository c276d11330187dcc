//! 8×8 binary matrices over GF(2).

/// 8×8 binary matrix over GF(2), stored row-major with each row packed into a `u8`.
///
/// Bit `c` of row `r` is the coefficient at column `c`; applying the matrix to
/// a byte treats bit `c` of the byte as the `c`-th vector component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix8 {
    rows: [u8; 8],
}

impl Matrix8 {
    /// Returns the zero matrix.
    pub fn zero() -> Self {
        Self { rows: [0u8; 8] }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self {
            rows: core::array::from_fn(|i| 1u8 << i),
        }
    }

    /// Circulant matrix whose row `r` is `pattern` rotated left by `r`.
    pub fn circulant(pattern: u8) -> Self {
        Self {
            rows: core::array::from_fn(|r| pattern.rotate_left(r as u32)),
        }
    }

    /// Applies the matrix to an 8-bit value; output bit `r` is the parity of `row[r] & value`.
    pub fn apply(&self, value: u8) -> u8 {
        let mut out = 0u8;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let parity = (row & value).count_ones() as u8 & 1;
            out |= parity << row_idx;
        }
        out
    }

    /// Multiplies two matrices (`self * rhs`).
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for (row_idx, row_bits) in self.rows.iter().enumerate() {
            let mut acc = 0u8;
            let mut bits = *row_bits;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                acc ^= rhs.rows[bit];
                bits &= bits - 1;
            }
            result.rows[row_idx] = acc;
        }
        result
    }

    /// Attempts to invert the matrix via Gaussian elimination.
    pub fn invert(&self) -> Option<Self> {
        let mut left = self.rows;
        let mut right = Self::identity().rows;

        for col in 0..8 {
            let pivot = (col..8).find(|&row| (left[row] >> col) & 1 == 1)?;
            if pivot != col {
                left.swap(pivot, col);
                right.swap(pivot, col);
            }
            for row in 0..8 {
                if row != col && ((left[row] >> col) & 1 == 1) {
                    left[row] ^= left[col];
                    right[row] ^= right[col];
                }
            }
        }

        Some(Self { rows: right })
    }

    /// Exposes the underlying rows.
    pub fn rows(&self) -> &[u8; 8] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circulant_rows_rotate() {
        let m = Matrix8::circulant(0xf1);
        assert_eq!(m.rows()[0], 0xf1);
        assert_eq!(m.rows()[1], 0xe3);
        assert_eq!(m.rows()[7], 0xf8);
    }

    #[test]
    fn identity_applies_as_identity() {
        let id = Matrix8::identity();
        for x in 0..=255u8 {
            assert_eq!(id.apply(x), x);
        }
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Matrix8::circulant(0xf1);
        let inv = m.invert().expect("invertible");
        assert_eq!(m.mul(&inv), Matrix8::identity());
        assert_eq!(inv.mul(&m), Matrix8::identity());
        for x in 0..=255u8 {
            assert_eq!(inv.apply(m.apply(x)), x);
        }
    }

    #[test]
    fn mul_matches_composed_application() {
        let a = Matrix8::circulant(0xf1);
        let b = Matrix8::circulant(0x1f);
        let ab = a.mul(&b);
        for x in 0..=255u8 {
            assert_eq!(ab.apply(x), a.apply(b.apply(x)));
        }
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Matrix8::zero().invert().is_none());
        assert!(Matrix8::circulant(0xff).invert().is_none());
    }
}
