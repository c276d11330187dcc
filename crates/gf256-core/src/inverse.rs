//! Brute-force multiplicative inverse search.

use crate::field::{carryless_mul, ReductionPolynomial};

/// Multiplicative inverses of every byte under a reduction polynomial.
///
/// Entries whose inverse could not be found hold `0`. That only happens when
/// the polynomial is reducible; see [`InverseTable::unresolved`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InverseTable {
    poly: ReductionPolynomial,
    entries: [u8; 256],
    resolved: [bool; 256],
}

impl InverseTable {
    /// Builds the table for `poly`.
    pub fn build(poly: ReductionPolynomial) -> Self {
        let mut entries = [0u8; 256];
        let mut resolved = [false; 256];
        entries[1] = 1;
        resolved[1] = true;

        for i in 2..=255u8 {
            if resolved[i as usize] {
                continue;
            }
            match find_partner(poly, i) {
                Some(j) => {
                    entries[i as usize] = j;
                    entries[j as usize] = i;
                    resolved[i as usize] = true;
                    resolved[j as usize] = true;
                }
                None => entries[i as usize] = 0,
            }
        }

        let table = Self {
            poly,
            entries,
            resolved,
        };
        let missing = table.unresolved();
        if missing != 0 {
            tracing::debug!(poly = %poly, missing, "bytes left without an inverse");
        }
        table
    }

    /// Polynomial the table was built for.
    pub fn polynomial(&self) -> ReductionPolynomial {
        self.poly
    }

    /// Inverse of `value` (0 for 0 and for unresolved bytes).
    #[inline]
    pub fn get(&self, value: u8) -> u8 {
        self.entries[value as usize]
    }

    /// Whether an inverse was found for `value`.
    #[inline]
    pub fn is_resolved(&self, value: u8) -> bool {
        self.resolved[value as usize]
    }

    /// Number of nonzero bytes left without an inverse.
    pub fn unresolved(&self) -> usize {
        self.resolved[1..].iter().filter(|&&found| !found).count()
    }

    /// True when every nonzero byte has an inverse.
    pub fn is_complete(&self) -> bool {
        self.unresolved() == 0
    }

    /// The raw table, indexed by byte.
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.entries
    }
}

/// Scans `i..=255` for the first `j` with `i * j == 1`.
///
/// Smaller partners are not revisited: if `j < i` were an inverse of `i`, the
/// pair was already recorded while processing `j`.
pub(crate) fn find_partner(poly: ReductionPolynomial, i: u8) -> Option<u8> {
    (i..=255).find(|&j| poly.is_unit(carryless_mul(i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::reduce;

    #[test]
    fn aes_fixed_points_and_known_inverse() {
        let table = InverseTable::build(ReductionPolynomial::AES);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(1), 1);
        assert_eq!(table.get(0x53), 0xca);
        assert_eq!(table.get(0xca), 0x53);
        assert!(table.is_complete());
        assert!(!table.is_resolved(0));
        assert_eq!(table.polynomial(), ReductionPolynomial::AES);
    }

    #[test]
    fn aes_table_is_an_involution() {
        let table = InverseTable::build(ReductionPolynomial::AES);
        for x in 1..=255u8 {
            assert_eq!(table.get(table.get(x)), x, "x = {x:#x}");
        }
    }

    #[test]
    fn product_with_inverse_reduces_to_one() {
        for bits in [0x11b, 0x11d, 0x1f5] {
            let poly = ReductionPolynomial::new(bits).expect("degree 8");
            let table = InverseTable::build(poly);
            for a in 1..=255u8 {
                assert_eq!(reduce(carryless_mul(a, table.get(a)), poly), 1);
            }
        }
    }

    #[test]
    fn aes_table_is_bijective_on_nonzero_bytes() {
        let table = InverseTable::build(ReductionPolynomial::AES);
        let mut seen = [false; 256];
        for x in 1..=255u8 {
            let inv = table.get(x);
            assert_ne!(inv, 0);
            assert!(!seen[inv as usize]);
            seen[inv as usize] = true;
        }
    }

    #[test]
    fn reducible_polynomial_reports_unresolved_bytes() {
        // x^8 + 1 = (x + 1)^8
        let table = InverseTable::build(ReductionPolynomial::from_bits_truncate(0x101));
        assert!(table.unresolved() > 0);
        assert!(!table.is_complete());
        assert!(!table.is_resolved(0x03));
        assert_eq!(table.get(0x03), 0);
    }
}
