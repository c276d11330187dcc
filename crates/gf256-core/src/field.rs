//! Polynomial arithmetic over GF(2) for degree-8 extension fields.

use core::fmt;

use crate::error::PolynomialError;

/// Degree-8 reduction polynomial stored as a 9-bit value (bit 8 is `x^8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReductionPolynomial(u16);

impl ReductionPolynomial {
    /// The AES polynomial `x^8 + x^4 + x^3 + x + 1`.
    pub const AES: Self = Self(0x11b);

    /// Creates a polynomial, requiring degree exactly 8.
    pub fn new(bits: u16) -> Result<Self, PolynomialError> {
        if (0x100..=0x1ff).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(PolynomialError::Degree(bits))
        }
    }

    /// Keeps the low nine bits without any further check.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & 0x1ff)
    }

    /// Raw 9-bit representation.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Reduced field product `a * b mod self`.
    #[inline]
    pub fn mul(self, a: u8, b: u8) -> u8 {
        reduce(carryless_mul(a, b), self)
    }

    /// Returns true if `product` reduces to the multiplicative identity.
    #[inline]
    pub fn is_unit(self, product: u16) -> bool {
        reduce(product, self) == 1
    }
}

impl fmt::Display for ReductionPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for ReductionPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Carryless product of two bytes as a polynomial of degree at most 14.
#[inline]
pub fn carryless_mul(a: u8, b: u8) -> u16 {
    let a = u16::from(a);
    let mut product = 0u16;
    for bit in 0..8 {
        if (b >> bit) & 1 != 0 {
            product ^= a << bit;
        }
    }
    product
}

/// Reduces `product` modulo `poly` by shift-and-XOR long division.
///
/// The polynomial's `x^8` term is aligned with each set bit from bit 15 down
/// to bit 8. A polynomial with bit 8 clear does not cancel the aligned bit;
/// the caller is expected to pass a degree-8 polynomial.
pub fn reduce(mut product: u16, poly: ReductionPolynomial) -> u8 {
    let poly = u32::from(poly.bits());
    for bit in (8..16).rev() {
        if (product >> bit) & 1 != 0 {
            product ^= (poly << (bit - 8)) as u16;
        }
    }
    product as u8
}
