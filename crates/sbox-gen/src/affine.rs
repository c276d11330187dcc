//! Affine maps over GF(2)^8 and the AES output transform.

use gf256_core::{InverseTable, SBox};

use crate::matrix::Matrix8;

/// 8-bit affine map `x -> lin * x ⊕ bias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine8 {
    /// Linear component.
    pub lin: Matrix8,
    /// Additive bias.
    pub bias: u8,
}

impl Affine8 {
    /// Constructs a new affine map from components.
    pub const fn new(lin: Matrix8, bias: u8) -> Self {
        Self { lin, bias }
    }

    /// Identity affine map.
    pub fn identity() -> Self {
        Self::new(Matrix8::identity(), 0)
    }

    /// The AES affine transform: circulant of `0xf1`, constant `0x63`.
    pub fn aes() -> Self {
        Self::new(Matrix8::circulant(0xf1), 0x63)
    }

    /// Applies the affine map.
    pub fn apply(&self, value: u8) -> u8 {
        self.lin.apply(value) ^ self.bias
    }

    /// Returns the inverse map, if the linear part is invertible.
    pub fn invert(&self) -> Option<Self> {
        let lin_inv = self.lin.invert()?;
        let bias = lin_inv.apply(self.bias);
        Some(Self::new(lin_inv, bias))
    }
}

/// Maps every inverse-table entry through `affine`.
pub fn affine_transform(inverses: &InverseTable, affine: &Affine8) -> SBox {
    let table = inverses.as_bytes();
    SBox::new(core::array::from_fn(|x| affine.apply(table[x])))
}
