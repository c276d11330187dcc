//! S-box construction.
//!
//! Builds an S-box from a degree-8 reduction polynomial by taking
//! multiplicative inverses in GF(2⁸) and passing them through a GF(2) affine
//! map (the AES map by default). Also generates uniformly random S-boxes for
//! comparison in linear analysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod affine;
mod generator;
mod matrix;

pub use affine::{affine_transform, Affine8};
pub use generator::{
    derive, derive_inverse_sbox, Derivation, DeriveConfig, DeriveOutput, Generator,
};
pub use matrix::Matrix8;
