//! Arithmetic in GF(2⁸) under an arbitrary degree-8 reduction polynomial.
//!
//! This crate provides:
//! - Carryless multiplication and shift-and-XOR modular reduction.
//! - Brute-force inverse tables and the irreducible polynomial scan.
//! - The [`SBox`] type shared across the workspace, with its text format.
//!
//! Nothing here is constant-time; it is an analysis tool, not a cipher.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod field;
mod inverse;
mod irreducible;
mod sbox;

pub use crate::error::{PolynomialError, SBoxFormatError};
pub use crate::field::{carryless_mul, reduce, ReductionPolynomial};
pub use crate::inverse::InverseTable;
pub use crate::irreducible::{irreducible_polynomials, is_irreducible};
pub use crate::sbox::{HexGrid, SBox, SBOX_LEN};
