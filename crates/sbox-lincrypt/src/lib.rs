//! Linear cryptanalysis of 8-bit S-boxes.
//!
//! For every nonzero output mask and every input mask, measures how far the
//! parity of the masked S-box output departs from 50% over the inputs selected
//! by the input mask. Rows can be sorted per output mask and exported as text
//! or as a plain greymap.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod deviation;
mod export;
mod sorted;

pub use deviation::DeviationMatrix;
pub use export::{write_greymap, write_text};
pub use sorted::SortedDeviationMatrix;

use gf256_core::SBox;

/// Analyzes `sbox` and sorts each output-mask row.
pub fn analyze_sorted(sbox: &SBox) -> SortedDeviationMatrix {
    SortedDeviationMatrix::from(DeviationMatrix::analyze(sbox))
}
