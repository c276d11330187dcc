//! 8-bit substitution tables and their tab-separated text form.

use core::fmt;
use std::io::{BufRead, Write};

use crate::error::SBoxFormatError;

/// Number of entries in an 8-bit S-box.
pub const SBOX_LEN: usize = 256;

const VALUES_PER_LINE: usize = 16;

/// Byte substitution table: `table[x]` is the image of `x`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SBox([u8; SBOX_LEN]);

impl SBox {
    /// Wraps a raw table.
    pub const fn new(table: [u8; SBOX_LEN]) -> Self {
        Self(table)
    }

    /// The identity map `x -> x`.
    pub fn identity() -> Self {
        Self(core::array::from_fn(|x| x as u8))
    }

    /// Image of `x`.
    #[inline]
    pub fn apply(&self, x: u8) -> u8 {
        self.0[x as usize]
    }

    /// Underlying table.
    pub fn as_bytes(&self) -> &[u8; SBOX_LEN] {
        &self.0
    }

    /// True if every byte appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; SBOX_LEN];
        for &y in self.0.iter() {
            if seen[y as usize] {
                return false;
            }
            seen[y as usize] = true;
        }
        true
    }

    /// Inverse table, if the S-box is a permutation.
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_permutation() {
            return None;
        }
        let mut inv = [0u8; SBOX_LEN];
        for (x, &y) in self.0.iter().enumerate() {
            inv[y as usize] = x as u8;
        }
        Some(Self(inv))
    }

    /// Writes the table as decimal values, each followed by a tab, 16 per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for line in self.0.chunks(VALUES_PER_LINE) {
            for value in line {
                write!(out, "{value}\t")?;
            }
            writeln!(out)?;
        }
        out.flush()
    }

    /// Reads exactly 256 whitespace-separated decimal values.
    pub fn read_from<R: BufRead>(input: R) -> Result<Self, SBoxFormatError> {
        let mut table = [0u8; SBOX_LEN];
        let mut count = 0usize;
        for line in input.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                if count == SBOX_LEN {
                    return Err(SBoxFormatError::TrailingData);
                }
                let value: u64 = token.parse().map_err(|_| SBoxFormatError::InvalidToken {
                    index: count,
                    token: token.to_owned(),
                })?;
                table[count] = u8::try_from(value).map_err(|_| SBoxFormatError::OutOfRange {
                    index: count,
                    value,
                })?;
                count += 1;
            }
        }
        if count < SBOX_LEN {
            return Err(SBoxFormatError::Incomplete { found: count });
        }
        Ok(Self(table))
    }

    /// Console rendering: a 16×16 hex grid with row and column headers.
    pub fn hex_grid(&self) -> HexGrid<'_> {
        HexGrid(self)
    }
}

impl fmt::Debug for SBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SBox").field(&&self.0[..]).finish()
    }
}

/// [`fmt::Display`] adapter returned by [`SBox::hex_grid`].
pub struct HexGrid<'a>(&'a SBox);

impl fmt::Display for HexGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..VALUES_PER_LINE {
            write!(f, "\t{col:02x}")?;
        }
        writeln!(f)?;
        writeln!(f, "    {}", "-".repeat(127))?;
        for (row, line) in self.0 .0.chunks(VALUES_PER_LINE).enumerate() {
            write!(f, "{:02x}  |\t", row * VALUES_PER_LINE)?;
            for value in line {
                write!(f, "{value:02x}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
