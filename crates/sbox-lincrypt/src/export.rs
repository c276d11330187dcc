//! Text and greymap renderings of a sorted deviation table.
//!
//! Both exports share one layout: a line per sorted rank from 255 down to 1,
//! and on each line one value per output mask from 1 to 255. Each column is
//! thus one output mask with its deviations falling from top to bottom. Rank 0
//! (the row minimum) is omitted.

use std::io::{self, Write};

use crate::sorted::SortedDeviationMatrix;

/// Plain PGM header; the declared maximum of 21 maps deviation 21/128 to white.
const GREYMAP_HEADER: &str = "P2\n255 256\n21\n";

/// Scale from deviation to greymap sample.
const GREYMAP_SCALE: f64 = 128.0;

/// Writes deviations as tab-terminated decimal values.
pub fn write_text<W: Write>(sorted: &SortedDeviationMatrix, mut out: W) -> io::Result<()> {
    write_cells(sorted, &mut out, |out, value| write!(out, "{value}\t"))?;
    out.flush()
}

/// Writes a plain (`P2`) greymap with samples `floor(deviation * 128)`.
pub fn write_greymap<W: Write>(sorted: &SortedDeviationMatrix, mut out: W) -> io::Result<()> {
    out.write_all(GREYMAP_HEADER.as_bytes())?;
    write_cells(sorted, &mut out, |out, value| {
        write!(out, "{}\t", (value * GREYMAP_SCALE).floor() as i64)
    })?;
    out.flush()
}

fn write_cells<W, F>(sorted: &SortedDeviationMatrix, out: &mut W, mut cell: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, f64) -> io::Result<()>,
{
    for rank in (1..=255u8).rev() {
        for out_mask in 1..=255u8 {
            cell(&mut *out, sorted.get(out_mask, rank))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
