//! Per-output-mask sorting of deviation rows.

use crate::deviation::{cell_index, DeviationMatrix, MASKS};

/// [`DeviationMatrix`] with every output-mask row sorted ascending.
///
/// After sorting, column `255` of each row holds that row's maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedDeviationMatrix {
    data: Box<[f64]>,
}

impl SortedDeviationMatrix {
    /// Largest deviation for `out_mask` (last element of its sorted row).
    #[inline]
    pub fn row_max(&self, out_mask: u8) -> f64 {
        self.get(out_mask, 255)
    }

    /// Value at `rank` (0 = smallest) in the sorted row of `out_mask`.
    #[inline]
    pub fn get(&self, out_mask: u8, rank: u8) -> f64 {
        self.data[cell_index(out_mask as usize, rank as usize)]
    }

    /// Sorted row for `out_mask`.
    pub fn row(&self, out_mask: u8) -> &[f64] {
        let start = cell_index(out_mask as usize, 0);
        &self.data[start..start + MASKS]
    }

    /// Maximum over output masks `1..=255`; the overall non-randomness measure.
    pub fn max_deviation(&self) -> f64 {
        (1..=255u8).map(|mask| self.row_max(mask)).fold(0.0, f64::max)
    }
}

impl From<DeviationMatrix> for SortedDeviationMatrix {
    fn from(matrix: DeviationMatrix) -> Self {
        let mut data = matrix.into_rows();
        for row in data.chunks_exact_mut(MASKS).skip(1) {
            row.sort_unstable_by(f64::total_cmp);
        }
        Self { data }
    }
}
