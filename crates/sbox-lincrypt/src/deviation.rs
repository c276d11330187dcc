//! Parity deviation table for every (output mask, input mask) pair.

use gf256_core::SBox;

pub(crate) const MASKS: usize = 256;
const CELLS: usize = MASKS * MASKS;

/// Deviation from 50% of masked output parity, per output and input mask.
///
/// Row `0` (output mask zero) is never computed and stays at `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviationMatrix {
    data: Box<[f64]>,
}

impl DeviationMatrix {
    /// Computes the full table for `sbox`.
    ///
    /// For input mask `j != 0` only inputs `k` with odd `parity(j & k)` are
    /// sampled; `j == 0` samples all 256 inputs. Among the sampled inputs the
    /// deviation is `0.5 - min(odd, even) / sampled`, where odd/even refer to
    /// `parity(S[k] & i)`.
    pub fn analyze(sbox: &SBox) -> Self {
        let mut data = vec![0.0f64; CELLS].into_boxed_slice();
        for out_mask in 1..MASKS {
            for in_mask in 0..MASKS {
                data[cell_index(out_mask, in_mask)] =
                    cell_deviation(sbox, out_mask as u8, in_mask as u8);
            }
        }
        tracing::debug!("linear deviation table computed");
        Self { data }
    }

    /// Deviation for output mask `out_mask` and input mask `in_mask`.
    #[inline]
    pub fn get(&self, out_mask: u8, in_mask: u8) -> f64 {
        self.data[cell_index(out_mask as usize, in_mask as usize)]
    }

    /// All 256 input-mask deviations for one output mask.
    pub fn row(&self, out_mask: u8) -> &[f64] {
        let start = cell_index(out_mask as usize, 0);
        &self.data[start..start + MASKS]
    }

    /// Largest deviation over output masks `1..=255`.
    pub fn max_deviation(&self) -> f64 {
        self.data[MASKS..].iter().copied().fold(0.0, f64::max)
    }

    pub(crate) fn into_rows(self) -> Box<[f64]> {
        self.data
    }
}

fn cell_deviation(sbox: &SBox, out_mask: u8, in_mask: u8) -> f64 {
    let mut odd = 0u32;
    let mut even = 0u32;
    for k in 0..=255u8 {
        if in_mask != 0 && parity(in_mask & k) == 0 {
            continue;
        }
        if parity(sbox.apply(k) & out_mask) == 1 {
            odd += 1;
        } else {
            even += 1;
        }
    }
    let sampled = f64::from(odd + even);
    0.5 - f64::from(odd.min(even)) / sampled
}

#[inline]
fn parity(value: u8) -> u32 {
    value.count_ones() & 1
}

#[inline]
pub(crate) const fn cell_index(out_mask: usize, in_mask: usize) -> usize {
    (out_mask << 8) | in_mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf256_core::ReductionPolynomial;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use sbox_gen::{derive, DeriveConfig};

    #[test]
    fn identity_sbox_is_fully_biased_on_the_diagonal() {
        let table = DeviationMatrix::analyze(&SBox::identity());
        assert_eq!(table.get(1, 1), 0.5);
        for out_mask in 1..=255u8 {
            for in_mask in 0..=255u8 {
                let expected = if out_mask == in_mask { 0.5 } else { 0.0 };
                assert_eq!(table.get(out_mask, in_mask), expected, "({out_mask}, {in_mask})");
            }
        }
    }

    #[test]
    fn aes_sbox_peaks_at_one_sixteenth() {
        let sbox = derive(ReductionPolynomial::AES, &DeriveConfig::default()).table;
        let table = DeviationMatrix::analyze(&sbox);
        assert_eq!(table.max_deviation(), 0.0625);
        for out_mask in 1..=255u8 {
            // a permutation is balanced for every output mask
            assert_eq!(table.get(out_mask, 0), 0.0);
        }
    }

    #[test]
    fn deviations_stay_in_range() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let mut bytes: Vec<u8> = (0..=255).collect();
        bytes.shuffle(&mut rng);
        let mut table = [0u8; 256];
        table.copy_from_slice(&bytes);
        let matrix = DeviationMatrix::analyze(&SBox::new(table));
        for out_mask in 1..=255u8 {
            for &value in matrix.row(out_mask) {
                assert!((0.0..=0.5).contains(&value));
            }
        }
        assert!(matrix.row(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn constant_sbox_uses_the_sampled_population() {
        // S[k] = 1: parity(S[k] & 1) is always odd regardless of how many inputs are sampled.
        let matrix = DeviationMatrix::analyze(&SBox::new([1u8; 256]));
        assert_eq!(matrix.get(1, 0), 0.5);
        assert_eq!(matrix.get(1, 0x80), 0.5);
        assert_eq!(matrix.get(2, 0x80), 0.5);
    }
}
