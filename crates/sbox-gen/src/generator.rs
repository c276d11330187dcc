//! S-box derivation from a reduction polynomial, and random S-boxes.

use gf256_core::{InverseTable, ReductionPolynomial, SBox, SBOX_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::affine::{affine_transform, Affine8};

/// Which table the derivation produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeriveOutput {
    /// Inverse table passed through the affine transform.
    #[default]
    SBox,
    /// Raw multiplicative inverses, no affine step.
    Inverse,
}

/// Configuration for [`derive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeriveConfig {
    /// Table to produce.
    pub output: DeriveOutput,
    /// Affine transform applied in [`DeriveOutput::SBox`] mode.
    pub affine: Affine8,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            output: DeriveOutput::SBox,
            affine: Affine8::aes(),
        }
    }
}

/// Result of a derivation: the selected table and the inverses it came from.
#[derive(Clone, Debug)]
pub struct Derivation {
    /// Inverse table for the polynomial.
    pub inverses: InverseTable,
    /// The table selected by [`DeriveConfig::output`].
    pub table: SBox,
}

impl Derivation {
    /// Nonzero bytes without an inverse; nonzero means the polynomial is reducible
    /// and `table` is degenerate.
    pub fn unresolved(&self) -> usize {
        self.inverses.unresolved()
    }
}

/// Derives an S-box (or the raw inverse table) for `poly`.
pub fn derive(poly: ReductionPolynomial, config: &DeriveConfig) -> Derivation {
    let inverses = InverseTable::build(poly);
    let table = match config.output {
        DeriveOutput::SBox => affine_transform(&inverses, &config.affine),
        DeriveOutput::Inverse => SBox::new(*inverses.as_bytes()),
    };
    tracing::debug!(
        poly = %poly,
        output = ?config.output,
        unresolved = inverses.unresolved(),
        "derived table"
    );
    Derivation { inverses, table }
}

/// Inverse of the S-box derived with `config`, computed as `inv(affine⁻¹(y))`.
///
/// Returns `None` if the affine part is singular or the polynomial is reducible.
pub fn derive_inverse_sbox(poly: ReductionPolynomial, config: &DeriveConfig) -> Option<SBox> {
    let inverses = InverseTable::build(poly);
    if !inverses.is_complete() {
        return None;
    }
    let undo = match config.output {
        DeriveOutput::SBox => config.affine.invert()?,
        DeriveOutput::Inverse => Affine8::identity(),
    };
    Some(SBox::new(core::array::from_fn(|y| {
        inverses.get(undo.apply(y as u8))
    })))
}

/// Random S-box generator parametrized by an RNG.
pub struct Generator<R: Rng> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Creates a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a uniformly random permutation of `0..=255`.
    pub fn random_sbox(&mut self) -> SBox {
        let mut table: [u8; SBOX_LEN] = core::array::from_fn(|x| x as u8);
        table.shuffle(&mut self.rng);
        SBox::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn aes_sbox_matches_fips_197() {
        let derivation = derive(ReductionPolynomial::AES, &DeriveConfig::default());
        let sbox = derivation.table;
        assert_eq!(derivation.unresolved(), 0);
        assert_eq!(sbox.apply(0x00), 0x63);
        assert_eq!(sbox.apply(0x01), 0x7c);
        assert_eq!(sbox.apply(0x53), 0xed);
        assert_eq!(sbox.apply(0xff), 0x16);
        assert_eq!(
            &sbox.as_bytes()[..16],
            &[
                0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe,
                0xd7, 0xab, 0x76
            ]
        );
        assert!(sbox.is_permutation());
    }

    #[test]
    fn inverse_mode_skips_affine_step() {
        let config = DeriveConfig {
            output: DeriveOutput::Inverse,
            ..DeriveConfig::default()
        };
        let derivation = derive(ReductionPolynomial::AES, &config);
        assert_eq!(derivation.table.as_bytes(), derivation.inverses.as_bytes());
        assert_eq!(derivation.table.apply(0x53), 0xca);
    }

    #[test]
    fn inverse_sbox_undoes_sbox() {
        let config = DeriveConfig::default();
        for bits in [0x11b, 0x11d, 0x1f9] {
            let poly = ReductionPolynomial::new(bits).expect("degree 8");
            let sbox = derive(poly, &config).table;
            let inv = derive_inverse_sbox(poly, &config).expect("irreducible");
            assert_eq!(Some(inv), sbox.inverse());
        }
        let aes_inv = derive_inverse_sbox(ReductionPolynomial::AES, &config).expect("aes");
        assert_eq!(aes_inv.apply(0x63), 0x00);
        assert_eq!(aes_inv.apply(0x00), 0x52);
    }

    #[test]
    fn reducible_polynomial_gives_degenerate_table() {
        let poly = ReductionPolynomial::from_bits_truncate(0x101);
        let derivation = derive(poly, &DeriveConfig::default());
        assert!(derivation.unresolved() > 0);
        assert!(!derivation.table.is_permutation());
        assert!(derive_inverse_sbox(poly, &DeriveConfig::default()).is_none());
    }

    #[test]
    fn random_sboxes_are_seeded_permutations() {
        let mut a = Generator::new(ChaCha20Rng::from_seed([7u8; 32]));
        let mut b = Generator::new(ChaCha20Rng::from_seed([7u8; 32]));
        let first = a.random_sbox();
        assert!(first.is_permutation());
        assert_eq!(first, b.random_sbox());
        assert_ne!(first, a.random_sbox());
    }
}
