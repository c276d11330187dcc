//! Exhaustive search for irreducible degree-8 polynomials.

use crate::field::ReductionPolynomial;
use crate::inverse::find_partner;

/// Returns true if every nonzero byte has an inverse modulo `poly`.
///
/// Runs the same pairwise search as [`crate::InverseTable::build`] but stops
/// at the first byte without a partner.
pub fn is_irreducible(poly: ReductionPolynomial) -> bool {
    let mut resolved = [false; 256];
    for i in 2..=255u8 {
        if resolved[i as usize] {
            continue;
        }
        match find_partner(poly, i) {
            Some(j) => {
                resolved[i as usize] = true;
                resolved[j as usize] = true;
            }
            None => return false,
        }
    }
    true
}

/// All irreducible polynomials among the odd candidates `0x101..=0x1ff`, ascending.
///
/// Even candidates are divisible by `x` and never qualify.
pub fn irreducible_polynomials() -> Vec<ReductionPolynomial> {
    let found: Vec<ReductionPolynomial> = (0x101u16..=0x1ff)
        .step_by(2)
        .map(ReductionPolynomial::from_bits_truncate)
        .filter(|&poly| {
            let ok = is_irreducible(poly);
            tracing::trace!(poly = %poly, irreducible = ok, "scanned candidate");
            ok
        })
        .collect();
    tracing::debug!(count = found.len(), "irreducible polynomial scan complete");
    found
}
