// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Mittag-Leffler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-parameter Mittag-Leffler function E_{alpha,beta}(z).
//!
//! Truncated power series sum_{k=0}^{n_terms-1} z^k / Gamma(alpha*k + beta),
//! accumulated elementwise in complex arithmetic over the whole input
//! array, with a single real-part projection at the return boundary.
//!
//! Truncation is fixed, not adaptive: the depth is a documented
//! approximation chosen for the alpha, beta, |z| ranges in use.

use frac_types::error::{FracError, FracResult};
use ndarray::Array1;
use num_complex::Complex64;

use crate::gamma::gamma;

/// Evaluate E_{alpha,beta}(z) elementwise over `z`.
///
/// The output always has the shape of `z`. A gamma pole at term k
/// stops the summation for the whole array: once the denominator
/// evaluator is undefined, continuing the series is unsafe. A gamma
/// overflow also stops it, since every later denominator overflows
/// too and contributes exactly zero.
///
/// Complexity O(n_terms * len(z)).
pub fn mittag_leffler(
    alpha: f64,
    beta: f64,
    z: &Array1<Complex64>,
    n_terms: usize,
) -> FracResult<Array1<f64>> {
    if !(alpha > 0.0) || !alpha.is_finite() {
        return Err(FracError::ConfigError(format!(
            "Mittag-Leffler series requires alpha > 0, got {alpha}"
        )));
    }
    if !beta.is_finite() {
        return Err(FracError::ConfigError(format!(
            "Mittag-Leffler series requires finite beta, got {beta}"
        )));
    }
    if n_terms == 0 {
        return Err(FracError::ConfigError(
            "Mittag-Leffler series requires n_terms >= 1".to_string(),
        ));
    }

    let mut acc = Array1::<Complex64>::zeros(z.len());
    // Running powers z^k, updated in place each term.
    let mut zk = Array1::<Complex64>::from_elem(z.len(), Complex64::new(1.0, 0.0));

    for k in 0..n_terms {
        let denom = match gamma(alpha * k as f64 + beta) {
            Ok(g) => g,
            Err(FracError::GammaPole { .. }) => break,
            Err(e) => return Err(e),
        };
        if !denom.is_finite() {
            break;
        }
        let recip = denom.recip();
        for ((a, p), &zi) in acc.iter_mut().zip(zk.iter_mut()).zip(z.iter()) {
            *a += *p * recip;
            *p *= zi;
        }
    }

    Ok(acc.mapv(|c| c.re))
}
