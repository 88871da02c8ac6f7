// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Gamma
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gamma function over real and complex arguments.
//!
//! Lanczos approximation (g = 7, n = 9, Godfrey coefficients) with the
//! reflection formula for the left half-plane. Matches
//! `scipy.special.gamma` to ~13 significant digits over the ranges the
//! series evaluators use.
//!
//! Poles (non-positive integer arguments) are reported as
//! `FracError::GammaPole`, never as a silently wrong finite value.
//! Overflow for large positive arguments saturates to `+inf`, so
//! reciprocal series terms vanish instead of going NaN.

use std::f64::consts::PI;

use frac_types::constants::POLE_EPS;
use frac_types::error::{FracError, FracResult};
use num_complex::Complex64;

/// Lanczos parameter g.
const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (g = 7, n = 9).
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Gamma function for real arguments.
///
/// Returns `GammaPole` for non-positive integers (within `POLE_EPS`).
/// Large arguments overflow to `+inf`.
pub fn gamma(x: f64) -> FracResult<f64> {
    if x <= 0.0 && (x - x.round()).abs() < POLE_EPS {
        return Err(FracError::GammaPole { x });
    }
    if x < 0.5 {
        // Reflection: Gamma(x) * Gamma(1-x) = pi / sin(pi*x)
        let s = (PI * x).sin();
        if s == 0.0 {
            return Err(FracError::GammaPole { x });
        }
        Ok(PI / (s * gamma_positive(1.0 - x)))
    } else {
        Ok(gamma_positive(x))
    }
}

/// Lanczos evaluation for x >= 0.5, in log space so that overflow
/// yields a clean +inf rather than inf*0 = NaN.
fn gamma_positive(x: f64) -> f64 {
    let z = x - 1.0;
    let mut a = LANCZOS_COEFFS[0];
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        a += c / (z + (i + 1) as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    let log_gamma = 0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + a.ln();
    log_gamma.exp()
}

/// Gamma function for complex arguments, same Lanczos path.
///
/// Used by the Mellin-Barnes contour, where arguments stay off the
/// real axis; poles therefore surface as non-finite values the caller
/// checks, not as errors.
pub fn gamma_complex(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // Reflection in the complex plane.
        let s = (z * PI).sin();
        Complex64::new(PI, 0.0) / (s * gamma_complex_positive(Complex64::new(1.0, 0.0) - z))
    } else {
        gamma_complex_positive(z)
    }
}

fn gamma_complex_positive(z: Complex64) -> Complex64 {
    let zm = z - Complex64::new(1.0, 0.0);
    let mut a = Complex64::new(LANCZOS_COEFFS[0], 0.0);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        a += Complex64::new(c, 0.0) / (zm + Complex64::new((i + 1) as f64, 0.0));
    }
    let t = zm + Complex64::new(LANCZOS_G + 0.5, 0.0);
    (2.0 * PI).sqrt() * t.powc(zm + Complex64::new(0.5, 0.0)) * (-t).exp() * a
}
