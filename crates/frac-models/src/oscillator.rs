// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Fractional Oscillator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fractional damped/undamped harmonic oscillator.
//!
//! Closed-form Green's-function solution of the fractional oscillator
//! ODE in terms of two Mittag-Leffler evaluations:
//!
//!   x(t) = x0 * E_{2a,1}(-(w*t)^{2a}) + y0 * t^a * E_{2a,a+1}(-(w*t)^{2a})
//!
//! For a -> 1 this recovers the classical x0*cos(wt) + y0*sin(wt)/w
//! behavior asymptotically. a in (1, 2] spans underdamped-to-standard
//! harmonic regimes.

use frac_math::mittag_leffler::mittag_leffler;
use frac_types::config::EngineConfig;
use frac_types::constants::DEFAULT_N_TERMS;
use frac_types::error::{FracError, FracResult};
use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Oscillator parameters: fractional order, natural frequency and the
/// two initial conditions. Stateless after construction; lifecycle is
/// create, evaluate over a time grid, discard.
#[derive(Debug, Clone, Copy)]
pub struct FractionalOscillator {
    pub alpha: f64,
    pub omega: f64,
    pub x0: f64,
    pub y0: f64,
    n_terms: usize,
}

impl FractionalOscillator {
    pub fn new(alpha: f64, omega: f64, x0: f64, y0: f64) -> FracResult<Self> {
        if !(alpha > 0.0) || !alpha.is_finite() {
            return Err(FracError::ConfigError(format!(
                "oscillator requires alpha > 0, got {alpha}"
            )));
        }
        if !(omega > 0.0) || !omega.is_finite() {
            return Err(FracError::ConfigError(format!(
                "oscillator requires omega > 0, got {omega}"
            )));
        }
        if !x0.is_finite() || !y0.is_finite() {
            return Err(FracError::ConfigError(
                "oscillator initial conditions must be finite".to_string(),
            ));
        }
        Ok(FractionalOscillator {
            alpha,
            omega,
            x0,
            y0,
            n_terms: DEFAULT_N_TERMS,
        })
    }

    /// Oscillator wired to an engine configuration: the series
    /// truncation depth is taken from `cfg.series.n_terms`.
    pub fn from_config(
        alpha: f64,
        omega: f64,
        x0: f64,
        y0: f64,
        cfg: &EngineConfig,
    ) -> FracResult<Self> {
        Ok(Self::new(alpha, omega, x0, y0)?.with_series_depth(cfg.series.n_terms))
    }

    /// Override the series truncation depth (default 80).
    pub fn with_series_depth(mut self, n_terms: usize) -> Self {
        self.n_terms = n_terms;
        self
    }

    /// Displacement x(t) over a non-negative time grid. Output shape
    /// equals the input shape.
    pub fn displacement(&self, t: &Array1<f64>) -> FracResult<Array1<f64>> {
        if t.iter().any(|&ti| ti < 0.0 || !ti.is_finite()) {
            return Err(FracError::ConfigError(
                "oscillator time grid must be finite and non-negative".to_string(),
            ));
        }

        let two_alpha = 2.0 * self.alpha;
        let z: Array1<Complex64> = t.mapv(|ti| {
            Complex64::new(-(self.omega * ti).powf(two_alpha), 0.0)
        });

        let mut x = Array1::<f64>::zeros(t.len());
        if self.x0 != 0.0 {
            let homogeneous = mittag_leffler(two_alpha, 1.0, &z, self.n_terms)?;
            for (xi, &ei) in x.iter_mut().zip(homogeneous.iter()) {
                *xi += self.x0 * ei;
            }
        }
        if self.y0 != 0.0 {
            let particular = mittag_leffler(two_alpha, self.alpha + 1.0, &z, self.n_terms)?;
            for ((xi, &ei), &ti) in x.iter_mut().zip(particular.iter()).zip(t.iter()) {
                *xi += self.y0 * ti.powf(self.alpha) * ei;
            }
        }
        Ok(x)
    }

    /// Displacement surface over an alpha sweep: one row per alpha,
    /// one column per time sample. Each row is an independent
    /// evaluation; the sweep runs sequentially.
    pub fn displacement_surface(
        t: &Array1<f64>,
        alphas: &Array1<f64>,
        omega: f64,
        x0: f64,
        y0: f64,
    ) -> FracResult<Array2<f64>> {
        let mut surface = Array2::<f64>::zeros((alphas.len(), t.len()));
        for (row, &alpha) in alphas.iter().enumerate() {
            let oscillator = FractionalOscillator::new(alpha, omega, x0, y0)?;
            let curve = oscillator.displacement(t)?;
            surface.row_mut(row).assign(&curve);
        }
        Ok(surface)
    }
}
