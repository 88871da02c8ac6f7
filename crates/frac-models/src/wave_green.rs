// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Fractional-Wave Green Function
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Green's function K_{nu,2}(x) of the fractional wave equation.
//!
//! Each fractional order nu produces one fixed H^{1,2}_{3,3} parameter
//! set evaluated at z = 1/x across a spatial grid; a sweep over nu
//! yields a family of curves. Purely a batched mapping over (nu, x)
//! pairs, no state machine.

use frac_math::fox_h::{FoxHEvaluator, HFunctionSpec, HParameter};
use frac_types::error::{FracError, FracResult};
use ndarray::Array1;
use num_complex::Complex64;

/// The fixed m=1, n=2 parameter set of the fractional-wave Green
/// function: three rows per line, weights derived from 1/nu, 2/nu and
/// 1/2, all coefficients zero.
pub fn green_function_spec(nu: f64) -> FracResult<HFunctionSpec> {
    if !(nu > 0.0) || !nu.is_finite() {
        return Err(FracError::ConfigError(format!(
            "Green function requires nu > 0, got {nu}"
        )));
    }
    let upper = vec![
        HParameter::real(0.0, 1.0 / nu),
        HParameter::real(0.0, 1.0),
        HParameter::real(0.0, 0.5),
    ];
    let lower = vec![
        HParameter::real(0.0, 1.0 / nu),
        HParameter::real(0.0, 2.0 / nu),
        HParameter::real(0.0, 0.5),
    ];
    HFunctionSpec::new(1, 2, upper, lower)
}

/// One Green-function curve for a fixed fractional order.
#[derive(Debug, Clone)]
pub struct WaveGreenFunction {
    nu: f64,
    spec: HFunctionSpec,
    evaluator: FoxHEvaluator,
}

impl WaveGreenFunction {
    pub fn new(nu: f64) -> FracResult<Self> {
        Self::with_evaluator(nu, FoxHEvaluator::default())
    }

    pub fn with_evaluator(nu: f64, evaluator: FoxHEvaluator) -> FracResult<Self> {
        Ok(WaveGreenFunction {
            nu,
            spec: green_function_spec(nu)?,
            evaluator,
        })
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// K_{nu,2}(x) over a strictly positive grid, evaluated at
    /// z = 1/x per sample. Output shape equals the input shape.
    pub fn curve(&self, x: &Array1<f64>) -> FracResult<Array1<f64>> {
        if x.iter().any(|&xi| xi <= 0.0 || !xi.is_finite()) {
            return Err(FracError::ConfigError(
                "Green function grid must be finite and strictly positive".to_string(),
            ));
        }
        Ok(x.mapv(|xi| {
            self.evaluator
                .evaluate(&self.spec, Complex64::new(1.0 / xi, 0.0), self.nu, xi)
        }))
    }
}

/// A family of Green-function curves over a set of fractional orders.
#[derive(Debug, Clone)]
pub struct GreenFunctionSweep {
    nu_values: Vec<f64>,
    evaluator: FoxHEvaluator,
}

impl GreenFunctionSweep {
    pub fn new(nu_values: Vec<f64>) -> FracResult<Self> {
        Self::with_evaluator(nu_values, FoxHEvaluator::default())
    }

    pub fn with_evaluator(nu_values: Vec<f64>, evaluator: FoxHEvaluator) -> FracResult<Self> {
        if nu_values.is_empty() {
            return Err(FracError::ConfigError(
                "Green-function sweep requires at least one nu".to_string(),
            ));
        }
        for &nu in &nu_values {
            // Fail construction early on any invalid order.
            green_function_spec(nu)?;
        }
        Ok(GreenFunctionSweep {
            nu_values,
            evaluator,
        })
    }

    pub fn nu_values(&self) -> &[f64] {
        &self.nu_values
    }

    /// One (nu, curve) pair per order, each curve sharing the shape of
    /// `x`. Independent evaluations, run sequentially.
    pub fn curves(&self, x: &Array1<f64>) -> FracResult<Vec<(f64, Array1<f64>)>> {
        self.nu_values
            .iter()
            .map(|&nu| {
                let green = WaveGreenFunction::with_evaluator(nu, self.evaluator.clone())?;
                Ok((nu, green.curve(x)?))
            })
            .collect()
    }
}
