// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants;

/// Top-level tuning knobs of the evaluation engine.
///
/// Every field has a default, so `{}` is a valid config file and
/// partial overrides are accepted. Evaluators copy the values they
/// need at construction and hold no other state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub series: SeriesConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub quadrature: QuadratureConfig,
    #[serde(default)]
    pub contour: ContourConfig,
}

/// Mittag-Leffler series truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Fixed truncation depth. No adaptive convergence check is done;
    /// pick this for the alpha, beta, |z| ranges in use.
    #[serde(default = "default_n_terms")]
    pub n_terms: usize,
}

/// Fallback oscillatory integral for the Fox H-function.
///
/// Both values are empirical and paired; retuning either changes the
/// fallback output and must be flagged as a behavior change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Damping factor epsilon in exp(-epsilon*k).
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Integration upper bound K.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
}

/// Adaptive Simpson quadrature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadratureConfig {
    /// Initial fixed panels before adaptive refinement.
    #[serde(default = "default_panels")]
    pub panels: usize,
    /// Per-panel absolute tolerance.
    #[serde(default = "default_tol")]
    pub tol: f64,
    /// Bounded subdivision depth per panel.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Truncated Mellin-Barnes contour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Half-width T of the vertical line segment.
    #[serde(default = "default_half_width")]
    pub half_width: f64,
    /// Trapezoid sample count along the segment.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_n_terms() -> usize {
    constants::DEFAULT_N_TERMS
}
fn default_damping() -> f64 {
    constants::FALLBACK_DAMPING
}
fn default_upper_bound() -> f64 {
    constants::FALLBACK_UPPER_BOUND
}
fn default_panels() -> usize {
    constants::QUAD_PANELS
}
fn default_tol() -> f64 {
    constants::QUAD_TOL
}
fn default_max_depth() -> usize {
    constants::QUAD_MAX_DEPTH
}
fn default_half_width() -> f64 {
    constants::CONTOUR_HALF_WIDTH
}
fn default_samples() -> usize {
    constants::CONTOUR_SAMPLES
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            n_terms: default_n_terms(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        FallbackConfig {
            damping: default_damping(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        QuadratureConfig {
            panels: default_panels(),
            tol: default_tol(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for ContourConfig {
    fn default() -> Self {
        ContourConfig {
            half_width: default_half_width(),
            samples: default_samples(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &str) -> crate::error::FracResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
