// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FracError {
    /// Gamma function evaluated at a non-positive integer. Recoverable:
    /// series evaluators truncate at the offending term.
    #[error("Gamma pole at non-positive integer argument x={x}")]
    GammaPole { x: f64 },

    /// Primary evaluation path failed (non-convergent contour, invalid
    /// branch). Recoverable: the Fox-H evaluator switches to its
    /// fallback integral.
    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    /// Caller-side precondition violation. Fatal, never clamped.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FracResult<T> = Result<T, FracError>;
