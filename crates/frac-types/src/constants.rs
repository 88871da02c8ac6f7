// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Default Mittag-Leffler truncation depth.
/// Empirically stable for alpha in (1, 2] and |z| up to ~(omega*t)^4
/// with t <= 8; callers with larger |z| must raise it themselves.
pub const DEFAULT_N_TERMS: usize = 80;

/// Damping factor epsilon of the fallback oscillatory integral.
/// Empirical value; the integral is not absolutely convergent without
/// it. Retuning changes every fallback output — see frac-math docs.
pub const FALLBACK_DAMPING: f64 = 1e-3;

/// Upper bound K of the fallback oscillatory integral.
/// Empirical value, paired with FALLBACK_DAMPING above.
pub const FALLBACK_UPPER_BOUND: f64 = 1000.0;

/// Initial fixed panels for the oscillatory quadrature. Panel width
/// must stay below the shortest oscillation period of the integrand.
pub const QUAD_PANELS: usize = 256;

/// Per-panel absolute tolerance for adaptive Simpson refinement.
pub const QUAD_TOL: f64 = 1e-9;

/// Bounded subdivision depth per quadrature panel.
pub const QUAD_MAX_DEPTH: usize = 12;

/// Half-width T of the truncated Mellin-Barnes contour s = c + it,
/// t in [-T, T]. Gamma products decay like exp(-pi*|t|/2) per factor,
/// so T = 40 is far past double-precision relevance.
pub const CONTOUR_HALF_WIDTH: f64 = 40.0;

/// Trapezoid samples along the truncated contour (odd count).
pub const CONTOUR_SAMPLES: usize = 2001;

/// Distance from a non-positive integer below which a gamma argument
/// is treated as an exact pole.
pub const POLE_EPS: f64 = 1e-12;
