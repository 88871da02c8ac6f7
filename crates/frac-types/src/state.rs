// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// 1D computational grid with precomputed coordinates.
///
/// Used for time grids (oscillator) and spatial grids (Green-function
/// sweep). Output curves always share the shape of the grid that
/// produced them.
#[derive(Debug, Clone)]
pub struct Grid1D {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    /// Coordinates [n] - linspace(min, max, n).
    pub points: Array1<f64>,
    /// Spacing.
    pub dx: f64,
}

impl Grid1D {
    pub fn new(n: usize, min: f64, max: f64) -> Self {
        let points = Array1::linspace(min, max, n);
        let dx = if n > 1 {
            points[1] - points[0]
        } else {
            max - min
        };
        Grid1D {
            n,
            min,
            max,
            points,
            dx,
        }
    }
}
