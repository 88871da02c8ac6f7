// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adaptive Simpson quadrature over a fixed finite domain.
//!
//! The domain is first cut into a fixed number of equal panels so that
//! oscillatory integrands are sampled below their shortest period,
//! then each panel is refined recursively with a bounded subdivision
//! depth. Fixed panels + bounded depth guarantee termination and make
//! repeated evaluation exactly deterministic.

use frac_types::config::QuadratureConfig;

/// Integrate `f` over [a, b].
///
/// Panel decomposition per the config, adaptive Simpson inside each
/// panel. `a > b` integrates with the usual sign flip.
pub fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, cfg: &QuadratureConfig) -> f64 {
    if a == b {
        return 0.0;
    }
    if a > b {
        return -integrate(f, b, a, cfg);
    }

    let panels = cfg.panels.max(1);
    let width = (b - a) / panels as f64;
    let mut total = 0.0;
    for i in 0..panels {
        let lo = a + i as f64 * width;
        let hi = lo + width;
        let flo = f(lo);
        let fhi = f(hi);
        let mid = 0.5 * (lo + hi);
        let fmid = f(mid);
        let whole = simpson(lo, hi, flo, fmid, fhi);
        total += adapt(&f, lo, hi, flo, fmid, fhi, whole, cfg.tol, cfg.max_depth);
    }
    total
}

#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn adapt<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: usize,
) -> f64 {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    if depth == 0 || delta.abs() <= 15.0 * tol {
        // Richardson extrapolation term for the accepted estimate.
        left + right + delta / 15.0
    } else {
        adapt(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)
            + adapt(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)
    }
}
