// ─────────────────────────────────────────────────────────────────────
// SCPN Fractional Core — Property-Based Tests (proptest) for frac-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for frac-types using proptest.
//!
//! Covers: Grid1D construction invariants, EngineConfig serialization
//! roundtrip.

use frac_types::config::EngineConfig;
use frac_types::state::Grid1D;
use proptest::prelude::*;

// ── Grid1D Construction Invariants ───────────────────────────────────

proptest! {
    /// Grid length matches the constructor argument.
    #[test]
    fn grid_length_matches(n in 2usize..512) {
        let grid = Grid1D::new(n, 0.0, 8.0);
        prop_assert_eq!(grid.n, n);
        prop_assert_eq!(grid.points.len(), n);
    }

    /// Endpoints are exact and interior points are monotone.
    #[test]
    fn grid_endpoints_and_monotonicity(
        n in 2usize..256,
        min in -10.0f64..5.0,
        span in 0.1f64..20.0,
    ) {
        let max = min + span;
        let grid = Grid1D::new(n, min, max);

        prop_assert!((grid.points[0] - min).abs() < 1e-12);
        prop_assert!((grid.points[n - 1] - max).abs() < 1e-9);
        for w in grid.points.windows(2) {
            prop_assert!(w[1] > w[0], "grid not strictly increasing");
        }
    }

    /// Spacing is uniform across the grid.
    #[test]
    fn grid_spacing_uniform(n in 2usize..256, span in 0.5f64..50.0) {
        let grid = Grid1D::new(n, 0.0, span);
        let expected = span / (n - 1) as f64;
        prop_assert!((grid.dx - expected).abs() < 1e-12);
        for w in grid.points.windows(2) {
            prop_assert!(((w[1] - w[0]) - expected).abs() < 1e-9);
        }
    }
}

// ── Configuration Roundtrip ──────────────────────────────────────────

proptest! {
    /// Serialize-then-deserialize preserves every tunable bit-exactly.
    /// Requires serde_json's `float_roundtrip` feature; the default
    /// float parser is not 1-ulp exact.
    #[test]
    fn config_roundtrip(
        n_terms in 1usize..500,
        damping in 1e-6f64..1e-1,
        upper_bound in 10.0f64..5000.0,
        half_width in 5.0f64..100.0,
    ) {
        let mut cfg = EngineConfig::default();
        cfg.series.n_terms = n_terms;
        cfg.fallback.damping = damping;
        cfg.fallback.upper_bound = upper_bound;
        cfg.contour.half_width = half_width;

        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.series.n_terms, n_terms);
        prop_assert_eq!(back.fallback.damping, damping);
        prop_assert_eq!(back.fallback.upper_bound, upper_bound);
        prop_assert_eq!(back.contour.half_width, half_width);
    }
}
