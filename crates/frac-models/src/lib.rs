//! Fractional-dynamics models for SCPN Fractional Core.
//!
//! Oscillator and wave Green-function models that combine the
//! frac-math special-function primitives into time/space-domain
//! curves for the surrounding application layer.

pub mod oscillator;
pub mod wave_green;
