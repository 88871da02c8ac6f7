//! Special-function primitives for SCPN Fractional Core.

pub mod fox_h;
pub mod gamma;
pub mod mittag_leffler;
pub mod quadrature;
