// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// D-T fusion energy release per reaction (MeV).
pub const E_FUSION_DT_MEV: f64 = 17.6;

/// Particle density display unit (m⁻³). The presentation layer works in
/// multiples of 10²⁰; values are scaled by this before entering the core.
pub const DENSITY_UNIT: f64 = 1.0e20;

/// Lower edge of the sweep multiplier domain.
pub const SWEEP_MULTIPLIER_MIN: f64 = 0.1;

/// Upper edge of the sweep multiplier domain.
pub const SWEEP_MULTIPLIER_MAX: f64 = 2.0;

/// Samples per sweep curve.
pub const SWEEP_SAMPLES: usize = 100;
