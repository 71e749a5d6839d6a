// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A single point in the four-parameter operating space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterPoint {
    /// Particle density n [m⁻³].
    pub density: f64,
    /// Plasma temperature T [keV].
    pub temperature: f64,
    /// Energy release per reaction E [MeV].
    pub energy: f64,
    /// Energy confinement time τ [s].
    pub confinement: f64,
}

impl ParameterPoint {
    pub fn new(density: f64, temperature: f64, energy: f64, confinement: f64) -> Self {
        ParameterPoint {
            density,
            temperature,
            energy,
            confinement,
        }
    }
}

/// Discretized scan ranges for the optimizer, one ordered axis per
/// parameter. Axes need not share a length or a uniform spacing.
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    pub density: Array1<f64>,     // n samples [m⁻³]
    pub temperature: Array1<f64>, // T samples [keV]
    pub energy: Array1<f64>,      // E samples [MeV]
    pub confinement: Array1<f64>, // τ samples [s]
}

impl ParameterGrid {
    pub fn new(
        density: Array1<f64>,
        temperature: Array1<f64>,
        energy: Array1<f64>,
        confinement: Array1<f64>,
    ) -> Self {
        ParameterGrid {
            density,
            temperature,
            energy,
            confinement,
        }
    }

    /// Linear subdivision of [min, max] bounds, `steps` samples per axis.
    pub fn linspace(
        density: (f64, f64),
        temperature: (f64, f64),
        energy: (f64, f64),
        confinement: (f64, f64),
        steps: usize,
    ) -> Self {
        ParameterGrid {
            density: Array1::linspace(density.0, density.1, steps),
            temperature: Array1::linspace(temperature.0, temperature.1, steps),
            energy: Array1::linspace(energy.0, energy.1, steps),
            confinement: Array1::linspace(confinement.0, confinement.1, steps),
        }
    }

    /// Number of points in the Cartesian product of the four axes.
    pub fn total_points(&self) -> usize {
        self.density.len() * self.temperature.len() * self.energy.len() * self.confinement.len()
    }
}
