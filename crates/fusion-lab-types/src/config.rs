// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DENSITY_UNIT, E_FUSION_DT_MEV, SWEEP_MULTIPLIER_MAX, SWEEP_MULTIPLIER_MIN, SWEEP_SAMPLES,
};
use crate::error::{SimError, SimResult};
use crate::state::{ParameterGrid, ParameterPoint};

/// Top-level simulator configuration.
/// Maps 1:1 to the simulator_config.json schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub simulator_name: String,
    #[serde(default)]
    pub defaults: OperatingPoint,
    pub optimization: ScanConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Operating point in presentation units: density in multiples of
/// 10²⁰ m⁻³, temperature in keV, energy in MeV, confinement in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingPoint {
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_temperature_kev")]
    pub temperature_kev: f64,
    #[serde(default = "default_energy_mev")]
    pub energy_mev: f64,
    #[serde(default = "default_confinement_s")]
    pub confinement_s: f64,
}

fn default_density() -> f64 {
    1.0
}
fn default_temperature_kev() -> f64 {
    15000.0
}
fn default_energy_mev() -> f64 {
    E_FUSION_DT_MEV
}
fn default_confinement_s() -> f64 {
    0.1
}

impl Default for OperatingPoint {
    fn default() -> Self {
        OperatingPoint {
            density: default_density(),
            temperature_kev: default_temperature_kev(),
            energy_mev: default_energy_mev(),
            confinement_s: default_confinement_s(),
        }
    }
}

impl OperatingPoint {
    /// Core-unit parameter point, with density scaled to m⁻³.
    pub fn point(&self) -> ParameterPoint {
        ParameterPoint::new(
            self.density * DENSITY_UNIT,
            self.temperature_kev,
            self.energy_mev,
            self.confinement_s,
        )
    }
}

/// Grid-search bounds per parameter, as [min, max] pairs.
/// Density bounds are in multiples of 10²⁰ m⁻³.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub density_bounds: [f64; 2],
    pub temperature_bounds: [f64; 2],
    pub energy_bounds: [f64; 2],
    pub confinement_bounds: [f64; 2],
    #[serde(default = "default_steps_per_axis")]
    pub steps_per_axis: usize,
}

fn default_steps_per_axis() -> usize {
    10
}

impl ScanConfig {
    /// Discretize the bounds into a scan grid (density scaled to m⁻³).
    pub fn create_grid(&self) -> ParameterGrid {
        ParameterGrid::linspace(
            (
                self.density_bounds[0] * DENSITY_UNIT,
                self.density_bounds[1] * DENSITY_UNIT,
            ),
            (self.temperature_bounds[0], self.temperature_bounds[1]),
            (self.energy_bounds[0], self.energy_bounds[1]),
            (self.confinement_bounds[0], self.confinement_bounds[1]),
            self.steps_per_axis,
        )
    }
}

/// Multiplier domain for parameter-impact sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_multiplier_min")]
    pub multiplier_min: f64,
    #[serde(default = "default_multiplier_max")]
    pub multiplier_max: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_multiplier_min() -> f64 {
    SWEEP_MULTIPLIER_MIN
}
fn default_multiplier_max() -> f64 {
    SWEEP_MULTIPLIER_MAX
}
fn default_samples() -> usize {
    SWEEP_SAMPLES
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            multiplier_min: default_multiplier_min(),
            multiplier_max: default_multiplier_max(),
            samples: default_samples(),
        }
    }
}

impl SweepConfig {
    /// A sweep needs at least two samples and a strictly positive,
    /// strictly increasing multiplier interval.
    pub fn validate(&self) -> SimResult<()> {
        if self.samples < 2 {
            return Err(SimError::ConfigError(format!(
                "sweep requires at least 2 samples, got {}",
                self.samples
            )));
        }
        if self.multiplier_min <= 0.0 {
            return Err(SimError::ConfigError(format!(
                "sweep multiplier_min must be positive, got {}",
                self.multiplier_min
            )));
        }
        if self.multiplier_max <= self.multiplier_min {
            return Err(SimError::ConfigError(format!(
                "sweep multiplier bounds inverted: [{}, {}]",
                self.multiplier_min, self.multiplier_max
            )));
        }
        Ok(())
    }
}

impl SimulatorConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &str) -> SimResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        let bounds = [
            ("density", &self.optimization.density_bounds),
            ("temperature", &self.optimization.temperature_bounds),
            ("energy", &self.optimization.energy_bounds),
            ("confinement", &self.optimization.confinement_bounds),
        ];
        for (name, b) in bounds {
            if b[1] < b[0] {
                return Err(SimError::ConfigError(format!(
                    "{} bounds inverted: [{}, {}]",
                    name, b[0], b[1]
                )));
            }
        }
        if self.optimization.steps_per_axis == 0 {
            return Err(SimError::ConfigError(
                "steps_per_axis must be at least 1".to_string(),
            ));
        }
        if self.defaults.confinement_s == 0.0 {
            return Err(SimError::ConfigError(
                "default confinement time must be nonzero".to_string(),
            ));
        }
        self.sweep.validate()
    }
}
