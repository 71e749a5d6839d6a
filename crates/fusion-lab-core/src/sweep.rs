// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — Parametric Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter-impact curves: scale one parameter through a multiplier
//! domain while the other three stay fixed, and record the net energy
//! output at each step.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

use fusion_lab_types::config::SweepConfig;
use fusion_lab_types::error::{SimError, SimResult};
use fusion_lab_types::state::ParameterPoint;

use crate::objective::net_energy_output;

/// The parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParameter {
    ParticleDensity,
    Temperature,
    EnergyRelease,
    ConfinementTime,
}

impl SweepParameter {
    /// Display name, as shown in the parameter selector.
    pub fn label(&self) -> &'static str {
        match self {
            SweepParameter::ParticleDensity => "Particle Density",
            SweepParameter::Temperature => "Temperature",
            SweepParameter::EnergyRelease => "Energy Release",
            SweepParameter::ConfinementTime => "Confinement Time",
        }
    }

    /// X-axis caption for impact plots.
    pub fn axis_label(&self) -> &'static str {
        match self {
            SweepParameter::ParticleDensity => "Particle Density Multiplier",
            SweepParameter::Temperature => "Temperature Multiplier",
            SweepParameter::EnergyRelease => "Energy Release Multiplier",
            SweepParameter::ConfinementTime => "Confinement Time Multiplier",
        }
    }

    /// `base` with the selected parameter scaled by `multiplier`.
    fn scaled(&self, base: &ParameterPoint, multiplier: f64) -> ParameterPoint {
        let mut point = *base;
        match self {
            SweepParameter::ParticleDensity => point.density *= multiplier,
            SweepParameter::Temperature => point.temperature *= multiplier,
            SweepParameter::EnergyRelease => point.energy *= multiplier,
            SweepParameter::ConfinementTime => point.confinement *= multiplier,
        }
        point
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SweepParameter {
    type Err = SimError;

    /// Parses exactly the four selector names; anything else is an
    /// error, never a fallback variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Particle Density" => Ok(SweepParameter::ParticleDensity),
            "Temperature" => Ok(SweepParameter::Temperature),
            "Energy Release" => Ok(SweepParameter::EnergyRelease),
            "Confinement Time" => Ok(SweepParameter::ConfinementTime),
            other => Err(SimError::UnknownParameter(other.to_string())),
        }
    }
}

/// One parameter's impact curve: net output against multiplier, in
/// ascending multiplier order.
#[derive(Debug, Clone)]
pub struct SweepSeries {
    pub parameter: SweepParameter,
    pub multipliers: Array1<f64>,
    pub outputs: Array1<f64>,
}

impl SweepSeries {
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// (multiplier, output) pairs in ascending multiplier order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.multipliers
            .iter()
            .copied()
            .zip(self.outputs.iter().copied())
    }
}

/// Sweep over the standard multiplier domain, [0.1, 2.0] in 100 steps.
pub fn sweep(parameter: SweepParameter, base: &ParameterPoint) -> SimResult<SweepSeries> {
    sweep_with(parameter, base, &SweepConfig::default())
}

/// Sweep over a configured multiplier domain. The series is fully
/// materialized on every call; nothing is cached between calls.
pub fn sweep_with(
    parameter: SweepParameter,
    base: &ParameterPoint,
    config: &SweepConfig,
) -> SimResult<SweepSeries> {
    config.validate()?;

    let multipliers = Array1::linspace(config.multiplier_min, config.multiplier_max, config.samples);
    let mut outputs = Array1::zeros(config.samples);
    for (i, &multiplier) in multipliers.iter().enumerate() {
        outputs[i] = net_energy_output(&parameter.scaled(base, multiplier))?;
    }

    Ok(SweepSeries {
        parameter,
        multipliers,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::evaluate;
    use fusion_lab_types::constants::SWEEP_SAMPLES;

    fn base_point() -> ParameterPoint {
        ParameterPoint::new(1.0e20, 15000.0, 17.6, 0.1)
    }

    #[test]
    fn test_standard_domain_shape() {
        let series = sweep(SweepParameter::Temperature, &base_point()).unwrap();
        assert_eq!(series.len(), SWEEP_SAMPLES);
        assert!((series.multipliers[0] - 0.1).abs() < 1e-12);
        assert!((series.multipliers[SWEEP_SAMPLES - 1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_multipliers_strictly_ascending() {
        let series = sweep(SweepParameter::ParticleDensity, &base_point()).unwrap();
        for i in 1..series.len() {
            assert!(
                series.multipliers[i] > series.multipliers[i - 1],
                "multipliers not ascending at {}: {} <= {}",
                i,
                series.multipliers[i],
                series.multipliers[i - 1]
            );
        }
    }

    #[test]
    fn test_each_axis_scales_its_own_parameter() {
        let base = base_point();
        for parameter in [
            SweepParameter::ParticleDensity,
            SweepParameter::Temperature,
            SweepParameter::EnergyRelease,
            SweepParameter::ConfinementTime,
        ] {
            let series = sweep(parameter, &base).unwrap();
            for (m, output) in series.iter() {
                let expected = match parameter {
                    SweepParameter::ParticleDensity => {
                        evaluate(m * base.density, base.temperature, base.energy, base.confinement)
                    }
                    SweepParameter::Temperature => {
                        evaluate(base.density, m * base.temperature, base.energy, base.confinement)
                    }
                    SweepParameter::EnergyRelease => {
                        evaluate(base.density, base.temperature, m * base.energy, base.confinement)
                    }
                    SweepParameter::ConfinementTime => {
                        evaluate(base.density, base.temperature, base.energy, m * base.confinement)
                    }
                }
                .unwrap();
                assert_eq!(output, expected, "{parameter} at multiplier {m}");
            }
        }
    }

    #[test]
    fn test_repeat_calls_bit_identical() {
        let a = sweep(SweepParameter::ConfinementTime, &base_point()).unwrap();
        let b = sweep(SweepParameter::ConfinementTime, &base_point()).unwrap();
        for i in 0..a.len() {
            assert_eq!(a.outputs[i].to_bits(), b.outputs[i].to_bits());
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(
            "Particle Density".parse::<SweepParameter>().unwrap(),
            SweepParameter::ParticleDensity
        );
        assert_eq!(
            "Confinement Time".parse::<SweepParameter>().unwrap(),
            SweepParameter::ConfinementTime
        );
        assert!(matches!(
            "Magnetic Field".parse::<SweepParameter>(),
            Err(SimError::UnknownParameter(_))
        ));
        assert!(matches!(
            "".parse::<SweepParameter>(),
            Err(SimError::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(SweepParameter::EnergyRelease.label(), "Energy Release");
        assert_eq!(
            SweepParameter::EnergyRelease.axis_label(),
            "Energy Release Multiplier"
        );
        assert_eq!(SweepParameter::Temperature.to_string(), "Temperature");
    }

    #[test]
    fn test_zero_base_confinement_rejected() {
        let base = ParameterPoint::new(1.0e20, 15000.0, 17.6, 0.0);
        // The multiplier never rescues a zero base value
        assert!(matches!(
            sweep(SweepParameter::ConfinementTime, &base),
            Err(SimError::InvalidConfinementTime)
        ));
        assert!(matches!(
            sweep(SweepParameter::Temperature, &base),
            Err(SimError::InvalidConfinementTime)
        ));
    }

    #[test]
    fn test_configured_domain() {
        let config = SweepConfig {
            multiplier_min: 0.5,
            multiplier_max: 1.5,
            samples: 11,
        };
        let series = sweep_with(SweepParameter::Temperature, &base_point(), &config).unwrap();
        assert_eq!(series.len(), 11);
        assert!((series.multipliers[0] - 0.5).abs() < 1e-12);
        assert!((series.multipliers[10] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_config_rejected() {
        let config = SweepConfig {
            multiplier_min: 0.0,
            multiplier_max: 2.0,
            samples: 100,
        };
        assert!(matches!(
            sweep_with(SweepParameter::Temperature, &base_point(), &config),
            Err(SimError::ConfigError(_))
        ));
    }
}
