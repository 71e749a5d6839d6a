// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — Objective Function
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Zeroth-order net energy output: reaction gain n·T·E against the
//! confinement loss n·T/τ.

use fusion_lab_types::error::{SimError, SimResult};
use fusion_lab_types::state::ParameterPoint;

/// Energy-balance terms at a single operating point.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBalance {
    pub reactivity: f64,
    pub reaction_rate: f64,
    pub energy_loss: f64,
    pub net_output: f64,
}

/// Net energy output at (n, T, E, τ).
///
/// reactivity = n·T, reaction rate = reactivity·E,
/// loss = reactivity/τ, output = rate − loss.
///
/// τ = 0 is rejected since the loss term divides by τ.
pub fn evaluate(density: f64, temperature: f64, energy: f64, confinement: f64) -> SimResult<f64> {
    net_energy_output(&ParameterPoint::new(
        density,
        temperature,
        energy,
        confinement,
    ))
}

/// Net energy output of a parameter point record.
pub fn net_energy_output(point: &ParameterPoint) -> SimResult<f64> {
    Ok(energy_balance(point)?.net_output)
}

/// Full term-by-term balance at a parameter point.
pub fn energy_balance(point: &ParameterPoint) -> SimResult<EnergyBalance> {
    if point.confinement == 0.0 {
        return Err(SimError::InvalidConfinementTime);
    }

    let reactivity = point.density * point.temperature;
    let reaction_rate = reactivity * point.energy;
    let energy_loss = reactivity / point.confinement;

    Ok(EnergyBalance {
        reactivity,
        reaction_rate,
        energy_loss,
        net_output: reaction_rate - energy_loss,
    })
}
