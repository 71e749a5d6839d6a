// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Lab — Grid Search Optimizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exhaustive maximization of net energy output over a four-axis scan
//! grid. No pruning and no early exit: every point in the Cartesian
//! product is evaluated.

use fusion_lab_types::error::{SimError, SimResult};
use fusion_lab_types::state::{ParameterGrid, ParameterPoint};

use crate::objective::net_energy_output;

/// Best point found by a grid scan.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub best: ParameterPoint,
    pub max_output: f64,
    /// Objective evaluations performed (the full grid cardinality).
    pub evaluations: usize,
}

/// Evaluate every grid point and return the maximum.
///
/// Iteration nests density → temperature → energy → confinement with a
/// strict comparison, so among equal maxima the first point in that
/// order wins. Non-finite outputs never become the running best; a grid
/// that produces no finite output at all is an error, as is any empty
/// axis. A confinement sample of exactly zero is rejected rather than
/// evaluated.
pub fn grid_search(grid: &ParameterGrid) -> SimResult<OptimizationResult> {
    if grid.density.is_empty() {
        return Err(SimError::EmptyRange("density"));
    }
    if grid.temperature.is_empty() {
        return Err(SimError::EmptyRange("temperature"));
    }
    if grid.energy.is_empty() {
        return Err(SimError::EmptyRange("energy"));
    }
    if grid.confinement.is_empty() {
        return Err(SimError::EmptyRange("confinement"));
    }

    let mut max_output = f64::NEG_INFINITY;
    let mut best: Option<ParameterPoint> = None;
    let mut evaluations = 0usize;

    for &density in grid.density.iter() {
        for &temperature in grid.temperature.iter() {
            for &energy in grid.energy.iter() {
                for &confinement in grid.confinement.iter() {
                    let point = ParameterPoint::new(density, temperature, energy, confinement);
                    let output = net_energy_output(&point)?;
                    evaluations += 1;

                    if !output.is_finite() {
                        continue;
                    }
                    if output > max_output {
                        max_output = output;
                        best = Some(point);
                    }
                }
            }
        }
    }

    match best {
        Some(best) => Ok(OptimizationResult {
            best,
            max_output,
            evaluations,
        }),
        None => Err(SimError::NoFiniteObjective),
    }
}
