//! Net-energy-output objective, grid-search optimizer, and parametric
//! sweep generator for the fusion energy simulator.

pub mod objective;
pub mod optimizer;
pub mod sweep;
