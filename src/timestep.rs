use crate::errors::SolverError;
use crate::gas_law::GasLaw;

/// Stable time step candidate of a single cell: the time in which the fastest
/// local signal (sound plus advection) crosses a `CFL` fraction of the cell.
pub fn cell_time_step(cfl: f64, dx: f64, gas_law: &GasLaw, pressure: f64, density: f64, v: f64) -> f64 {
    let c = gas_law.sound_speed(pressure, density);
    cfl * dx / (c + v.abs())
}

/// Reduce per-cell candidates to the one global step size. Every cell's wave
/// speed constrains the whole mesh; the minimum wins.
///
/// A zero, negative or non-finite result means the state already degenerated
/// and is fatal.
pub fn min_time_step(candidates: impl Iterator<Item = f64>) -> Result<f64, SolverError> {
    let dt = candidates.fold(f64::INFINITY, f64::min);
    if dt > 0. && dt.is_finite() {
        Ok(dt)
    } else {
        Err(SolverError::InvalidTimestep(dt))
    }
}
