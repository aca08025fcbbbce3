use crate::errors::SolverError;
use crate::snapshot::{SnapshotRow, SnapshotWriter};

mod godunov;
mod lagrange;

pub use godunov::GodunovScheme;
pub use lagrange::LagrangeScheme;

/// The finite set of scheme variants, dispatched once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    Lagrange,
    Godunov,
}

/// One per-iteration capability interface per scheme variant. The driver only
/// ever talks to this trait; the concrete state layout (staggered moving mesh
/// vs. fixed grid of conserved quantities) stays private to each variant.
pub trait Scheme {
    /// Populate the state arrays from the configured preset.
    fn set_initial_conditions(&mut self);

    /// Refresh the ghost cells (and, for the Godunov scheme, the end-face
    /// fluxes). Touches only the fictitious entries, never interior cells.
    fn apply_boundary_conditions(&mut self);

    /// CFL-limited stable step size, minimum over all interior cells.
    fn time_step(&self) -> Result<f64, SolverError>;

    /// Advance the state by `dt`. Returns an error on any numerical invariant
    /// violation (non-positive density or pressure, folded mesh).
    fn solve_step(&mut self, dt: f64) -> Result<(), SolverError>;

    /// Cell-centred view of the interior state for serialization.
    fn sample(&self) -> Vec<SnapshotRow>;

    fn write_snapshot(&self, writer: &SnapshotWriter, step: usize) -> Result<(), SolverError> {
        writer.write(step, &self.sample())
    }
}
