/// Boundary policy at one end of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Rigid wall: the ghost face velocity is the negated interior one, so the
    /// extrapolated velocity at the wall itself vanishes.
    NoSlip,
    /// Zero-gradient outflow.
    FreeFlux,
}

/// One end of the domain: boundary policy plus the prescribed wall state used
/// by the Godunov end-face fluxes.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub kind: WallKind,
    pub velocity: f64,
    pub pressure: f64,
}

impl Wall {
    /// Ghost face velocity from the neighbouring interior face.
    pub fn ghost_velocity(&self, interior: f64) -> f64 {
        match self.kind {
            WallKind::NoSlip => -interior,
            WallKind::FreeFlux => interior,
        }
    }
}
