/// The artificial viscosity closure stabilizing shocks.
///
/// Each variant produces a per-cell pressure-like correction `omega` from the
/// velocity jump over the cell. `omega` is added to the pressure in the
/// momentum and energy updates, spreading discontinuities over a few cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViscosityKind {
    None,
    /// Quadratic, von Neumann-like, acting in compression and expansion.
    Neumann,
    /// Quadratic, active only under compression.
    Latter,
    Linear,
    /// Linear term minus quadratic term.
    Sum,
}

/// Per-cell artificial viscosity from the adjacent face velocities.
///
/// `v_left` and `v_right` are the velocities of the faces bounding the cell,
/// `m` its (Lagrangian) mass. Pure function of its inputs.
pub fn omega(
    kind: ViscosityKind,
    mu0: f64,
    rho: f64,
    m: f64,
    v_left: f64,
    v_right: f64,
) -> f64 {
    let vdiff = v_right - v_left;
    let sqr_vdiff = vdiff * vdiff;
    match kind {
        ViscosityKind::None => 0.,
        ViscosityKind::Neumann => {
            let omega = -mu0 * rho * sqr_vdiff;
            if vdiff >= 0. {
                omega
            } else {
                -omega
            }
        }
        ViscosityKind::Latter => {
            if vdiff < 0. {
                mu0 * rho * sqr_vdiff
            } else {
                0.
            }
        }
        ViscosityKind::Linear => mu0 * rho * vdiff * m,
        ViscosityKind::Sum => {
            let omega = mu0 * rho * (vdiff * m - sqr_vdiff);
            if vdiff >= 0. {
                omega
            } else {
                -omega
            }
        }
    }
}
