/// Ideal gas law closing the Euler equations.
///
/// The inverse of `gamma - 1` shows up in every energy/pressure conversion,
/// so it is precomputed once at construction.
#[derive(Debug, Clone, Copy)]
pub struct GasLaw {
    gamma: f64,
    odgm1: f64,
}

impl From<f64> for GasLaw {
    fn from(gamma: f64) -> Self {
        GasLaw {
            gamma,
            odgm1: 1. / (gamma - 1.),
        }
    }
}

impl GasLaw {
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// `P = rho (gamma - 1) U`
    pub fn pressure_from_internal_energy(&self, internal_energy: f64, density: f64) -> f64 {
        (self.gamma - 1.) * internal_energy * density
    }

    /// Specific internal energy: `U = P / ((gamma - 1) rho)`
    pub fn internal_energy_from_pressure(&self, pressure: f64, density: f64) -> f64 {
        pressure / density * self.odgm1
    }

    /// Adiabatic sound speed `sqrt(gamma P / rho)`.
    ///
    /// A vacuum cell has no sound speed; returning 0 there keeps the CFL
    /// computation free of NaNs.
    pub fn sound_speed(&self, pressure: f64, density: f64) -> f64 {
        if density == 0. {
            0.
        } else {
            (self.gamma * pressure / density).sqrt()
        }
    }
}
