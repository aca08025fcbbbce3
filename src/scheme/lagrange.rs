use crate::config::Configuration;
use crate::errors::SolverError;
use crate::gas_law::GasLaw;
use crate::initial_conditions::IcPreset;
use crate::scheme::Scheme;
use crate::snapshot::SnapshotRow;
use crate::timestep::{cell_time_step, min_time_step};
use crate::viscosity::{self, ViscosityKind};
use crate::wall::Wall;

/// The Lagrangian (mass-following) moving mesh scheme.
///
/// The grid is staggered: `rho`, `P`, `U` and `omega` live on cell centres,
/// `v` and `x` on the faces. One fictitious cell sits at each end of the
/// domain. Cell masses are fixed at initialization; from then on density is
/// derived from mesh compression, never the other way around.
pub struct LagrangeScheme {
    gas_law: GasLaw,
    viscosity: ViscosityKind,
    mu0: f64,
    cfl: f64,
    is_conservative: bool,
    wall_left: Wall,
    wall_right: Wall,
    preset: IcPreset,
    x_start: f64,
    x_end: f64,
    dx: f64,
    nx_all: usize,

    // Cell-centred fields, length nx_all.
    rho: Vec<f64>,
    p: Vec<f64>,
    u: Vec<f64>,
    omega: Vec<f64>,
    // Face-centred fields, length nx_all + 1. `m` is indexed per cell and
    // leaves its trailing slot unused.
    v: Vec<f64>,
    v_last: Vec<f64>,
    x: Vec<f64>,
    m: Vec<f64>,
}

impl LagrangeScheme {
    pub fn new(config: &Configuration) -> Self {
        let nx_all = config.nx_all();
        Self {
            gas_law: config.gamma.into(),
            viscosity: config.viscosity,
            mu0: config.mu0,
            cfl: config.cfl,
            is_conservative: config.is_conservative,
            wall_left: config.wall_left,
            wall_right: config.wall_right,
            preset: config.initial_conditions,
            x_start: config.x_start,
            x_end: config.x_end,
            dx: config.dx(),
            nx_all,
            rho: vec![0.; nx_all],
            p: vec![0.; nx_all],
            u: vec![0.; nx_all],
            omega: vec![0.; nx_all],
            v: vec![0.; nx_all + 1],
            v_last: vec![0.; nx_all + 1],
            x: vec![0.; nx_all + 1],
            m: vec![0.; nx_all + 1],
        }
    }

    fn check_invariants(&self) -> Result<(), SolverError> {
        for i in 0..self.nx_all {
            if self.x[i + 1] < self.x[i] {
                return Err(SolverError::MeshFolded { face: i + 1 });
            }
        }
        for i in 1..self.nx_all - 1 {
            if !(self.rho[i] > 0.) {
                return Err(SolverError::NegativeDensity {
                    cell: i,
                    value: self.rho[i],
                });
            }
            if !(self.p[i] > 0.) {
                return Err(SolverError::NegativePressure {
                    cell: i,
                    value: self.p[i],
                });
            }
        }
        Ok(())
    }

    /// Total mass of the interior cells. Constant by construction over the
    /// whole run; exposed so that runs can assert it.
    pub fn total_mass(&self) -> f64 {
        self.m[1..self.nx_all - 1].iter().sum()
    }

    pub fn positions(&self) -> &[f64] {
        &self.x
    }

    pub fn velocities(&self) -> &[f64] {
        &self.v
    }

    pub fn densities(&self) -> &[f64] {
        &self.rho
    }

    pub fn pressures(&self) -> &[f64] {
        &self.p
    }

    pub fn internal_energies(&self) -> &[f64] {
        &self.u
    }

    pub fn masses(&self) -> &[f64] {
        &self.m
    }
}

impl Scheme for LagrangeScheme {
    fn set_initial_conditions(&mut self) {
        let mid = 0.5 * (self.x_start + self.x_end);
        for i in 0..=self.nx_all {
            self.x[i] = self.x_start + (i as f64 - 1.) * self.dx;
            self.v[i] = self.preset.velocity_lagrange(self.x[i], mid);
        }
        for i in 0..self.nx_all {
            let x_centre = 0.5 * (self.x[i] + self.x[i + 1]);
            let (rho, p) = self.preset.primitive_lagrange(x_centre, mid);
            self.rho[i] = rho;
            self.p[i] = p;
            self.u[i] = self.gas_law.internal_energy_from_pressure(p, rho);
            self.m[i] = rho * (self.x[i + 1] - self.x[i]);
        }
    }

    fn apply_boundary_conditions(&mut self) {
        let n = self.nx_all;
        self.v[0] = self.wall_left.ghost_velocity(self.v[1]);
        self.v[n] = self.wall_right.ghost_velocity(self.v[n - 1]);
        self.rho[0] = self.rho[1];
        self.rho[n - 1] = self.rho[n - 2];
        // Ghost energy mirrors the interior energy, not the density.
        self.u[0] = self.u[1];
        self.u[n - 1] = self.u[n - 2];
        self.p[0] = self.p[1];
        self.p[n - 1] = self.p[n - 2];
    }

    fn time_step(&self) -> Result<f64, SolverError> {
        min_time_step((1..self.nx_all - 1).map(|i| {
            let dx = self.x[i + 1] - self.x[i];
            let v_avg = 0.5 * (self.v[i + 1] + self.v[i]);
            cell_time_step(self.cfl, dx, &self.gas_law, self.p[i], self.rho[i], v_avg)
        }))
    }

    fn solve_step(&mut self, dt: f64) -> Result<(), SolverError> {
        let n = self.nx_all;
        self.v_last.copy_from_slice(&self.v);

        for i in 0..n {
            self.omega[i] = viscosity::omega(
                self.viscosity,
                self.mu0,
                self.rho[i],
                self.m[i],
                self.v[i],
                self.v[i + 1],
            );
        }

        // Momentum update on the faces between interior cells: discrete
        // pressure gradient over the average of the adjacent cell masses.
        for i in 2..n - 1 {
            self.v[i] -= ((self.p[i] + self.omega[i]) - (self.p[i - 1] + self.omega[i - 1])) * dt
                / (0.5 * (self.m[i] + self.m[i - 1]));
        }

        // The mesh moves with the fluid.
        for i in 0..=n {
            self.x[i] += self.v[i] * dt;
        }

        for i in 1..n - 1 {
            // Constant cell mass against the new cell width.
            let compression = self.rho[i] * (self.v[i + 1] - self.v[i]) * dt / self.m[i];
            self.rho[i] /= 1. + compression;

            let u_prev = self.u[i];
            if self.is_conservative {
                // Total-energy-conserving flux form with face pressures and a
                // kinetic-energy correction from the pre-update velocities.
                let pb_i =
                    0.5 * (self.p[i] + self.omega[i] + self.p[i - 1] + self.omega[i - 1]);
                let pb_ip1 =
                    0.5 * (self.p[i + 1] + self.omega[i + 1] + self.p[i] + self.omega[i]);
                self.u[i] += -(self.v[i + 1] * pb_ip1 - self.v[i] * pb_i) * dt / self.m[i]
                    + (self.v_last[i + 1] + self.v_last[i]).powi(2) / 8.
                    - (self.v[i + 1] + self.v[i]).powi(2) / 8.;
            }
            if !self.is_conservative || self.u[i] < 0. {
                // Positivity-preserving internal-energy update. The only
                // sanctioned local recovery: the conservative form can go
                // negative near strong shocks.
                self.u[i] = u_prev
                    / (self.rho[i] * (self.v[i + 1] - self.v[i]) * (self.gas_law.gamma() - 1.)
                        * dt
                        / self.m[i]
                        + 1.);
            }
        }

        for i in 0..n {
            self.p[i] = self.gas_law.pressure_from_internal_energy(self.u[i], self.rho[i]);
        }

        self.check_invariants()
    }

    fn sample(&self) -> Vec<SnapshotRow> {
        (1..self.nx_all - 1)
            .map(|i| SnapshotRow {
                x: 0.5 * (self.x[i] + self.x[i + 1]),
                rho: self.rho[i],
                v: 0.5 * (self.v[i] + self.v[i + 1]),
                p: self.p[i],
            })
            .collect()
    }
}
