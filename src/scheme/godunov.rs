use crate::config::Configuration;
use crate::errors::SolverError;
use crate::gas_law::GasLaw;
use crate::initial_conditions::IcPreset;
use crate::scheme::Scheme;
use crate::snapshot::SnapshotRow;
use crate::timestep::{cell_time_step, min_time_step};
use crate::viscosity::{self, ViscosityKind};
use crate::wall::{Wall, WallKind};

/// The Godunov-style companion scheme: conserved quantities `rho`, `rho v`
/// and `rho e` on a fixed grid, updated from explicit face fluxes.
///
/// Shares the viscosity model and the CFL controller with the Lagrangian
/// scheme; the structural difference is the boundary model, which produces
/// end-face fluxes from the prescribed wall state instead of ghost faces.
pub struct GodunovScheme {
    gas_law: GasLaw,
    viscosity: ViscosityKind,
    mu0: f64,
    cfl: f64,
    wall_left: Wall,
    wall_right: Wall,
    preset: IcPreset,
    x_start: f64,
    x_end: f64,
    dx: f64,
    nx_all: usize,

    // Cell-centred fields, length nx_all.
    rho: Vec<f64>,
    rho_u: Vec<f64>,
    rho_e: Vec<f64>,
    p: Vec<f64>,
    omega: Vec<f64>,
    // Face-centred fields, length nx_all + 1.
    x: Vec<f64>,
    f_m: Vec<f64>,
    f_imp: Vec<f64>,
    f_e: Vec<f64>,
}

impl GodunovScheme {
    pub fn new(config: &Configuration) -> Self {
        let nx_all = config.nx_all();
        Self {
            gas_law: config.gamma.into(),
            viscosity: config.viscosity,
            mu0: config.mu0,
            cfl: config.cfl,
            wall_left: config.wall_left,
            wall_right: config.wall_right,
            preset: config.initial_conditions,
            x_start: config.x_start,
            x_end: config.x_end,
            dx: config.dx(),
            nx_all,
            rho: vec![0.; nx_all],
            rho_u: vec![0.; nx_all],
            rho_e: vec![0.; nx_all],
            p: vec![0.; nx_all],
            omega: vec![0.; nx_all],
            x: vec![0.; nx_all + 1],
            f_m: vec![0.; nx_all + 1],
            f_imp: vec![0.; nx_all + 1],
            f_e: vec![0.; nx_all + 1],
        }
    }

    fn cell_velocity(&self, i: usize) -> f64 {
        if self.rho[i] == 0. {
            0.
        } else {
            self.rho_u[i] / self.rho[i]
        }
    }

    /// Euler flux through a face, evaluated from one cell's state with the
    /// artificial viscosity folded into the pressure.
    fn cell_flux(&self, i: usize) -> (f64, f64, f64) {
        let u = self.cell_velocity(i);
        let p_eff = self.p[i] + self.omega[i];
        (
            self.rho_u[i],
            self.rho_u[i] * u + p_eff,
            (self.rho_e[i] + p_eff) * u,
        )
    }

    /// Total mass of the interior cells.
    pub fn total_mass(&self) -> f64 {
        self.rho[1..self.nx_all - 1].iter().sum::<f64>() * self.dx
    }

    pub fn densities(&self) -> &[f64] {
        &self.rho
    }

    pub fn pressures(&self) -> &[f64] {
        &self.p
    }

    pub fn momenta(&self) -> &[f64] {
        &self.rho_u
    }
}

impl Scheme for GodunovScheme {
    fn set_initial_conditions(&mut self) {
        let mid = 0.5 * (self.x_start + self.x_end);
        for i in 0..=self.nx_all {
            self.x[i] = self.x_start + (i as f64 - 1.) * self.dx;
        }
        for i in 0..self.nx_all {
            let x_centre = 0.5 * (self.x[i] + self.x[i + 1]);
            let (rho, p) = self.preset.primitive_godunov(x_centre, mid);
            let v = self.preset.velocity_godunov(x_centre, mid);
            self.rho[i] = rho;
            self.p[i] = p;
            self.rho_u[i] = rho * v;
            self.rho_e[i] = 0.5 * rho * v * v + p / (self.gas_law.gamma() - 1.);
        }
    }

    fn apply_boundary_conditions(&mut self) {
        let n = self.nx_all;
        self.rho[0] = self.rho[1];
        self.rho[n - 1] = self.rho[n - 2];
        // Ghost energy mirrors the interior energy, not the density.
        self.rho_e[0] = self.rho_e[1];
        self.rho_e[n - 1] = self.rho_e[n - 2];
        self.p[0] = self.p[1];
        self.p[n - 1] = self.p[n - 2];
        self.rho_u[0] = self.rho[0] * self.wall_left.ghost_velocity(self.cell_velocity(1));
        self.rho_u[n - 1] =
            self.rho[n - 1] * self.wall_right.ghost_velocity(self.cell_velocity(n - 2));

        // End-face fluxes from the prescribed wall state. Face 1 bounds the
        // first interior cell on the left, face n - 1 the last on the right.
        for (wall, face, cell) in [
            (self.wall_left, 1, 1),
            (self.wall_right, n - 1, n - 2),
        ] {
            match wall.kind {
                WallKind::NoSlip => {
                    self.f_m[face] = wall.velocity * self.rho[cell];
                    self.f_imp[face] = wall.velocity * wall.velocity * self.rho[cell] + wall.pressure;
                    self.f_e[face] = (self.rho_e[cell] + wall.pressure) * wall.velocity;
                }
                WallKind::FreeFlux => {
                    let u = self.cell_velocity(cell);
                    self.f_m[face] = self.rho_u[cell];
                    self.f_imp[face] = self.rho_u[cell] * u + self.p[cell];
                    self.f_e[face] = (self.rho_e[cell] + self.p[cell]) * u;
                }
            }
        }
    }

    fn time_step(&self) -> Result<f64, SolverError> {
        min_time_step((1..self.nx_all - 1).map(|i| {
            cell_time_step(
                self.cfl,
                self.dx,
                &self.gas_law,
                self.p[i],
                self.rho[i],
                self.cell_velocity(i),
            )
        }))
    }

    fn solve_step(&mut self, dt: f64) -> Result<(), SolverError> {
        let n = self.nx_all;

        // Shared artificial viscosity: the velocity jump over a cell is taken
        // between face-interpolated velocities, the cell mass is rho dx.
        for i in 0..n {
            let v_left = if i == 0 {
                self.cell_velocity(0)
            } else {
                0.5 * (self.cell_velocity(i - 1) + self.cell_velocity(i))
            };
            let v_right = if i == n - 1 {
                self.cell_velocity(n - 1)
            } else {
                0.5 * (self.cell_velocity(i) + self.cell_velocity(i + 1))
            };
            self.omega[i] = viscosity::omega(
                self.viscosity,
                self.mu0,
                self.rho[i],
                self.rho[i] * self.dx,
                v_left,
                v_right,
            );
        }

        // Interior face fluxes: Rusanov estimate between the adjacent cells.
        for i in 2..n - 1 {
            let (left, right) = (i - 1, i);
            let (fm_l, fimp_l, fe_l) = self.cell_flux(left);
            let (fm_r, fimp_r, fe_r) = self.cell_flux(right);
            let a_l = self.cell_velocity(left).abs()
                + self.gas_law.sound_speed(self.p[left], self.rho[left]);
            let a_r = self.cell_velocity(right).abs()
                + self.gas_law.sound_speed(self.p[right], self.rho[right]);
            let a = a_l.max(a_r);
            self.f_m[i] = 0.5 * (fm_l + fm_r) - 0.5 * a * (self.rho[right] - self.rho[left]);
            self.f_imp[i] =
                0.5 * (fimp_l + fimp_r) - 0.5 * a * (self.rho_u[right] - self.rho_u[left]);
            self.f_e[i] = 0.5 * (fe_l + fe_r) - 0.5 * a * (self.rho_e[right] - self.rho_e[left]);
        }

        // Conservative flux-difference update over the fixed grid.
        let dtdx = dt / self.dx;
        for i in 1..n - 1 {
            self.rho[i] -= dtdx * (self.f_m[i + 1] - self.f_m[i]);
            self.rho_u[i] -= dtdx * (self.f_imp[i + 1] - self.f_imp[i]);
            self.rho_e[i] -= dtdx * (self.f_e[i + 1] - self.f_e[i]);
        }

        // Decode primitives and check the physical invariants.
        for i in 1..n - 1 {
            if !(self.rho[i] > 0.) {
                return Err(SolverError::NegativeDensity {
                    cell: i,
                    value: self.rho[i],
                });
            }
            let u = self.rho_u[i] / self.rho[i];
            let internal_energy = self.rho_e[i] / self.rho[i] - 0.5 * u * u;
            self.p[i] = self
                .gas_law
                .pressure_from_internal_energy(internal_energy, self.rho[i]);
            if !(self.p[i] > 0.) {
                return Err(SolverError::NegativePressure {
                    cell: i,
                    value: self.p[i],
                });
            }
        }
        Ok(())
    }

    fn sample(&self) -> Vec<SnapshotRow> {
        (1..self.nx_all - 1)
            .map(|i| SnapshotRow {
                x: 0.5 * (self.x[i] + self.x[i + 1]),
                rho: self.rho[i],
                v: self.cell_velocity(i),
                p: self.p[i],
            })
            .collect()
    }
}
