use std::time::Instant;

use log::info;

use crate::config::Configuration;
use crate::errors::SolverError;
use crate::scheme::{GodunovScheme, LagrangeScheme, Scheme, SchemeKind};
use crate::snapshot::SnapshotWriter;

/// The simulation driver: owns the scheme and the snapshot writer and runs
/// the one simulation timeline.
///
/// Per iteration the phases run in strict order: boundary conditions, time
/// step, integrator step, optional write. The first invariant violation stops
/// the run; there is no recoverable error state inside the loop.
pub struct Engine {
    scheme: Box<dyn Scheme>,
    writer: SnapshotWriter,
    nt: usize,
    nt_write: usize,
    t: f64,
    step: usize,
}

impl Engine {
    /// Allocate a scheme for a validated configuration. The scheme variant is
    /// selected here, once; everything downstream goes through the trait.
    pub fn new(config: &Configuration) -> Self {
        let scheme: Box<dyn Scheme> = match config.scheme {
            SchemeKind::Lagrange => Box::new(LagrangeScheme::new(config)),
            SchemeKind::Godunov => Box::new(GodunovScheme::new(config)),
        };
        Self {
            scheme,
            writer: SnapshotWriter::new(&config.output_dir),
            nt: config.nt,
            nt_write: config.nt_write,
            t: 0.,
            step: 0,
        }
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Run the simulation to completion: set initial conditions, then `nt`
    /// iterations, writing a snapshot every `nt_write`-th step.
    pub fn run(&mut self) -> Result<(), SolverError> {
        self.scheme.set_initial_conditions();
        self.writer.prepare()?;

        let start = Instant::now();
        for step in 1..=self.nt {
            self.step = step;
            self.scheme.apply_boundary_conditions();
            let dt = self.scheme.time_step()?;
            self.scheme.solve_step(dt)?;
            self.t += dt;
            if step % self.nt_write == 0 {
                self.scheme.write_snapshot(&self.writer, step)?;
            }
        }
        info!(
            "Solved {} steps to t = {:.6e} in {:.3?}",
            self.nt,
            self.t,
            start.elapsed()
        );
        Ok(())
    }
}
