//! One-dimensional single-fluid compressible flow on a Lagrangian (mass
//! following) moving mesh, with a companion Godunov-style fixed-grid scheme
//! sharing the same physical model.
//!
//! Both schemes integrate the compressible Euler equations explicitly, with an
//! artificial viscosity closure for shocks and a CFL-limited adaptive time
//! step, and write delimited text snapshots of the cell-centred state.

pub use config::Configuration;
pub use engine::Engine;
pub use errors::{ConfigError, SolverError};
pub use gas_law::GasLaw;
pub use initial_conditions::IcPreset;
pub use scheme::{GodunovScheme, LagrangeScheme, Scheme, SchemeKind};
pub use snapshot::{SnapshotRow, SnapshotWriter};
pub use viscosity::ViscosityKind;
pub use wall::{Wall, WallKind};

mod config;
mod engine;
mod errors;
mod gas_law;
mod initial_conditions;
mod scheme;
mod snapshot;
mod timestep;
mod viscosity;
mod wall;
