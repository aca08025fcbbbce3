use std::{
    error::Error,
    fmt::{Debug, Display},
    io,
};

#[derive(Debug)]
pub enum ConfigError {
    MissingParameter(String),
    UnknownScheme(String),
    UnknownICs(String),
    UnknownViscosity(String),
    UnknownWallKind(String),
    /// A parameter value failed one of the startup validation checks.
    /// Carries the check that failed, e.g. `"x_start < x_end"`.
    InvalidParameter(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingParameter(name) => {
                write!(f, "Missing required parameter in configuration: {}", name)
            }
            ConfigError::UnknownScheme(name) => {
                write!(f, "Unknown type of scheme configured: {}", name)
            }
            ConfigError::UnknownICs(name) => {
                write!(f, "Unknown type of initial conditions configured: {}", name)
            }
            ConfigError::UnknownViscosity(name) => {
                write!(
                    f,
                    "Unknown type of artificial viscosity configured: {}",
                    name
                )
            }
            ConfigError::UnknownWallKind(name) => {
                write!(f, "Unknown type of wall configured: {}", name)
            }
            ConfigError::InvalidParameter(check) => {
                write!(f, "Configuration violates parameter check: {}", check)
            }
        }
    }
}

impl Error for ConfigError {}

/// Fatal runtime errors of the solve loop. None of these is recoverable: the
/// driver stops at the first one it sees.
#[derive(Debug)]
pub enum SolverError {
    NegativeDensity { cell: usize, value: f64 },
    NegativePressure { cell: usize, value: f64 },
    MeshFolded { face: usize },
    InvalidTimestep(f64),
    Io(io::Error),
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::NegativeDensity { cell, value } => {
                write!(f, "Non-positive density {} in cell {}", value, cell)
            }
            SolverError::NegativePressure { cell, value } => {
                write!(f, "Non-positive pressure {} in cell {}", value, cell)
            }
            SolverError::MeshFolded { face } => {
                write!(f, "Mesh folded over at face {}", face)
            }
            SolverError::InvalidTimestep(dt) => {
                write!(f, "CFL criterion produced an unusable time step: {}", dt)
            }
            SolverError::Io(err) => {
                write!(f, "I/O error while writing snapshot: {}", err)
            }
        }
    }
}

impl Error for SolverError {}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        SolverError::Io(err)
    }
}
