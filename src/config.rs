use std::path::PathBuf;

use yaml_rust::Yaml;

use crate::errors::ConfigError;
use crate::initial_conditions::IcPreset;
use crate::scheme::SchemeKind;
use crate::viscosity::ViscosityKind;
use crate::wall::{Wall, WallKind};

/// The full, validated description of one simulation run.
///
/// Built once from a scenario file and never mutated afterwards; owned by the
/// driver and read-only to every other component.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub scheme: SchemeKind,
    pub x_start: f64,
    pub x_end: f64,
    pub nx: usize,
    pub gamma: f64,
    pub mu0: f64,
    pub cfl: f64,
    pub nt: usize,
    pub nt_write: usize,
    pub is_conservative: bool,
    pub viscosity: ViscosityKind,
    pub wall_left: Wall,
    pub wall_right: Wall,
    pub initial_conditions: IcPreset,
    pub output_dir: PathBuf,
}

impl Configuration {
    /// Number of cells including the one fictitious cell at each end.
    pub fn nx_all(&self) -> usize {
        self.nx + 2
    }

    /// Initial (Godunov: permanent) grid spacing.
    pub fn dx(&self) -> f64 {
        (self.x_end - self.x_start) / self.nx as f64
    }

    /// The startup parameter checks. All must hold; a mis-configured physical
    /// scenario has no safe default to fall back to, so any failure aborts the
    /// run before allocation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.x_start < self.x_end) {
            return Err(ConfigError::InvalidParameter("x_start < x_end"));
        }
        if self.nx <= 1 {
            return Err(ConfigError::InvalidParameter("nx > 1"));
        }
        if !(self.wall_left.pressure > 0.) || !(self.wall_right.pressure > 0.) {
            return Err(ConfigError::InvalidParameter("wall pressure > 0"));
        }
        if !(self.gamma > 0.) {
            return Err(ConfigError::InvalidParameter("gamma > 0"));
        }
        if self.nt_write == 0 {
            return Err(ConfigError::InvalidParameter("nt_write > 0"));
        }
        if self.nt < self.nt_write {
            return Err(ConfigError::InvalidParameter("nt >= nt_write"));
        }
        if !(self.cfl > 0.) {
            return Err(ConfigError::InvalidParameter("CFL > 0"));
        }
        if !(self.mu0 > 0.) {
            return Err(ConfigError::InvalidParameter("mu0 > 0"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidParameter("output directory non-empty"));
        }
        Ok(())
    }

    /// Build and validate a configuration from a parsed scenario document.
    pub fn from_yaml(yaml: &Yaml) -> Result<Self, ConfigError> {
        let scheme = match required_str(yaml, "", "scheme")? {
            "Lagrange" => SchemeKind::Lagrange,
            "Godunov" => SchemeKind::Godunov,
            other => return Err(ConfigError::UnknownScheme(other.to_string())),
        };

        let grid = &yaml["grid"];
        let time = &yaml["time"];
        let hydro = &yaml["hydrodynamics"];
        let walls = &yaml["walls"];
        let snapshots = &yaml["snapshots"];

        let config = Self {
            scheme,
            x_start: required_f64(grid, "grid", "x_start")?,
            x_end: required_f64(grid, "grid", "x_end")?,
            nx: required_usize(grid, "grid", "nx")?,
            gamma: required_f64(hydro, "hydrodynamics", "gamma")?,
            mu0: required_f64(hydro, "hydrodynamics", "mu0")?,
            cfl: required_f64(time, "time", "cfl")?,
            nt: required_usize(time, "time", "nt")?,
            nt_write: required_usize(time, "time", "nt_write")?,
            is_conservative: hydro["is_conservative"].as_bool().unwrap_or(false),
            viscosity: parse_viscosity(hydro)?,
            wall_left: parse_wall(&walls["left"], "walls:left")?,
            wall_right: parse_wall(&walls["right"], "walls:right")?,
            initial_conditions: parse_ic(yaml)?,
            output_dir: PathBuf::from(required_str(snapshots, "snapshots", "directory")?),
        };
        config.validate()?;
        Ok(config)
    }
}

fn required_str<'a>(
    section: &'a Yaml,
    section_name: &str,
    name: &str,
) -> Result<&'a str, ConfigError> {
    section[name].as_str().ok_or_else(|| {
        if section_name.is_empty() {
            ConfigError::MissingParameter(name.to_string())
        } else {
            ConfigError::MissingParameter(format!("{}:{}", section_name, name))
        }
    })
}

fn required_f64(section: &Yaml, section_name: &str, name: &str) -> Result<f64, ConfigError> {
    section[name]
        .as_f64()
        .or_else(|| section[name].as_i64().map(|v| v as f64))
        .ok_or_else(|| ConfigError::MissingParameter(format!("{}:{}", section_name, name)))
}

fn required_usize(section: &Yaml, section_name: &str, name: &str) -> Result<usize, ConfigError> {
    section[name]
        .as_i64()
        .filter(|v| *v >= 0)
        .map(|v| v as usize)
        .ok_or_else(|| ConfigError::MissingParameter(format!("{}:{}", section_name, name)))
}

fn parse_viscosity(hydro: &Yaml) -> Result<ViscosityKind, ConfigError> {
    let name = hydro["viscosity"].as_str().unwrap_or("None");
    match name {
        "None" => Ok(ViscosityKind::None),
        "Neumann" | "Neuman" => Ok(ViscosityKind::Neumann),
        "Latter" => Ok(ViscosityKind::Latter),
        "Linear" => Ok(ViscosityKind::Linear),
        "Sum" => Ok(ViscosityKind::Sum),
        other => Err(ConfigError::UnknownViscosity(other.to_string())),
    }
}

fn parse_wall(yaml: &Yaml, label: &str) -> Result<Wall, ConfigError> {
    let kind = yaml["type"]
        .as_str()
        .ok_or_else(|| ConfigError::MissingParameter(format!("{}:type", label)))?;
    let kind = match kind {
        "NoSlip" => WallKind::NoSlip,
        "FreeFlux" => WallKind::FreeFlux,
        other => return Err(ConfigError::UnknownWallKind(other.to_string())),
    };
    Ok(Wall {
        kind,
        velocity: required_f64(yaml, label, "velocity")?,
        pressure: required_f64(yaml, label, "pressure")?,
    })
}

/// The preset selector accepts both the symbolic names and the legacy integer
/// ids of the reference scenario files.
fn parse_ic(yaml: &Yaml) -> Result<IcPreset, ConfigError> {
    let selector = &yaml["initial_conditions"];
    if let Some(id) = selector.as_i64() {
        return IcPreset::try_from(id.max(0) as usize)
            .map_err(|_| ConfigError::UnknownICs(id.to_string()));
    }
    let name = selector
        .as_str()
        .ok_or_else(|| ConfigError::MissingParameter("initial_conditions".to_string()))?;
    match name {
        "sod" | "test1" => Ok(IcPreset::SodShockTube),
        "rarefaction" | "test2" => Ok(IcPreset::DoubleRarefaction),
        "blast" | "test3" => Ok(IcPreset::StrongBlast),
        "perturbation" | "test4" => Ok(IcPreset::SmoothPerturbation),
        other => Err(ConfigError::UnknownICs(other.to_string())),
    }
}
