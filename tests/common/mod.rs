#![allow(dead_code)]

use std::path::PathBuf;

use lmm_hydro::{
    Configuration, IcPreset, SchemeKind, ViscosityKind, Wall, WallKind,
};
use yaml_rust::YamlLoader;

pub const SOD_SCENARIO: &str = r##"
scheme: "Lagrange"

grid:
  x_start: 0.0
  x_end: 1.0
  nx: 100

time:
  nt: 100
  nt_write: 50
  cfl: 0.3

hydrodynamics:
  gamma: 1.4
  mu0: 2.0
  viscosity: "Latter"
  is_conservative: true

walls:
  left:
    type: "NoSlip"
    velocity: 0.0
    pressure: 1.0
  right:
    type: "NoSlip"
    velocity: 0.0
    pressure: 1.0

initial_conditions: "sod"

snapshots:
  directory: "output/sod"
"##;

pub fn parse_config(scenario: &str) -> Configuration {
    Configuration::from_yaml(
        &YamlLoader::load_from_str(scenario).expect("Error loading scenario!")[0],
    )
    .expect("Error building configuration!")
}

/// A validated Sod shock tube configuration with an isolated scratch output
/// directory, as a baseline for the run tests to tweak.
pub fn sod_config(test_name: &str, scheme: SchemeKind) -> Configuration {
    Configuration {
        scheme,
        x_start: 0.,
        x_end: 1.,
        nx: 100,
        gamma: 1.4,
        mu0: 2.,
        cfl: 0.3,
        nt: 100,
        nt_write: 50,
        is_conservative: true,
        viscosity: ViscosityKind::Latter,
        wall_left: Wall {
            kind: WallKind::NoSlip,
            velocity: 0.,
            pressure: 1.,
        },
        wall_right: Wall {
            kind: WallKind::NoSlip,
            velocity: 0.,
            pressure: 1.,
        },
        initial_conditions: IcPreset::SodShockTube,
        output_dir: scratch_dir(test_name),
    }
}

pub fn scratch_dir(test_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join("lmm_hydro_integration_tests")
        .join(test_name)
}
