use lmm_hydro::{Configuration, IcPreset, SchemeKind, ViscosityKind, WallKind};
use yaml_rust::YamlLoader;

mod common;

use common::{parse_config, SOD_SCENARIO};

#[test]
fn test_parse_full_scenario() {
    let config = parse_config(SOD_SCENARIO);
    assert_eq!(config.scheme, SchemeKind::Lagrange);
    assert_eq!(config.nx, 100);
    assert_eq!(config.nx_all(), 102);
    assert_eq!(config.gamma, 1.4);
    assert_eq!(config.viscosity, ViscosityKind::Latter);
    assert_eq!(config.wall_left.kind, WallKind::NoSlip);
    assert_eq!(config.initial_conditions, IcPreset::SodShockTube);
    assert!(config.is_conservative);
    assert_eq!(config.output_dir.to_str(), Some("output/sod"));
}

#[test]
fn test_missing_parameter_is_an_error() {
    let without_nx = SOD_SCENARIO.replace("  nx: 100\n", "");
    let yaml = &YamlLoader::load_from_str(&without_nx).unwrap()[0];
    assert!(Configuration::from_yaml(yaml).is_err());
}

#[test]
fn test_unknown_selectors_are_errors() {
    for (from, to) in [
        ("\"Lagrange\"", "\"SPH\""),
        ("\"Latter\"", "\"Cubic\""),
        ("\"sod\"", "\"implosion\""),
    ] {
        let broken = SOD_SCENARIO.replace(from, to);
        let yaml = &YamlLoader::load_from_str(&broken).unwrap()[0];
        assert!(Configuration::from_yaml(yaml).is_err(), "{}", to);
    }
}

#[test]
fn test_invalid_value_rejected_at_parse_time() {
    let broken = SOD_SCENARIO.replace("cfl: 0.3", "cfl: -0.3");
    let yaml = &YamlLoader::load_from_str(&broken).unwrap()[0];
    assert!(Configuration::from_yaml(yaml).is_err());
}

#[test]
fn test_legacy_integer_preset_ids() {
    let by_id = SOD_SCENARIO.replace("initial_conditions: \"sod\"", "initial_conditions: 3");
    let yaml = &YamlLoader::load_from_str(&by_id).unwrap()[0];
    let config = Configuration::from_yaml(yaml).unwrap();
    assert_eq!(config.initial_conditions, IcPreset::StrongBlast);
}

#[test]
fn test_godunov_scheme_selector() {
    let godunov = SOD_SCENARIO.replace("\"Lagrange\"", "\"Godunov\"");
    let yaml = &YamlLoader::load_from_str(&godunov).unwrap()[0];
    assert_eq!(
        Configuration::from_yaml(yaml).unwrap().scheme,
        SchemeKind::Godunov
    );
}
