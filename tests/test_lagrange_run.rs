use float_cmp::assert_approx_eq;
use lmm_hydro::{IcPreset, LagrangeScheme, Scheme, SchemeKind, ViscosityKind, Wall, WallKind};

mod common;

use common::sod_config;

fn run_steps(scheme: &mut LagrangeScheme, nt: usize) -> f64 {
    let mut t = 0.;
    for _ in 0..nt {
        scheme.apply_boundary_conditions();
        let dt = scheme.time_step().expect("CFL step degenerated");
        scheme.solve_step(dt).expect("invariant violated mid-run");
        t += dt;
    }
    t
}

#[test]
fn test_total_mass_invariant_over_run() {
    let config = sod_config("mass_invariant", SchemeKind::Lagrange);
    let mut scheme = LagrangeScheme::new(&config);
    scheme.set_initial_conditions();
    let mass0 = scheme.total_mass();
    run_steps(&mut scheme, 100);
    assert_approx_eq!(f64, scheme.total_mass(), mass0);
}

#[test]
fn test_cell_mass_stays_density_times_width() {
    // The defining Lagrangian invariant: density is derived from mesh
    // compression against the fixed cell masses.
    let config = sod_config("mass_width", SchemeKind::Lagrange);
    let mut scheme = LagrangeScheme::new(&config);
    scheme.set_initial_conditions();
    run_steps(&mut scheme, 50);
    let x = scheme.positions();
    let rho = scheme.densities();
    let m = scheme.masses();
    for i in 1..config.nx_all() - 1 {
        assert_approx_eq!(f64, m[i], rho[i] * (x[i + 1] - x[i]), epsilon = 1e-10);
    }
}

#[test]
fn test_mesh_never_folds_for_canonical_presets() {
    for preset in [
        IcPreset::SodShockTube,
        IcPreset::DoubleRarefaction,
        IcPreset::StrongBlast,
        IcPreset::SmoothPerturbation,
    ] {
        let mut config = sod_config("mesh_fold", SchemeKind::Lagrange);
        config.initial_conditions = preset;
        if preset == IcPreset::SmoothPerturbation {
            // Bulk flow at v = 1: let the mesh leave through the walls.
            let open = Wall {
                kind: WallKind::FreeFlux,
                velocity: 0.,
                pressure: 1.,
            };
            config.wall_left = open;
            config.wall_right = open;
        }
        let mut scheme = LagrangeScheme::new(&config);
        scheme.set_initial_conditions();
        // solve_step reports folds as errors, so completing the run is the
        // assertion; re-check the final mesh ordering regardless.
        run_steps(&mut scheme, 50);
        let x = scheme.positions();
        assert!(
            x.windows(2).all(|w| w[0] <= w[1]),
            "mesh folded for {:?}",
            preset
        );
    }
}

#[test]
fn test_fallback_keeps_energy_positive_for_strong_blast() {
    let mut config = sod_config("blast_energy", SchemeKind::Lagrange);
    config.initial_conditions = IcPreset::StrongBlast;
    let mut scheme = LagrangeScheme::new(&config);
    scheme.set_initial_conditions();
    run_steps(&mut scheme, 100);
    assert!(scheme.internal_energies()[1..config.nx_all() - 1]
        .iter()
        .all(|&u| u > 0.));
}

#[test]
fn test_non_conservative_update_matches_positivity_form() {
    // With is_conservative off the fallback form runs unconditionally and
    // must keep every interior energy positive.
    let mut config = sod_config("non_conservative", SchemeKind::Lagrange);
    config.is_conservative = false;
    config.viscosity = ViscosityKind::Neumann;
    let mut scheme = LagrangeScheme::new(&config);
    scheme.set_initial_conditions();
    run_steps(&mut scheme, 100);
    assert!(scheme.internal_energies()[1..config.nx_all() - 1]
        .iter()
        .all(|&u| u > 0.));
    assert!(scheme.pressures()[1..config.nx_all() - 1]
        .iter()
        .all(|&p| p > 0.));
}

#[test]
fn test_sod_shock_position_regression() {
    // First-order regression against the exact Riemann solution for the Sod
    // tube at gamma = 1.4: the shock travels at ~1.7522 from the midpoint.
    // The front is smeared over a few cells by the artificial viscosity, so
    // the tolerance is a handful of cell widths.
    let config = sod_config("shock_position", SchemeKind::Lagrange);
    let mut scheme = LagrangeScheme::new(&config);
    scheme.set_initial_conditions();
    let t = run_steps(&mut scheme, 60);

    let rows = scheme.sample();
    // Post-shock density is ~0.2656, undisturbed right state 0.125: the
    // right-most cell above the midpoint threshold marks the front.
    let front = rows
        .iter()
        .rev()
        .find(|row| row.rho > 0.19)
        .expect("no shock front found")
        .x;
    let expected = 0.5 + 1.7522 * t;
    assert!(
        (front - expected).abs() < 0.08,
        "shock front at {} but expected {} (t = {})",
        front,
        expected,
        t
    );
}
