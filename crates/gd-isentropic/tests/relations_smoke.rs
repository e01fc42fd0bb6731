//! End-to-end checks of the published textbook scenarios, resolving gases by
//! name the way a presentation layer would.

use gd_gas::{Gas, GasProperties, UnitSystem};
use gd_isentropic::{
    FlowError, MachRange, choked_mdot, entropy_produced, mach_area_ratio, sonic_velocity,
    stagnation_pressure, stagnation_table,
};

fn props(name: &str) -> GasProperties {
    let gas: Gas = name.parse().expect("registry gas");
    GasProperties::of(gas, UnitSystem::Metric)
}

#[test]
fn air_sonic_velocity_at_500k() {
    let a = sonic_velocity(props("air"), 500.0).unwrap();
    assert!((a - 448.2186966202994).abs() < 1e-6);
}

#[test]
fn stagnation_pressure_scenario_feeds_back_to_mach_one() {
    let air = props("air");
    let pt = stagnation_pressure(air, None, Some(10.0), Some(1.0)).unwrap();
    assert!((pt - 18.92929158737854).abs() < 1e-6);

    let m = stagnation_pressure(air, Some(18.92929158737854), Some(10.0), None).unwrap();
    assert!((m - 1.0).abs() < 1e-9);
}

#[test]
fn area_ratio_scenario() {
    let ratio = mach_area_ratio(props("air"), 1.5, 2.5, 0.0).unwrap();
    assert!((ratio - 2.241789331255894).abs() < 1e-6);
}

#[test]
fn choked_mass_flux_scenario() {
    let flux = choked_mdot(props("air"), 1_000_000.0, 300.0).unwrap();
    assert!((flux - 2333.558560606226).abs() < 1e-3);
}

#[test]
fn no_entropy_without_stagnation_pressure_loss() {
    for x in [1.0, 10.0, 1.0e6] {
        assert_eq!(entropy_produced(props("air"), x, x).unwrap(), 0.0);
    }
}

#[test]
fn unknown_gas_is_surfaced_through_flow_errors() {
    let err: FlowError = "unobtainium".parse::<Gas>().unwrap_err().into();
    assert!(err.to_string().contains("unobtainium"));
}

#[test]
fn methane_table_matches_published_values() {
    // Published isentropic table values for methane, [0, 2] by 0.2.
    let methane = props("methane");
    let range = MachRange::new(0.0, 2.0, 0.2).unwrap();
    let rows = stagnation_table(methane, &range).unwrap();

    assert_eq!(rows.len(), 11);
    let sonic = &rows[5];
    assert!((sonic.mach - 1.0).abs() < 1e-12);
    assert!((sonic.p_over_pt - 0.542).abs() < 5e-4);
    assert!((sonic.t_over_tt - 0.862).abs() < 5e-4);
    assert!((sonic.rho_over_rho_t - 0.629).abs() < 5e-4);

    let last = &rows[10];
    assert!((last.p_over_pt - 0.130).abs() < 5e-4);
    assert!((last.area_ratio - 1.754).abs() < 5e-4);
}
