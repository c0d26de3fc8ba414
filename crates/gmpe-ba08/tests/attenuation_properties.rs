use gmpe_ba08::{terms, CoefficientTable};
use gmpe_core::{FaultType, Period};
use proptest::prelude::*;

const PERIODS: [f64; 23] = [
    -1.0, 0.0, 0.01, 0.02, 0.03, 0.05, 0.075, 0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.5, 0.75, 1.0,
    1.5, 2.0, 3.0, 4.0, 5.0, 7.5, 10.0,
];

fn log_mean(seconds: f64, fault: FaultType, magnitude: f64, rjb: f64, vs30: f64) -> f64 {
    let table = CoefficientTable::boore_atkinson_2008();
    let coefficients = table
        .coefficients(Period::from_seconds(seconds).unwrap())
        .unwrap();
    terms::log_mean(&coefficients, fault, magnitude, rjb, vs30)
}

fn fault_strategy() -> impl Strategy<Value = FaultType> {
    prop::sample::select(FaultType::ALL.to_vec())
}

proptest! {
    #[test]
    fn amplitude_decays_with_distance(
        idx in 0usize..PERIODS.len(),
        fault in fault_strategy(),
        magnitude in 4.0f64..8.0,
        rjb in 5.0f64..300.0,
        step in 0.5f64..50.0,
        vs30 in 300.0f64..1500.0,
    ) {
        let near = log_mean(PERIODS[idx], fault, magnitude, rjb, vs30);
        let far = log_mean(PERIODS[idx], fault, magnitude, rjb + step, vs30);
        prop_assert!(far <= near, "near {near} far {far}");
    }

    #[test]
    fn amplitude_grows_with_magnitude_below_hinge(
        idx in 0usize..19,
        fault in fault_strategy(),
        start in 0.0f64..1.0,
        step in 0.05f64..1.0,
        rjb in 1.0f64..300.0,
        vs30 in 400.0f64..1500.0,
    ) {
        let seconds = PERIODS[idx];
        let table = CoefficientTable::boore_atkinson_2008();
        let mh = table.row(Period::from_seconds(seconds).unwrap()).unwrap().mh;
        let small = 4.0 + start * (mh - 4.0);
        let large = (small + step).min(mh);
        let lower = log_mean(seconds, fault, small, rjb, vs30);
        let upper = log_mean(seconds, fault, large, rjb, vs30);
        prop_assert!(upper >= lower, "M {small} -> {large}: {lower} -> {upper}");
    }

    #[test]
    fn softer_sites_amplify_moderate_events(
        idx in 0usize..PERIODS.len(),
        fault in fault_strategy(),
        magnitude in 4.0f64..6.0,
        rjb in 10.0f64..300.0,
        vs30 in 300.0f64..1500.0,
        ratio in 1.05f64..2.0,
    ) {
        let soft = log_mean(PERIODS[idx], fault, magnitude, rjb, vs30);
        let stiff = log_mean(PERIODS[idx], fault, magnitude, rjb, vs30 * ratio);
        prop_assert!(soft >= stiff, "V {vs30}: {soft} vs {stiff}");
    }
}

#[test]
fn reference_rock_has_no_site_term() {
    let table = CoefficientTable::boore_atkinson_2008();
    for seconds in PERIODS {
        let period = Period::from_seconds(seconds).unwrap();
        let coefficients = table.coefficients(period).unwrap();
        let c = coefficients.target;
        for magnitude in [4.0, 6.0, 8.0] {
            let full = terms::log_mean(&coefficients, FaultType::Reverse, magnitude, 20.0, 760.0);
            let rock = terms::magnitude_scaling(c, FaultType::Reverse, magnitude)
                + terms::distance_scaling(c, magnitude, 20.0);
            assert!((full - rock).abs() < 1e-12, "period {period}");
        }
    }
}

#[test]
fn pga_row_drives_its_own_nonlinear_term() {
    let table = CoefficientTable::boore_atkinson_2008();
    let coefficients = table.coefficients(Period::PGA).unwrap();
    assert!(std::ptr::eq(coefficients.target, coefficients.pga));
    let magnitude = 6.5;
    let rjb = 20.0;
    let pga4nl = terms::reference_pga(coefficients.pga, FaultType::Unspecified, magnitude, rjb);
    let rock = log_mean(0.0, FaultType::Unspecified, magnitude, rjb, 760.0);
    assert!((pga4nl.ln() - rock).abs() < 1e-12);
}

#[test]
fn mechanism_changes_only_the_intercept() {
    let table = CoefficientTable::boore_atkinson_2008();
    let period = Period::from_seconds(0.2).unwrap();
    let row = table.row(period).unwrap();
    let reverse = log_mean(0.2, FaultType::Reverse, 5.0, 80.0, 1200.0);
    let normal = log_mean(0.2, FaultType::Normal, 5.0, 80.0, 1200.0);
    // Rock sites above Vref have no nonlinear term, so only e3/e4 differ.
    assert!(((reverse - normal) - (row.e4 - row.e3)).abs() < 1e-12);
}

#[test]
fn soft_sites_deamplify_large_near_events_at_short_period() {
    // Nonlinear soil response at M9, 5 km: Vs30 = 200 sits below Vs30 = 1000.
    let soft = log_mean(0.01, FaultType::StrikeSlip, 9.0, 5.0, 200.0);
    let stiff = log_mean(0.01, FaultType::StrikeSlip, 9.0, 5.0, 1000.0);
    assert!((soft - -1.095230).abs() < 1e-4, "soft {soft}");
    assert!((stiff - -0.842161).abs() < 1e-4, "stiff {stiff}");
    assert!(soft < stiff);

    // The same pair at M5 amplifies as expected.
    let soft = log_mean(0.01, FaultType::StrikeSlip, 5.0, 5.0, 200.0);
    let stiff = log_mean(0.01, FaultType::StrikeSlip, 5.0, 5.0, 1000.0);
    assert!(soft > stiff);
}
