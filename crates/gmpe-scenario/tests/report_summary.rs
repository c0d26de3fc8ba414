use gmpe_core::Period;
use gmpe_scenario::{PeriodArtefact, PeriodSummary};

fn artefact(log_mean: Vec<f64>, sigma: Vec<f64>) -> PeriodArtefact {
    let period = Period::from_seconds(0.2).unwrap();
    PeriodArtefact {
        period,
        label: period.label(),
        units: period.units().to_string(),
        shape: vec![log_mean.len()],
        log_mean,
        sigma,
    }
}

#[test]
fn summary_bounds_cover_the_grid() {
    let summary = PeriodSummary::new(
        &artefact(vec![-1.5, 0.25, -3.0], vec![0.6, 0.6, 0.6]),
        "hash".into(),
        None,
    );
    assert_eq!(summary.log_mean_min, -3.0);
    assert_eq!(summary.log_mean_max, 0.25);
    assert_eq!(summary.sigma_max, 0.6);
    assert_eq!(summary.label, "SA(0.20)");
}

#[test]
fn nan_values_surface_in_the_summary() {
    let summary = PeriodSummary::new(
        &artefact(vec![-1.5, f64::NAN, -3.0], vec![0.6, f64::NAN, 0.6]),
        "hash".into(),
        None,
    );
    assert!(summary.log_mean_min.is_nan());
    assert!(summary.log_mean_max.is_nan());
    assert!(summary.sigma_max.is_nan());

    let leading = PeriodSummary::new(&artefact(vec![f64::NAN, 1.0], vec![0.5, 0.5]), "hash".into(), None);
    assert!(leading.log_mean_min.is_nan());
    assert_eq!(leading.sigma_max, 0.5);
}
