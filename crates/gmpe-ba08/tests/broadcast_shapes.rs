use gmpe_ba08::{distribution, fault_types_from_codes, BooreAtkinson2008, CoefficientTable};
use gmpe_core::{FaultType, GroundMotionInputs, GroundMotionModel, Period};
use ndarray::{arr1, arr2, ArrayD, IxDyn};

fn evaluate(
    mag: ArrayD<f64>,
    distance: ArrayD<f64>,
    vs30: ArrayD<f64>,
    fault: ArrayD<FaultType>,
) -> Result<(ArrayD<f64>, ArrayD<f64>), gmpe_core::GmpeError> {
    let table = CoefficientTable::boore_atkinson_2008();
    let period = Period::from_seconds(0.2).unwrap();
    distribution(
        &mag,
        &distance,
        &vs30,
        &table.coefficients(period).unwrap(),
        table.sigma(period).unwrap(),
        &fault,
    )
}

#[test]
fn one_dimensional_inputs_broadcast_against_scalars() {
    let mag = arr1(&[5.0, 6.0, 7.0]).into_dyn();
    let distance = ArrayD::from_elem(IxDyn(&[]), 20.0);
    let vs30 = arr1(&[400.0]).into_dyn();
    let fault = ArrayD::from_elem(IxDyn(&[1]), FaultType::Normal);
    let (log_mean, sigma) = evaluate(mag, distance, vs30, fault).unwrap();
    assert_eq!(log_mean.shape(), &[3]);
    assert_eq!(sigma.shape(), &[3]);
    assert!(log_mean[[0]] < log_mean[[1]]);
}

#[test]
fn column_and_row_vectors_form_a_grid() {
    let mag = arr2(&[[5.0], [6.0]]).into_dyn();
    let distance = arr2(&[[10.0, 30.0, 90.0]]).into_dyn();
    let vs30 = ArrayD::from_elem(IxDyn(&[1, 1]), 760.0);
    let fault = ArrayD::from_elem(IxDyn(&[1, 1]), FaultType::Reverse);
    let (log_mean, _) = evaluate(mag, distance, vs30, fault).unwrap();
    assert_eq!(log_mean.shape(), &[2, 3]);
    for i in 0..2 {
        assert!(log_mean[[i, 0]] > log_mean[[i, 1]]);
        assert!(log_mean[[i, 1]] > log_mean[[i, 2]]);
    }
}

#[test]
fn per_element_fault_types_select_per_element_sigma() {
    let codes = arr1(&[0_i64, 1, 2, 3]).into_dyn();
    let fault = fault_types_from_codes(&codes).unwrap();
    let scalar = |value: f64| ArrayD::from_elem(IxDyn(&[1]), value);
    let (log_mean, sigma) = evaluate(scalar(6.0), scalar(15.0), scalar(760.0), fault).unwrap();
    assert_eq!(log_mean.shape(), &[4]);
    let sigma_row = CoefficientTable::boore_atkinson_2008()
        .sigma(Period::from_seconds(0.2).unwrap())
        .unwrap();
    assert_eq!(sigma[[0]], sigma_row.sigma_tm);
    assert_eq!(sigma[[2]], sigma_row.sigma_tm);
    assert_eq!(sigma[[3]], sigma_row.sigma_tu);
}

#[test]
fn incompatible_shapes_are_reported() {
    let mag = arr1(&[5.0, 6.0]).into_dyn();
    let distance = arr1(&[10.0, 20.0, 30.0]).into_dyn();
    let vs30 = arr1(&[760.0]).into_dyn();
    let fault = ArrayD::from_elem(IxDyn(&[1]), FaultType::StrikeSlip);
    let err = evaluate(mag, distance, vs30, fault).unwrap_err();
    assert_eq!(err.code(), "broadcast-mismatch");
    assert_eq!(
        err.info().context.get("shape.magnitude").map(String::as_str),
        Some("(2)")
    );
    assert_eq!(
        err.info().context.get("shape.distance").map(String::as_str),
        Some("(3)")
    );
}

#[test]
fn trait_evaluation_matches_direct_call() {
    let model = BooreAtkinson2008::new();
    let inputs =
        GroundMotionInputs::grid(&[5.0, 6.5], &[10.0, 50.0], &[300.0, 760.0], FaultType::Unspecified)
            .unwrap();
    let period = Period::from_seconds(0.2).unwrap();
    let result = model.distribution(period, &inputs).unwrap();
    assert_eq!(result.shape(), &[2, 2, 2]);
    let (direct, _) = evaluate(
        inputs.magnitude.clone(),
        inputs.distance.clone(),
        inputs.vs30.clone(),
        inputs.fault_type.clone(),
    )
    .unwrap();
    assert_eq!(result.log_mean, direct);
    assert_eq!(model.periods().len(), 23);
    assert!(model.descriptor().matches("Boore_08"));
}
