use gmpe_core::{FaultType, Period};
use proptest::prelude::*;

const CANONICAL: [&str; 23] = [
    "-1.0", "0.0", "0.01", "0.02", "0.03", "0.05", "0.075", "0.10", "0.15", "0.20", "0.25",
    "0.30", "0.40", "0.50", "0.75", "1.00", "1.50", "2.00", "3.00", "4.00", "5.00", "7.50",
    "10.0",
];

#[test]
fn canonical_keys_round_trip() {
    for key in CANONICAL {
        let period: Period = key.parse().expect("canonical period");
        let seconds: f64 = key.parse().expect("float");
        assert_eq!(period.seconds(), seconds, "{key}");
        assert_eq!(Period::from_seconds(seconds).unwrap(), period);
        let reparsed: Period = period.to_string().parse().expect("display reparses");
        assert_eq!(reparsed, period);
    }
}

#[test]
fn display_uses_table_precision() {
    assert_eq!(Period::from_seconds(0.01).unwrap().to_string(), "0.01");
    assert_eq!(Period::from_seconds(0.075).unwrap().to_string(), "0.075");
    assert_eq!(Period::from_seconds(1.0).unwrap().to_string(), "1.00");
    assert_eq!(Period::PGV.to_string(), "-1.00");
}

#[test]
fn named_intensity_measures() {
    assert_eq!("PGA".parse::<Period>().unwrap(), Period::PGA);
    assert_eq!("pgv".parse::<Period>().unwrap(), Period::PGV);
    assert_eq!(Period::PGA.label(), "PGA");
    assert_eq!(Period::PGV.units(), "cm/s");
    assert_eq!(Period::from_seconds(0.2).unwrap().label(), "SA(0.20)");
    assert_eq!(Period::from_seconds(0.2).unwrap().units(), "g");
}

#[test]
fn undefined_periods_are_rejected() {
    assert!(Period::from_seconds(-0.5).is_err());
    assert!(Period::from_seconds(f64::NAN).is_err());
    assert!(Period::from_seconds(0.0125).is_err());
}

#[test]
fn period_serializes_as_seconds() {
    let period = Period::from_seconds(0.075).unwrap();
    let json = serde_json::to_string(&period).unwrap();
    assert_eq!(json, "0.075");
    let decoded: Period = serde_json::from_str("3.0").unwrap();
    assert_eq!(decoded, Period::from_seconds(3.0).unwrap());
    assert!(serde_json::from_str::<Period>("-2.0").is_err());
}

#[test]
fn fault_codes_round_trip() {
    for fault in FaultType::ALL {
        assert_eq!(FaultType::from_code(fault.code()).unwrap(), fault);
        assert_eq!(fault.as_str().parse::<FaultType>().unwrap(), fault);
    }
    assert_eq!("strike_slip".parse::<FaultType>().unwrap(), FaultType::StrikeSlip);
    assert_eq!("2".parse::<FaultType>().unwrap(), FaultType::StrikeSlip);
    assert!("oblique".parse::<FaultType>().is_err());
    assert!(!FaultType::Unspecified.is_specified());
}

proptest! {
    #[test]
    fn millisecond_periods_round_trip(millis in 0i32..20_000) {
        let seconds = f64::from(millis) / 1000.0;
        let period = Period::from_seconds(seconds).unwrap();
        prop_assert_eq!(period.as_millis(), millis);
        let reparsed: Period = period.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, period);
    }
}
