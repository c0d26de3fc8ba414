use gmpe_ba08::table::{BA08_ROWS, COLUMNS, COLUMN_COUNT};
use gmpe_ba08::CoefficientTable;
use gmpe_core::{FaultType, Period};

#[test]
fn published_table_lists_every_canonical_period() {
    let table = CoefficientTable::boore_atkinson_2008();
    assert_eq!(table.len(), 23);
    let periods: Vec<Period> = table.periods().collect();
    assert_eq!(periods.first(), Some(&Period::PGV));
    assert_eq!(periods.get(1), Some(&Period::PGA));
    assert_eq!(periods.last().map(|period| period.seconds()), Some(10.0));
    for row in BA08_ROWS.iter() {
        let period = Period::from_seconds(row[0]).unwrap();
        assert!(table.row(period).is_ok(), "missing {period}");
    }
}

#[test]
fn layout_names_every_column() {
    assert_eq!(COLUMNS.len(), COLUMN_COUNT);
    assert_eq!(COLUMNS[0], "T");
    assert_eq!(COLUMNS[COLUMN_COUNT - 1], "SigTM");
}

#[test]
fn shared_constants_are_uniform() {
    let table = CoefficientTable::boore_atkinson_2008();
    for entry in table.entries() {
        let c = &entry.coefficient;
        assert_eq!((c.mref, c.rref, c.vref), (4.5, 1.0, 760.0));
        assert_eq!((c.v1, c.v2), (180.0, 300.0));
        assert_eq!((c.a1, c.pga_low, c.a2), (0.03, 0.06, 0.09));
    }
}

#[test]
fn pga_row_values() {
    let table = CoefficientTable::boore_atkinson_2008();
    let row = table.row(Period::PGA).unwrap();
    assert_eq!(row.intercept(FaultType::Unspecified), -0.53804);
    assert_eq!(row.intercept(FaultType::StrikeSlip), -0.50350);
    assert_eq!(row.intercept(FaultType::Normal), -0.75472);
    assert_eq!(row.intercept(FaultType::Reverse), -0.50970);
    assert_eq!(row.mh, 6.75);
    let sigma = table.sigma(Period::PGA).unwrap();
    assert_eq!(sigma.total(FaultType::Unspecified), 0.566);
    assert_eq!(sigma.total(FaultType::Reverse), 0.564);
    assert_eq!(sigma.inter_event(FaultType::Unspecified), 0.265);
    assert_eq!(sigma.inter_event(FaultType::Normal), 0.260);
}

#[test]
fn untabulated_period_is_rejected() {
    let table = CoefficientTable::boore_atkinson_2008();
    let err = table
        .coefficients(Period::from_seconds(0.06).unwrap())
        .unwrap_err();
    assert_eq!(err.code(), "period-not-found");
    assert_eq!(
        err.info().context.get("period").map(String::as_str),
        Some("0.06")
    );
    assert!(err.info().hint.is_some());
}

#[test]
fn duplicate_rows_are_rejected() {
    let rows = [BA08_ROWS[1], BA08_ROWS[2], BA08_ROWS[2]];
    let err = CoefficientTable::from_raw_rows(&rows).unwrap_err();
    assert_eq!(err.code(), "duplicate-period");
}

#[test]
fn custom_table_requires_pga_row() {
    let err = CoefficientTable::from_raw_rows(&[BA08_ROWS[5]]).unwrap_err();
    assert_eq!(err.code(), "period-not-found");

    let table = CoefficientTable::from_raw_rows(&[BA08_ROWS[1], BA08_ROWS[5]]).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn non_finite_coefficients_are_rejected() {
    let mut row = BA08_ROWS[1];
    row[11] = f64::NAN;
    let err = CoefficientTable::from_raw_rows(&[row]).unwrap_err();
    assert_eq!(err.code(), "malformed-row");
    assert_eq!(err.info().context.get("column").map(String::as_str), Some("c3"));
}

#[test]
fn table_hash_is_stable() {
    let table = CoefficientTable::boore_atkinson_2008();
    let first = table.canonical_hash().unwrap();
    let rebuilt = CoefficientTable::from_raw_rows(&BA08_ROWS).unwrap();
    assert_eq!(first, rebuilt.canonical_hash().unwrap());
    assert_eq!(first.len(), 64);

    let mut altered = BA08_ROWS;
    altered[2][1] += 1e-3;
    let altered = CoefficientTable::from_raw_rows(&altered).unwrap();
    assert_ne!(first, altered.canonical_hash().unwrap());
}

#[test]
fn every_published_row_parses() {
    let rebuilt = CoefficientTable::from_raw_rows(&BA08_ROWS).expect("published rows");
    assert_eq!(rebuilt.len(), BA08_ROWS.len());
    assert_eq!(&rebuilt, CoefficientTable::boore_atkinson_2008());
}
