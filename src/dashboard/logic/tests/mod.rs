#![expect(clippy::unwrap_used, clippy::indexing_slicing)]

mod filters;

use super::dataset::*;
use anyhow::Result;
use polars::prelude::*;

/// One fixture row: region, state, pay period, min, max, work type, experience.
pub(super) type Row<'a> = (
    &'a str,
    &'a str,
    &'a str,
    Option<f64>,
    Option<f64>,
    &'a str,
    &'a str,
);

pub(super) fn dataset(rows: &[Row<'_>]) -> Result<Dataset> {
    let df = df!(
        REGION => rows.iter().map(|r| r.0).collect::<Vec<_>>(),
        STATE_CODE => rows.iter().map(|r| r.1).collect::<Vec<_>>(),
        PAY_PERIOD => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        MIN_SALARY => rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        MAX_SALARY => rows.iter().map(|r| r.4).collect::<Vec<_>>(),
        WORK_TYPE => rows.iter().map(|r| r.5).collect::<Vec<_>>(),
        EXPERIENCE_LEVEL => rows.iter().map(|r| r.6).collect::<Vec<_>>()
    )?;
    Ok(Dataset::from_frame(df)?)
}

/// A small but varied table covering every region, pay period and category.
pub(super) fn sample() -> Result<Dataset> {
    dataset(&[
        ("West", "CA", "YEARLY", Some(40_000.0), Some(60_000.0), "Full-time", "Entry level"),
        ("West", "WA", "YEARLY", Some(80_000.0), Some(95_000.0), "Full-time", "Mid-Senior level"),
        ("West", "CA", "HOURLY", Some(20.0), Some(30.0), "Part-time", "Entry level"),
        ("Northeast", "NY", "YEARLY", Some(50_000.0), Some(70_000.0), "Contract", "Mid-Senior level"),
        ("Northeast", "MA", "YEARLY", Some(35_000.0), Some(45_000.0), "Full-time", "Entry level"),
        ("Southeast", "FL", "YEARLY", Some(30_000.0), Some(50_000.0), "Part-time", "Entry level"),
        ("Southeast", "GA", "MONTHLY", Some(3_000.0), Some(4_000.0), "Full-time", "Entry level"),
        ("Midwest", "OH", "YEARLY", Some(45_000.0), Some(65_000.0), "Full-time", "Mid-Senior level"),
        ("Southwest", "TX", "YEARLY", Some(60_000.0), Some(90_000.0), "Contract", "Entry level"),
        ("Southwest", "AZ", "YEARLY", None, Some(55_000.0), "Full-time", "Entry level"),
    ])
}

pub(super) fn strings(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_owned())
        .collect()
}

pub(super) fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn test_sample_fixture_loads() -> Result<()> {
    let ds = sample()?;
    assert_eq!(ds.len(), 10);
    assert_eq!(
        ds.regions()?,
        vec!["Midwest", "Northeast", "Southeast", "Southwest", "West"]
    );
    assert_eq!(ds.state_codes()?.len(), 9);
    // Null minimum salary propagates into the derived average.
    assert_eq!(floats(ds.frame(), AVG_SALARY)[9], None);
    assert_eq!(floats(ds.frame(), AVG_SALARY)[0], Some(50_000.0));
    Ok(())
}
