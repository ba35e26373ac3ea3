//! The four reducers behind the dashboard charts.
//!
//! Each takes an already-filtered frame (or, for the map, the dataset plus a
//! state selection) and returns plain typed rows. Groups whose aggregate is
//! null, i.e. regions or states with no usable salary rows, are omitted
//! rather than zero-filled.

use super::dataset::{
    AVG_SALARY, Dataset, MAX_SALARY, MIN_SALARY, PAY_PERIOD, REGION, STATE_CODE,
};
use super::filters::membership;
use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const YEARLY: &str = "YEARLY";

const COUNT: &str = "count";
const MEAN_SALARY: &str = "mean_salary";
const MEAN_MIN_SALARY: &str = "mean_min_salary";
const MEAN_MAX_SALARY: &str = "mean_max_salary";
const MEDIAN_MAX_SALARY: &str = "median_max_salary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMean {
    pub region: String,
    pub mean_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRange {
    pub region: String,
    pub mean_min_salary: f64,
    pub mean_max_salary: f64,
}

/// Median maximum salary per state, with the color-scale domain of the
/// emitted values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMedians {
    pub medians: BTreeMap<String, f64>,
}

impl StateMedians {
    /// `[min, max]` over the emitted medians, `None` when nothing was emitted.
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.medians.values().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.medians.is_empty()
    }
}

fn descending(column: &str) -> (PlSmallStr, SortMultipleOptions) {
    (
        column.into(),
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_maintain_order(true),
    )
}

fn grouped_by_region(filtered: &DataFrame) -> LazyGroupBy {
    filtered
        .clone()
        .lazy()
        .filter(col(REGION).is_not_null())
        .group_by_stable([col(REGION)])
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let values = df.column(name)?.as_materialized_series().str()?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or_default().to_owned())
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = df.column(name)?.as_materialized_series().f64()?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Posting counts per region, largest first. Ties keep first-seen order.
///
/// # Errors
///
/// Fails only if the query engine does.
pub fn count_by_region(filtered: &DataFrame) -> Result<Vec<RegionCount>> {
    let (by, options) = descending(COUNT);
    let out = grouped_by_region(filtered)
        .agg([len().cast(DataType::UInt64).alias(COUNT)])
        .sort([by], options)
        .collect()?;

    let regions = string_column(&out, REGION)?;
    let counts = out.column(COUNT)?.as_materialized_series().u64()?;
    Ok(regions
        .into_iter()
        .zip(counts.into_iter())
        .map(|(region, count)| RegionCount {
            region,
            count: count.unwrap_or(0),
        })
        .collect())
}

/// Mean of the per-posting average salary for each region, highest first.
///
/// # Errors
///
/// Fails only if the query engine does.
pub fn mean_salary_by_region(filtered: &DataFrame) -> Result<Vec<RegionMean>> {
    let (by, options) = descending(MEAN_SALARY);
    let out = grouped_by_region(filtered)
        .agg([col(AVG_SALARY).mean().alias(MEAN_SALARY)])
        .filter(col(MEAN_SALARY).is_not_null())
        .sort([by], options)
        .collect()?;

    let regions = string_column(&out, REGION)?;
    let means = float_column(&out, MEAN_SALARY)?;
    Ok(regions
        .into_iter()
        .zip(means)
        .map(|(region, mean_salary)| RegionMean {
            region,
            mean_salary,
        })
        .collect())
}

/// Mean minimum and mean maximum salary for each region, ordered by mean
/// maximum salary, highest first.
///
/// # Errors
///
/// Fails only if the query engine does.
pub fn salary_range_by_region(filtered: &DataFrame) -> Result<Vec<RegionRange>> {
    let (by, options) = descending(MEAN_MAX_SALARY);
    let out = grouped_by_region(filtered)
        .agg([
            col(MIN_SALARY).mean().alias(MEAN_MIN_SALARY),
            col(MAX_SALARY).mean().alias(MEAN_MAX_SALARY),
        ])
        .filter(
            col(MEAN_MIN_SALARY)
                .is_not_null()
                .and(col(MEAN_MAX_SALARY).is_not_null()),
        )
        .sort([by], options)
        .collect()?;

    let regions = string_column(&out, REGION)?;
    let mins = float_column(&out, MEAN_MIN_SALARY)?;
    let maxs = float_column(&out, MEAN_MAX_SALARY)?;
    Ok(regions
        .into_iter()
        .zip(mins.into_iter().zip(maxs))
        .map(|(region, (mean_min_salary, mean_max_salary))| RegionRange {
            region,
            mean_min_salary,
            mean_max_salary,
        })
        .collect())
}

/// Median maximum salary per state over yearly-paid postings only.
///
/// The `YEARLY` restriction is applied before `state_codes`, so hourly or
/// monthly rows can never reach the map whatever the selection.
///
/// # Errors
///
/// Fails only if the query engine does.
pub fn median_salary_by_state(
    dataset: &Dataset,
    state_codes: Option<&BTreeSet<String>>,
) -> Result<StateMedians> {
    let mut lf = dataset
        .lazy()
        .filter(col(PAY_PERIOD).eq(lit(YEARLY)))
        .filter(col(STATE_CODE).is_not_null());
    if let Some(codes) = state_codes {
        lf = lf.filter(membership(STATE_CODE, codes));
    }

    let out = lf
        .group_by_stable([col(STATE_CODE)])
        .agg([col(MAX_SALARY).median().alias(MEDIAN_MAX_SALARY)])
        .filter(col(MEDIAN_MAX_SALARY).is_not_null())
        .collect()?;

    let states = string_column(&out, STATE_CODE)?;
    let medians = float_column(&out, MEDIAN_MAX_SALARY)?;
    Ok(StateMedians {
        medians: states.into_iter().zip(medians).collect(),
    })
}
