use super::dataset::{Dataset, EXPERIENCE_LEVEL, MAX_SALARY, MIN_SALARY, STATE_CODE, WORK_TYPE};
use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SALARY_SLIDER_MAX: u32 = 100_000;
pub const SALARY_SLIDER_STEP: u32 = 1_000;

/// Checklist choices as `(value in the dataset, label shown)` pairs.
pub const JOB_TYPE_OPTIONS: [(&str, &str); 3] = [
    ("Full-time", "Full-time"),
    ("Part-time", "Part-time"),
    ("Contract", "Contract"),
];
pub const EXPERIENCE_LEVEL_OPTIONS: [(&str, &str); 2] = [
    ("Entry level", "Entry Level"),
    ("Mid-Senior level", "Mid-Senior Level"),
];

/// Criteria for the filter pipeline.
///
/// Empty `job_types` / `experience_levels` sets disable that filter rather
/// than excluding every row. `state_codes` has no such exception: `None`
/// disables it, `Some(empty)` matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub min_salary: u32,
    pub max_salary: u32,
    pub job_types: BTreeSet<String>,
    pub experience_levels: BTreeSet<String>,
    pub state_codes: Option<BTreeSet<String>>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            min_salary: 30_000,
            max_salary: 70_000,
            job_types: BTreeSet::from(["Full-time".to_owned()]),
            experience_levels: BTreeSet::from(["Entry level".to_owned()]),
            state_codes: None,
        }
    }
}

impl Filters {
    /// Salary bounds only; every category passes.
    pub fn salary_range(min_salary: u32, max_salary: u32) -> Self {
        Self {
            min_salary,
            max_salary,
            job_types: BTreeSet::new(),
            experience_levels: BTreeSet::new(),
            state_codes: None,
        }
    }

    pub fn with_job_types<I, S>(mut self, job_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job_types = job_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.experience_levels = levels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_state_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// The same criteria with the state selection dropped. The region charts
    /// are never narrowed by the map's state selector.
    pub fn without_states(&self) -> Self {
        Self {
            state_codes: None,
            ..self.clone()
        }
    }

    /// Combined predicate for every active criterion.
    pub fn predicate(&self) -> Expr {
        let mut predicate = col(MIN_SALARY)
            .gt_eq(lit(f64::from(self.min_salary)))
            .and(col(MAX_SALARY).lt_eq(lit(f64::from(self.max_salary))));

        if !self.job_types.is_empty() {
            predicate = predicate.and(membership(WORK_TYPE, &self.job_types));
        }
        if !self.experience_levels.is_empty() {
            predicate = predicate.and(membership(EXPERIENCE_LEVEL, &self.experience_levels));
        }
        if let Some(codes) = &self.state_codes {
            predicate = predicate.and(membership(STATE_CODE, codes));
        }
        predicate
    }
}

/// `column ∈ values`. An empty set matches no row; nulls never match.
pub fn membership(column: &str, values: &BTreeSet<String>) -> Expr {
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let set = Series::new(column.into(), values);
    col(column).is_in(lit(set))
}

/// Runs the filter pipeline: returns a new frame holding the matching rows.
///
/// # Errors
///
/// Only fails if the query engine does; an empty result is `Ok`.
pub fn apply_filters(dataset: &Dataset, filters: &Filters) -> Result<DataFrame> {
    let filtered = dataset.lazy().filter(filters.predicate()).collect()?;
    log::debug!(
        "Filter matched {} of {} postings",
        filtered.height(),
        dataset.len()
    );
    Ok(filtered)
}
