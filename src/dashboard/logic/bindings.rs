//! Wiring between named controls and the charts that depend on them.
//!
//! Each [`Binding`] ties one output chart to the inputs it reads and to a
//! handler that runs filter → aggregate → chart once. Handlers only see the
//! read-only dataset and the current filter values.

use super::aggregation::{
    count_by_region, mean_salary_by_region, median_salary_by_state, salary_range_by_region,
};
use super::charts::{
    ChartSpec, average_salary_chart, jobs_by_region_chart, median_salary_map, salary_range_chart,
};
use super::dataset::Dataset;
use super::filters::{Filters, apply_filters};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputId {
    MinSalary,
    MaxSalary,
    JobTypes,
    ExperienceLevels,
    StateCodes,
}

impl InputId {
    pub const ALL: [Self; 5] = [
        Self::MinSalary,
        Self::MaxSalary,
        Self::JobTypes,
        Self::ExperienceLevels,
        Self::StateCodes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinSalary => "min-salary-slider",
            Self::MaxSalary => "max-salary-slider",
            Self::JobTypes => "job-type-checklist",
            Self::ExperienceLevels => "experience-level-checklist",
            Self::StateCodes => "state-selector",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutputId {
    JobsByRegion,
    AverageSalaryByRegion,
    SalaryRangeByRegion,
    MedianSalaryMap,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobsByRegion => "jobs-by-region-bar-chart",
            Self::AverageSalaryByRegion => "average-salary-region",
            Self::SalaryRangeByRegion => "salary-range-region",
            Self::MedianSalaryMap => "job-postings-map",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Handler = fn(&Dataset, &Filters) -> Result<ChartSpec>;

#[derive(Clone, Copy)]
pub struct Binding {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    pub handler: Handler,
}

impl Binding {
    pub fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

const REGION_CHART_INPUTS: &[InputId] = &[
    InputId::MinSalary,
    InputId::MaxSalary,
    InputId::JobTypes,
    InputId::ExperienceLevels,
];

const MAP_INPUTS: &[InputId] = &[InputId::StateCodes];

fn render_jobs_by_region(dataset: &Dataset, filters: &Filters) -> Result<ChartSpec> {
    let filtered = apply_filters(dataset, &filters.without_states())?;
    Ok(jobs_by_region_chart(&count_by_region(&filtered)?))
}

fn render_average_salary(dataset: &Dataset, filters: &Filters) -> Result<ChartSpec> {
    let filtered = apply_filters(dataset, &filters.without_states())?;
    Ok(average_salary_chart(&mean_salary_by_region(&filtered)?))
}

fn render_salary_range(dataset: &Dataset, filters: &Filters) -> Result<ChartSpec> {
    let filtered = apply_filters(dataset, &filters.without_states())?;
    Ok(salary_range_chart(&salary_range_by_region(&filtered)?))
}

fn render_median_map(dataset: &Dataset, filters: &Filters) -> Result<ChartSpec> {
    let medians = median_salary_by_state(dataset, filters.state_codes.as_ref())?;
    Ok(median_salary_map(&medians))
}

/// The set of registered bindings.
#[derive(Debug, Clone)]
pub struct Bindings {
    bindings: Vec<Binding>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self::standard()
    }
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// The dashboard's four charts.
    pub fn standard() -> Self {
        Self::empty()
            .bind(OutputId::JobsByRegion, REGION_CHART_INPUTS, render_jobs_by_region)
            .bind(
                OutputId::AverageSalaryByRegion,
                REGION_CHART_INPUTS,
                render_average_salary,
            )
            .bind(
                OutputId::SalaryRangeByRegion,
                REGION_CHART_INPUTS,
                render_salary_range,
            )
            .bind(OutputId::MedianSalaryMap, MAP_INPUTS, render_median_map)
    }

    /// Registers `handler` as the producer of `output`. A later binding for
    /// the same output replaces the earlier one.
    #[must_use]
    pub fn bind(mut self, output: OutputId, inputs: &'static [InputId], handler: Handler) -> Self {
        self.bindings.retain(|b| b.output != output);
        self.bindings.push(Binding {
            output,
            inputs,
            handler,
        });
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    pub fn outputs_for(&self, input: InputId) -> Vec<OutputId> {
        self.bindings
            .iter()
            .filter(|b| b.depends_on(input))
            .map(|b| b.output)
            .collect()
    }

    /// Re-runs every handler bound to `changed`, once each.
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        filters: &Filters,
        changed: InputId,
    ) -> Vec<(OutputId, Result<ChartSpec>)> {
        log::debug!("Input '{changed}' changed");
        self.bindings
            .iter()
            .filter(|b| b.depends_on(changed))
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }

    /// Runs every handler once, e.g. to populate the dashboard at startup.
    pub fn render_all(
        &self,
        dataset: &Dataset,
        filters: &Filters,
    ) -> Vec<(OutputId, Result<ChartSpec>)> {
        self.bindings
            .iter()
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
