pub mod aggregation;
pub mod bindings;
pub mod charts;
pub mod colors;
pub mod dataset;
pub mod filters;

pub use aggregation::{
    RegionCount, RegionMean, RegionRange, StateMedians, count_by_region, mean_salary_by_region,
    median_salary_by_state, salary_range_by_region,
};
pub use bindings::{Binding, Bindings, InputId, OutputId};
pub use charts::{BarSeries, ChartSpec, ColorDomain};
pub use colors::{NamedColor, Palette, region_color};
pub use dataset::{Dataset, REQUIRED_COLUMNS};
pub use filters::{Filters, apply_filters};

#[cfg(test)]
mod tests;
