use super::logic::{ChartSpec, Filters, OutputId};
use std::collections::BTreeMap;

/// Everything the dashboard displays: current control values, the options
/// offered by the state selector, and the latest chart per output.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub filters: Filters,
    pub state_options: Vec<String>,
    pub charts: BTreeMap<OutputId, ChartSpec>,
    pub status: String,
    pub last_duration: Option<std::time::Duration>,
}

impl DashboardModel {
    pub fn new(filters: Filters, state_options: Vec<String>) -> Self {
        Self {
            filters,
            state_options,
            ..Default::default()
        }
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.charts.get(&output)
    }

    /// Turns the state selector on (all known states selected) or off.
    pub fn set_state_filter_enabled(&mut self, enabled: bool) {
        self.filters.state_codes = if enabled {
            Some(self.state_options.iter().cloned().collect())
        } else {
            None
        };
    }
}
