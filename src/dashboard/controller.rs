use super::logic::{Bindings, ChartSpec, Dataset, InputId, OutputId};
use super::model::DashboardModel;
use crate::error::Result;
use std::sync::Arc;

/// Owns the read-only dataset and the bindings; applies recomputed charts to
/// the model.
pub struct DashboardController {
    dataset: Arc<Dataset>,
    bindings: Bindings,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_bindings(dataset, Bindings::standard())
    }

    pub fn with_bindings(dataset: Arc<Dataset>, bindings: Bindings) -> Self {
        Self { dataset, bindings }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Populates every chart from the current filters.
    pub fn render_all(&self, model: &mut DashboardModel) {
        let start = std::time::Instant::now();
        let updates = self.bindings.render_all(&self.dataset, &model.filters);
        Self::apply(model, updates);
        model.last_duration = Some(start.elapsed());
    }

    /// Recomputes the charts bound to `input` after its control changed.
    pub fn on_input(&self, model: &mut DashboardModel, input: InputId) {
        let start = std::time::Instant::now();
        let updates = self.bindings.dispatch(&self.dataset, &model.filters, input);
        Self::apply(model, updates);
        model.last_duration = Some(start.elapsed());
    }

    fn apply(model: &mut DashboardModel, updates: Vec<(OutputId, Result<ChartSpec>)>) {
        let mut failures = Vec::new();
        for (output, chart) in updates {
            match chart {
                Ok(spec) => {
                    model.charts.insert(output, spec);
                }
                Err(e) => {
                    // Keep showing the previous chart for this output.
                    log::error!("Failed to update {output}: {e}");
                    failures.push(format!("{output}: {e}"));
                }
            }
        }

        model.status = if failures.is_empty() {
            String::new()
        } else {
            format!("Update failed: {}", failures.join("; "))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::logic::Filters;
    use crate::error::JobvizError;
    use polars::prelude::*;

    fn dataset() -> Arc<Dataset> {
        let df = df!(
            "region" => &["West", "Midwest"],
            "state_code" => &["CA", "OH"],
            "pay_period" => &["YEARLY", "YEARLY"],
            "min_salary" => &[40_000.0, 45_000.0],
            "max_salary" => &[60_000.0, 65_000.0],
            "formatted_work_type" => &["Full-time", "Full-time"],
            "formatted_experience_level" => &["Entry level", "Entry level"]
        )
        .expect("fixture frame");
        Arc::new(Dataset::from_frame(df).expect("fixture dataset"))
    }

    #[test]
    fn test_render_all_fills_every_chart() {
        let controller = DashboardController::new(dataset());
        let mut model = DashboardModel::new(Filters::default(), vec!["CA".into(), "OH".into()]);
        controller.render_all(&mut model);
        assert_eq!(model.charts.len(), 4);
        assert!(model.status.is_empty());
        assert!(model.last_duration.is_some());
    }

    #[test]
    fn test_failed_handler_keeps_previous_chart() {
        let bindings =
            Bindings::standard().bind(OutputId::JobsByRegion, &[InputId::MinSalary], |_, _| {
                Err(JobvizError::DataProcessing("boom".to_owned()))
            });
        let controller = DashboardController::new(dataset());
        let failing = DashboardController::with_bindings(dataset(), bindings);

        let mut model = DashboardModel::new(Filters::default(), Vec::new());
        controller.render_all(&mut model);
        let before = model.chart(OutputId::JobsByRegion).cloned();

        failing.on_input(&mut model, InputId::MinSalary);
        assert_eq!(model.chart(OutputId::JobsByRegion).cloned(), before);
        assert!(model.status.contains("jobs-by-region-bar-chart"));
    }

    #[test]
    fn test_enabling_state_filter_selects_every_state() {
        let mut model = DashboardModel::new(Filters::default(), vec!["CA".into(), "OH".into()]);
        model.set_state_filter_enabled(true);
        assert_eq!(model.filters.state_codes.as_ref().map(|s| s.len()), Some(2));
        model.set_state_filter_enabled(false);
        assert!(model.filters.state_codes.is_none());
    }
}
