use crate::dashboard::logic::InputId;
use crate::dashboard::logic::filters::{
    EXPERIENCE_LEVEL_OPTIONS, JOB_TYPE_OPTIONS, SALARY_SLIDER_MAX, SALARY_SLIDER_STEP,
};
use crate::dashboard::model::DashboardModel;
use crate::utils::fmt_usd;
use eframe::egui;
use std::collections::BTreeSet;

const STATE_GRID_COLUMNS: usize = 5;

/// Draws the filter controls and returns the inputs whose value changed
/// this frame, in the order they were touched.
pub fn render_filters(model: &mut DashboardModel, ui: &mut egui::Ui) -> Vec<InputId> {
    let mut changed = Vec::new();

    ui.heading("Filters");
    ui.add_space(crate::theme::SPACING_SMALL);

    crate::theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if salary_slider(ui, "Minimum Salary", &mut model.filters.min_salary) {
            changed.push(InputId::MinSalary);
        }
        ui.add_space(crate::theme::SPACING_TINY);
        if salary_slider(ui, "Maximum Salary", &mut model.filters.max_salary) {
            changed.push(InputId::MaxSalary);
        }
        if model.filters.min_salary > model.filters.max_salary {
            ui.label(
                egui::RichText::new("Minimum is above maximum: no postings can match.")
                    .small()
                    .color(ui.visuals().warn_fg_color),
            );
        }
    });
    ui.add_space(crate::theme::SPACING_SMALL);

    crate::theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Job Type").strong());
        if checklist(ui, &JOB_TYPE_OPTIONS, &mut model.filters.job_types) {
            changed.push(InputId::JobTypes);
        }
        ui.add_space(crate::theme::SPACING_TINY);
        ui.label(egui::RichText::new("Experience Level").strong());
        if checklist(
            ui,
            &EXPERIENCE_LEVEL_OPTIONS,
            &mut model.filters.experience_levels,
        ) {
            changed.push(InputId::ExperienceLevels);
        }
        ui.label(
            egui::RichText::new("Leave a group unchecked to include every option.")
                .weak()
                .small(),
        );
    });
    ui.add_space(crate::theme::SPACING_SMALL);

    crate::theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if state_selector(ui, model) {
            changed.push(InputId::StateCodes);
        }
    });

    changed
}

fn salary_slider(ui: &mut egui::Ui, label: &str, value: &mut u32) -> bool {
    ui.label(egui::RichText::new(label).strong());
    ui.add(
        egui::Slider::new(value, 0..=SALARY_SLIDER_MAX)
            .step_by(f64::from(SALARY_SLIDER_STEP))
            .custom_formatter(|v, _| fmt_usd(v)),
    )
    .changed()
}

fn checklist(
    ui: &mut egui::Ui,
    options: &[(&str, &str)],
    selected: &mut BTreeSet<String>,
) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for &(option, label) in options {
            let mut checked = selected.contains(option);
            if ui.checkbox(&mut checked, label).changed() {
                if checked {
                    selected.insert(option.to_owned());
                } else {
                    selected.remove(option);
                }
                changed = true;
            }
        }
    });
    changed
}

fn state_selector(ui: &mut egui::Ui, model: &mut DashboardModel) -> bool {
    let mut changed = false;
    ui.label(egui::RichText::new("Map States").strong());

    let mut enabled = model.filters.state_codes.is_some();
    if ui
        .checkbox(&mut enabled, "Limit map to selected states")
        .changed()
    {
        model.set_state_filter_enabled(enabled);
        changed = true;
    }

    let options = &model.state_options;
    let Some(selected) = model.filters.state_codes.as_mut() else {
        return changed;
    };

    ui.horizontal(|ui| {
        if ui.small_button("All").clicked() {
            *selected = options.iter().cloned().collect();
            changed = true;
        }
        if ui.small_button("None").clicked() {
            selected.clear();
            changed = true;
        }
        ui.label(
            egui::RichText::new(format!("{} selected", selected.len()))
                .weak()
                .small(),
        );
    });

    egui::Grid::new("state_selector_grid")
        .num_columns(STATE_GRID_COLUMNS)
        .spacing([4.0, 2.0])
        .show(ui, |ui| {
            for (i, code) in options.iter().enumerate() {
                let mut checked = selected.contains(code);
                if ui.checkbox(&mut checked, code.as_str()).changed() {
                    if checked {
                        selected.insert(code.clone());
                    } else {
                        selected.remove(code);
                    }
                    changed = true;
                }
                if (i + 1) % STATE_GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    changed
}
