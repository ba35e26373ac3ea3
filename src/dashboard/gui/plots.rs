use super::choropleth::render_choropleth;
use crate::dashboard::logic::{BarSeries, ChartSpec, NamedColor, OutputId};
use crate::utils::fmt_usd;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

const GROUP_WIDTH: f64 = 0.8;

pub fn color32(color: NamedColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

pub fn render_chart(ui: &mut egui::Ui, output: OutputId, spec: &ChartSpec) {
    ui.label(egui::RichText::new(spec.title()).strong());
    ui.add_space(crate::theme::SPACING_TINY);

    match spec {
        ChartSpec::Bar {
            x_title,
            y_title,
            categories,
            values,
            colors,
            ..
        } => {
            let bars = categories
                .iter()
                .zip(values)
                .zip(colors)
                .enumerate()
                .map(|(i, ((category, &value), &color))| {
                    Bar::new(i as f64, value)
                        .name(category)
                        .fill(color32(color))
                        .width(GROUP_WIDTH)
                })
                .collect();
            let is_count = output == OutputId::JobsByRegion;
            let chart = BarChart::new(spec.title(), bars).element_formatter(Box::new(
                move |bar: &Bar, _: &BarChart| {
                    if is_count {
                        format!("{}\n{} postings", bar.name, bar.value)
                    } else {
                        format!("{}\n{}", bar.name, fmt_usd(bar.value))
                    }
                },
            ));
            show_category_plot(
                ui,
                output,
                x_title,
                y_title,
                categories,
                !is_count,
                false,
                |plot_ui| plot_ui.bar_chart(chart),
            );
        }
        ChartSpec::GroupedBar {
            x_title,
            y_title,
            categories,
            series,
            ..
        } => {
            let charts = grouped_bar_charts(series);
            show_category_plot(ui, output, x_title, y_title, categories, true, true, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
        }
        ChartSpec::Choropleth {
            locations,
            values,
            domain,
            palette,
            colorbar_title,
            ..
        } => {
            render_choropleth(ui, locations, values, domain.as_ref(), *palette, colorbar_title);
        }
    }

    if spec.is_empty() {
        ui.label(
            egui::RichText::new("No postings match the current filters.")
                .weak()
                .small(),
        );
    }
}

/// One `BarChart` per series, offset side by side within each category slot.
fn grouped_bar_charts(series: &[BarSeries]) -> Vec<BarChart> {
    let count = series.len().max(1) as f64;
    let width = GROUP_WIDTH / count;
    series
        .iter()
        .enumerate()
        .map(|(s, BarSeries { name, values, color })| {
            let offset = -GROUP_WIDTH / 2.0 + width * (s as f64 + 0.5);
            let bars = values
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    Bar::new(i as f64 + offset, value)
                        .name(name)
                        .fill(color32(*color))
                        .width(width)
                })
                .collect();
            BarChart::new(name.as_str(), bars)
                .color(color32(*color))
                .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
                    format!("{}\n{}", bar.name, fmt_usd(bar.value))
                }))
        })
        .collect()
}

#[expect(clippy::too_many_arguments)]
fn show_category_plot(
    ui: &mut egui::Ui,
    output: OutputId,
    x_title: &str,
    y_title: &str,
    categories: &[String],
    currency: bool,
    legend: bool,
    add_contents: impl FnOnce(&mut egui_plot::PlotUi<'_>),
) {
    let labels = categories.to_vec();
    let height = crate::theme::CHART_HEIGHT.min(ui.available_height().max(160.0));
    let plot = Plot::new(format!("plot_{output}"))
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .include_y(0.0)
        .x_axis_label(x_title.to_owned())
        .y_axis_label(y_title.to_owned())
        .x_axis_formatter(move |mark, _range| {
            // Only whole slots carry a category label.
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(move |mark, _range| {
            if currency {
                fmt_usd(mark.value)
            } else {
                format!("{:.0}", mark.value)
            }
        });
    let plot = if legend {
        plot.legend(Legend::default())
    } else {
        plot
    };
    plot.show(ui, add_contents);
}
