//! Renderer-agnostic chart descriptions.
//!
//! The aggregation results are turned into [`ChartSpec`] values here; the GUI
//! and the `charts` CLI command only ever consume these specs.

use super::aggregation::{RegionCount, RegionMean, RegionRange, StateMedians};
use super::colors::{NamedColor, Palette, region_color};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: NamedColor,
}

/// Value range mapped onto the choropleth palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
}

impl ColorDomain {
    /// Position of `value` inside the domain, in `[0, 1]`. A degenerate
    /// domain (single value) maps everything to the middle of the palette.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar {
        title: String,
        x_title: String,
        y_title: String,
        categories: Vec<String>,
        values: Vec<f64>,
        colors: Vec<NamedColor>,
    },
    GroupedBar {
        title: String,
        x_title: String,
        y_title: String,
        categories: Vec<String>,
        series: Vec<BarSeries>,
    },
    Choropleth {
        title: String,
        locations: Vec<String>,
        values: Vec<f64>,
        domain: Option<ColorDomain>,
        palette: Palette,
        colorbar_title: String,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            Self::Bar { title, .. }
            | Self::GroupedBar { title, .. }
            | Self::Choropleth { title, .. } => title,
        }
    }

    /// Number of categories (bars or states) in the chart.
    pub fn len(&self) -> usize {
        match self {
            Self::Bar { categories, .. } | Self::GroupedBar { categories, .. } => categories.len(),
            Self::Choropleth { locations, .. } => locations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn jobs_by_region_chart(counts: &[RegionCount]) -> ChartSpec {
    ChartSpec::Bar {
        title: "Number of Job Postings by Region".to_owned(),
        x_title: "Region".to_owned(),
        y_title: "Number of Job Postings".to_owned(),
        categories: counts.iter().map(|c| c.region.clone()).collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
        colors: counts.iter().map(|c| region_color(&c.region)).collect(),
    }
}

pub fn average_salary_chart(means: &[RegionMean]) -> ChartSpec {
    ChartSpec::Bar {
        title: "Average Salary by Region".to_owned(),
        x_title: "Region".to_owned(),
        y_title: "Average Salary (USD)".to_owned(),
        categories: means.iter().map(|m| m.region.clone()).collect(),
        values: means.iter().map(|m| m.mean_salary).collect(),
        colors: means.iter().map(|m| region_color(&m.region)).collect(),
    }
}

pub fn salary_range_chart(ranges: &[RegionRange]) -> ChartSpec {
    ChartSpec::GroupedBar {
        title: "Min / Max Salary by Region".to_owned(),
        x_title: "Region".to_owned(),
        y_title: "Salary (USD)".to_owned(),
        categories: ranges.iter().map(|r| r.region.clone()).collect(),
        series: vec![
            BarSeries {
                name: "Min Salary".to_owned(),
                values: ranges.iter().map(|r| r.mean_min_salary).collect(),
                color: NamedColor::SkyBlue,
            },
            BarSeries {
                name: "Max Salary".to_owned(),
                values: ranges.iter().map(|r| r.mean_max_salary).collect(),
                color: NamedColor::Navy,
            },
        ],
    }
}

pub fn median_salary_map(medians: &StateMedians) -> ChartSpec {
    ChartSpec::Choropleth {
        title: "2023 US Job Postings by State".to_owned(),
        locations: medians.medians.keys().cloned().collect(),
        values: medians.medians.values().copied().collect(),
        domain: medians.domain().map(|(min, max)| ColorDomain { min, max }),
        palette: Palette::Viridis,
        colorbar_title: "USD".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_by_region_chart_colors_follow_regions() {
        let counts = vec![
            RegionCount {
                region: "Southwest".to_owned(),
                count: 4,
            },
            RegionCount {
                region: "Atlantis".to_owned(),
                count: 1,
            },
        ];
        let ChartSpec::Bar { colors, values, .. } = jobs_by_region_chart(&counts) else {
            panic!("expected a bar chart");
        };
        assert_eq!(colors, vec![NamedColor::Orange, NamedColor::Gray]);
        assert_eq!(values, vec![4.0, 1.0]);
    }

    #[test]
    fn test_empty_map_has_no_domain() {
        let spec = median_salary_map(&StateMedians::default());
        assert!(spec.is_empty());
        assert!(matches!(spec, ChartSpec::Choropleth { domain: None, .. }));
    }

    #[test]
    fn test_chart_spec_serializes_with_kind_tag() {
        let spec = jobs_by_region_chart(&[]);
        let json = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["title"], "Number of Job Postings by Region");
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let domain = ColorDomain {
            min: 80_000.0,
            max: 80_000.0,
        };
        assert!((domain.normalize(80_000.0) - 0.5).abs() < f64::EPSILON);
    }
}
