use crate::dashboard::logic::Filters;
use crate::dashboard::logic::filters::SALARY_SLIDER_MAX;
use crate::error::{JobvizError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "data/processed/cleaned_job_postings.csv";
pub const DEFAULT_CONFIG_FILE: &str = "jobviz.json";
pub const DATA_PATH_ENV: &str = "JOBVIZ_DATA_PATH";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InitialFilters {
    pub min_salary: u32,
    pub max_salary: u32,
    pub job_types: Vec<String>,
    pub experience_levels: Vec<String>,
}

impl Default for InitialFilters {
    fn default() -> Self {
        let filters = Filters::default();
        Self {
            min_salary: filters.min_salary,
            max_salary: filters.max_salary,
            job_types: filters.job_types.into_iter().collect(),
            experience_levels: filters.experience_levels.into_iter().collect(),
        }
    }
}

impl InitialFilters {
    pub fn to_filters(&self) -> Filters {
        Filters::salary_range(self.min_salary, self.max_salary)
            .with_job_types(self.job_types.iter().cloned())
            .with_experience_levels(self.experience_levels.iter().cloned())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "U.S. Job Postings Visualization".to_owned(),
            width: 1400.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub initial_filters: InitialFilters,
    pub window: WindowSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            initial_filters: InitialFilters::default(),
            window: WindowSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Applies the data path overrides; `cli_data` wins over `env_data`.
    #[must_use]
    pub fn with_overrides(mut self, env_data: Option<String>, cli_data: Option<&Path>) -> Self {
        if let Some(path) = env_data.filter(|p| !p.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(path) = cli_data {
            self.data_path = path.to_path_buf();
        }
        self
    }

    /// # Errors
    ///
    /// Rejects initial salary bounds outside the slider range or inverted.
    pub fn validate(&self) -> Result<()> {
        let f = &self.initial_filters;
        if f.min_salary > SALARY_SLIDER_MAX || f.max_salary > SALARY_SLIDER_MAX {
            return Err(JobvizError::Config(format!(
                "initial salary bounds must be within 0..={SALARY_SLIDER_MAX}"
            )));
        }
        if f.min_salary > f.max_salary {
            return Err(JobvizError::Config(format!(
                "initial min_salary {} is above max_salary {}",
                f.min_salary, f.max_salary
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(JobvizError::Config("window size must be positive".to_owned()));
        }
        Ok(())
    }
}

/// Reads a config file. Missing keys take their defaults.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid JSON.
pub fn load_config_from(path: &Path) -> Result<DashboardConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str::<DashboardConfig>(&content)?;
    Ok(config)
}

/// Loads the explicit config file if given (it must exist), otherwise
/// `jobviz.json` from the working directory if present, otherwise defaults.
///
/// # Errors
///
/// Fails if the chosen file is missing or malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(JobvizError::InvalidPath(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return load_config_from(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        log::info!("Using config {DEFAULT_CONFIG_FILE}");
        return load_config_from(default_path);
    }

    Ok(DashboardConfig::default())
}

/// Full startup resolution: file, then `JOBVIZ_DATA_PATH`, then `--data`.
///
/// # Errors
///
/// Fails if the config cannot be loaded or does not validate.
pub fn resolve(config: Option<&Path>, data: Option<&Path>) -> Result<DashboardConfig> {
    let resolved = load_config(config)?.with_overrides(std::env::var(DATA_PATH_ENV).ok(), data);
    resolved.validate()?;
    Ok(resolved)
}
