use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use jobviz::config::DashboardConfig;
use jobviz::dashboard::logic::{Bindings, Dataset, Filters, OutputId};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobviz", about = "U.S. job postings dashboard")]
pub struct Cli {
    /// Path to the postings CSV (overrides config and JOBVIZ_DATA_PATH)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to a JSON config file. Defaults to ./jobviz.json when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute every chart for the given filters and print them as JSON
    Charts(ChartsArgs),
    /// Print the row count and the regions and states present in the dataset
    Columns,
}

#[derive(Args, Debug)]
pub struct ChartsArgs {
    /// Lower salary bound (inclusive)
    #[arg(long, default_value_t = 0)]
    pub min_salary: u32,

    /// Upper salary bound (inclusive)
    #[arg(long, default_value_t = 100_000)]
    pub max_salary: u32,

    /// Work type to keep; repeat for several. None keeps every type.
    #[arg(long = "job-type")]
    pub job_types: Vec<String>,

    /// Experience level to keep; repeat for several. None keeps every level.
    #[arg(long = "experience-level")]
    pub experience_levels: Vec<String>,

    /// Restrict the median salary map to these state codes
    #[arg(long = "state")]
    pub states: Vec<String>,
}

impl ChartsArgs {
    /// Without any `--state` the map stays unrestricted.
    pub fn to_filters(&self) -> Filters {
        let filters = Filters::salary_range(self.min_salary, self.max_salary)
            .with_job_types(self.job_types.iter().cloned())
            .with_experience_levels(self.experience_levels.iter().cloned());
        if self.states.is_empty() {
            filters
        } else {
            filters.with_state_codes(self.states.iter().cloned())
        }
    }
}

pub fn run_command(command: Commands, config: &DashboardConfig) -> Result<()> {
    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;

    match command {
        Commands::Charts(args) => handle_charts(&dataset, &args.to_filters()),
        Commands::Columns => handle_columns(&dataset),
    }
}

fn handle_charts(dataset: &Dataset, filters: &Filters) -> Result<()> {
    let mut charts = BTreeMap::new();
    for (output, chart) in Bindings::standard().render_all(dataset, filters) {
        let chart = chart.with_context(|| format!("Failed to compute {output}"))?;
        charts.insert(OutputId::as_str(output), chart);
    }
    println!("{}", serde_json::to_string_pretty(&charts)?);
    Ok(())
}

fn handle_columns(dataset: &Dataset) -> Result<()> {
    println!("rows: {}", dataset.len());
    println!("regions: {}", dataset.regions()?.join(", "));
    println!("states: {}", dataset.state_codes()?.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::collections::BTreeSet;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    fn charts_args(argv: &[&str]) -> ChartsArgs {
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        match cli.command {
            Some(Commands::Charts(args)) => args,
            _ => panic!("expected the charts subcommand"),
        }
    }

    #[test]
    fn test_charts_without_state_leaves_map_unrestricted() {
        let filters = charts_args(&["jobviz", "charts", "--job-type", "Full-time"]).to_filters();
        assert_eq!(filters.min_salary, 0);
        assert_eq!(filters.max_salary, 100_000);
        assert!(filters.job_types.contains("Full-time"));
        assert!(filters.experience_levels.is_empty());
        assert!(filters.state_codes.is_none());
    }

    #[test]
    fn test_charts_with_states_restricts_map() {
        let filters = charts_args(&[
            "jobviz",
            "charts",
            "--min-salary",
            "40000",
            "--state",
            "CA",
            "--state",
            "NY",
        ])
        .to_filters();
        assert_eq!(filters.min_salary, 40_000);
        assert_eq!(
            filters.state_codes,
            Some(BTreeSet::from(["CA".to_owned(), "NY".to_owned()]))
        );
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["jobviz", "columns", "--data", "postings.csv"])
            .expect("arguments should parse");
        assert_eq!(cli.data, Some(PathBuf::from("postings.csv")));
        assert!(matches!(cli.command, Some(Commands::Columns)));
    }

    #[test]
    fn test_no_subcommand_opens_window() {
        let cli = Cli::try_parse_from(["jobviz"]).expect("arguments should parse");
        assert!(cli.command.is_none());
    }
}
