use crate::error::{JobvizError, Result, ResultExt as _};
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;

pub const REGION: &str = "region";
pub const STATE_CODE: &str = "state_code";
pub const PAY_PERIOD: &str = "pay_period";
pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";
pub const WORK_TYPE: &str = "formatted_work_type";
pub const EXPERIENCE_LEVEL: &str = "formatted_experience_level";
/// Derived at load time: mean of `min_salary` and `max_salary`.
pub const AVG_SALARY: &str = "avg_salary";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    REGION,
    STATE_CODE,
    PAY_PERIOD,
    MIN_SALARY,
    MAX_SALARY,
    WORK_TYPE,
    EXPERIENCE_LEVEL,
];

const CATEGORICAL_COLUMNS: [&str; 5] = [REGION, STATE_CODE, PAY_PERIOD, WORK_TYPE, EXPERIENCE_LEVEL];

/// The job postings table, loaded once and never mutated.
///
/// Every filter produces a new frame; the underlying `DataFrame` is only ever
/// handed out by shared reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    /// Reads the postings CSV at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file does not exist, cannot be parsed, or lacks one of
    /// [`REQUIRED_COLUMNS`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(JobvizError::InvalidPath(format!(
                "dataset not found at {}",
                path.display()
            )));
        }

        let frame = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_has_header(true)
            .with_dtype_overwrite(Some(Arc::new(salary_schema())))
            .finish()?
            .collect()
            .with_context(|| format!("Failed to read CSV {}", path.display()))?;

        let dataset = Self::from_frame(frame)?;
        log::info!(
            "Loaded {} job postings from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Normalizes column types and precomputes [`AVG_SALARY`].
    ///
    /// # Errors
    ///
    /// Fails with [`JobvizError::MissingColumn`] when a required column is absent.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        for name in REQUIRED_COLUMNS {
            if frame.column(name).is_err() {
                return Err(JobvizError::MissingColumn(name.to_owned()));
            }
        }

        let casts: Vec<Expr> = CATEGORICAL_COLUMNS
            .iter()
            .map(|name| col(*name).cast(DataType::String))
            .chain([
                col(MIN_SALARY).cast(DataType::Float64),
                col(MAX_SALARY).cast(DataType::Float64),
            ])
            .collect();

        let frame = frame
            .lazy()
            .with_columns(casts)
            .with_column(average_salary_expr().alias(AVG_SALARY))
            .collect()?;

        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A lazy view over the table. Cloning a `DataFrame` only bumps
    /// reference counts on its columns.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Sorted distinct non-null values of a categorical column.
    ///
    /// # Errors
    ///
    /// Fails if `column` is not a string column of the dataset.
    pub fn distinct(&self, column: &str) -> Result<Vec<String>> {
        let values = self.frame.column(column)?.as_materialized_series().str()?;
        let mut out: Vec<String> = values.into_iter().flatten().map(str::to_owned).collect();
        out.sort_unstable();
        out.dedup();
        Ok(out)
    }

    pub fn state_codes(&self) -> Result<Vec<String>> {
        self.distinct(STATE_CODE)
    }

    pub fn regions(&self) -> Result<Vec<String>> {
        self.distinct(REGION)
    }
}

/// Salary columns are read as floats regardless of what the first rows
/// look like; fractional pay further down would otherwise fail the load.
fn salary_schema() -> Schema {
    Schema::from_iter([
        Field::new(MIN_SALARY.into(), DataType::Float64),
        Field::new(MAX_SALARY.into(), DataType::Float64),
    ])
}

/// Per-row average salary. Used once at load; aggregations read the
/// precomputed column so every chart agrees on the same value.
pub fn average_salary_expr() -> Expr {
    (col(MIN_SALARY) + col(MAX_SALARY)) / lit(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frame_adds_average_salary() -> Result<()> {
        let df = df!(
            REGION => &["West", "South"],
            STATE_CODE => &["CA", "TX"],
            PAY_PERIOD => &["YEARLY", "HOURLY"],
            MIN_SALARY => &[10_000i64, 30_000],
            MAX_SALARY => &[20_000i64, 50_000],
            WORK_TYPE => &["Full-time", "Contract"],
            EXPERIENCE_LEVEL => &["Entry level", "Mid-Senior level"]
        )?;

        let dataset = Dataset::from_frame(df)?;
        let avg: Vec<Option<f64>> = dataset
            .frame()
            .column(AVG_SALARY)?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(avg, vec![Some(15_000.0), Some(40_000.0)]);
        Ok(())
    }

    #[test]
    fn test_from_frame_rejects_missing_column() -> Result<()> {
        let df = df!(
            REGION => &["West"],
            STATE_CODE => &["CA"]
        )?;

        let err = Dataset::from_frame(df).unwrap_err();
        assert!(
            matches!(err, JobvizError::MissingColumn(ref name) if name == PAY_PERIOD),
            "unexpected error: {err}"
        );
        Ok(())
    }

    #[test]
    fn test_load_accepts_fractional_salary_after_whole_numbers() -> Result<()> {
        use std::io::Write as _;

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        writeln!(file, "{}", REQUIRED_COLUMNS.join(","))?;
        for _ in 0..10_050 {
            writeln!(file, "West,CA,YEARLY,50000,60000,Full-time,Entry level")?;
        }
        writeln!(file, "West,WA,HOURLY,17.5,21.25,Part-time,Entry level")?;
        file.flush()?;

        let dataset = Dataset::load(file.path())?;
        assert_eq!(dataset.len(), 10_051);
        let min: Vec<Option<f64>> = dataset
            .frame()
            .column(MIN_SALARY)?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(min.last(), Some(&Some(17.5)));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_invalid_path() {
        let err = Dataset::load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, JobvizError::InvalidPath(_)));
    }
}
