//! # jobviz
//!
//! An interactive dashboard over a static table of U.S. job postings.
//!
//! The postings CSV is loaded once into a polars `DataFrame`
//! ([`dashboard::logic::Dataset`]). Each filter change runs the filter
//! pipeline, one aggregation and one chart-spec builder per affected chart:
//!
//! ```no_run
//! use jobviz::dashboard::logic::{Bindings, Dataset, Filters, InputId};
//! use std::path::Path;
//!
//! let dataset = Dataset::load(Path::new("data/processed/cleaned_job_postings.csv"))?;
//! let filters = Filters::salary_range(30_000, 70_000).with_job_types(["Full-time"]);
//! for (output, chart) in Bindings::standard().dispatch(&dataset, &filters, InputId::JobTypes) {
//!     println!("{output}: {} bars", chart?.len());
//! }
//! # Ok::<(), jobviz::error::JobvizError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`dashboard::logic`]: loading, filtering, aggregation, chart specs, bindings
//! - [`dashboard::gui`]: the `eframe` window that renders controls and charts
//! - [`config`]: startup configuration
//! - [`error`]: error types and handling utilities

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod theme;
pub mod utils;
