use super::{floats, sample, strings};
use crate::dashboard::logic::dataset::*;
use crate::dashboard::logic::filters::{Filters, apply_filters};
use anyhow::Result;
use std::collections::BTreeMap;

fn distribution(values: Vec<String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_salary_bounds_hold_for_every_row() -> Result<()> {
    let ds = sample()?;
    for (lo, hi) in [(0, 100_000), (30_000, 70_000), (45_000, 95_000), (50_000, 60_000)] {
        let out = apply_filters(&ds, &Filters::salary_range(lo, hi))?;
        for (min, max) in floats(&out, MIN_SALARY)
            .into_iter()
            .zip(floats(&out, MAX_SALARY))
        {
            let (min, max) = (min.expect("min present"), max.expect("max present"));
            assert!(f64::from(lo) <= min, "{min} below {lo}");
            assert!(max <= f64::from(hi), "{max} above {hi}");
        }
    }
    Ok(())
}

#[test]
fn test_bounds_are_inclusive() -> Result<()> {
    let ds = sample()?;
    let out = apply_filters(&ds, &Filters::salary_range(40_000, 60_000))?;
    assert_eq!(strings(&out, STATE_CODE), vec!["CA"]);
    Ok(())
}

#[test]
fn test_empty_job_types_is_pass_through() -> Result<()> {
    let ds = sample()?;
    let base = Filters::salary_range(0, 100_000).with_experience_levels(["Entry level"]);
    let unfiltered = apply_filters(&ds, &base)?;
    let filtered = apply_filters(&ds, &base.clone().with_job_types(Vec::<String>::new()))?;

    assert_eq!(
        distribution(strings(&filtered, WORK_TYPE)),
        distribution(strings(&unfiltered, WORK_TYPE))
    );
    assert!(filtered.height() > 0);
    Ok(())
}

#[test]
fn test_job_types_restrict_to_members() -> Result<()> {
    let ds = sample()?;
    let filters = Filters::salary_range(0, 100_000).with_job_types(["Contract", "Part-time"]);
    let out = apply_filters(&ds, &filters)?;
    let types = strings(&out, WORK_TYPE);
    assert_eq!(types.len(), 4);
    assert!(types.iter().all(|t| t == "Contract" || t == "Part-time"));
    Ok(())
}

#[test]
fn test_empty_experience_levels_is_pass_through() -> Result<()> {
    let ds = sample()?;
    let base = Filters::salary_range(0, 100_000).with_job_types(["Full-time"]);
    let with_levels = apply_filters(&ds, &base)?;
    assert_eq!(
        distribution(strings(&with_levels, EXPERIENCE_LEVEL)),
        BTreeMap::from([("Entry level".to_owned(), 3), ("Mid-Senior level".to_owned(), 2)])
    );

    let only_senior = apply_filters(&ds, &base.with_experience_levels(["Mid-Senior level"]))?;
    assert_eq!(strings(&only_senior, STATE_CODE), vec!["WA", "OH"]);
    Ok(())
}

#[test]
fn test_unknown_category_yields_no_rows() -> Result<()> {
    let ds = sample()?;
    let out = apply_filters(&ds, &Filters::salary_range(0, 100_000).with_job_types(["Volunteer"]))?;
    assert_eq!(out.height(), 0);
    Ok(())
}

#[test]
fn test_inverted_salary_range_yields_no_rows() -> Result<()> {
    let ds = sample()?;
    let out = apply_filters(&ds, &Filters::salary_range(90_000, 10_000))?;
    assert_eq!(out.height(), 0);
    Ok(())
}

#[test]
fn test_null_salary_never_matches() -> Result<()> {
    let ds = sample()?;
    let out = apply_filters(&ds, &Filters::salary_range(0, 100_000))?;
    assert!(!strings(&out, STATE_CODE).contains(&"AZ".to_owned()));
    Ok(())
}

#[test]
fn test_state_codes_are_strict_membership() -> Result<()> {
    let ds = sample()?;
    let all = Filters::salary_range(0, 100_000);

    let none_selected = apply_filters(&ds, &all.clone().with_state_codes(Vec::<String>::new()))?;
    assert_eq!(none_selected.height(), 0, "empty state set matches nothing");

    let ca = apply_filters(&ds, &all.clone().with_state_codes(["CA", "ZZ"]))?;
    assert_eq!(strings(&ca, STATE_CODE), vec!["CA", "CA"]);

    let unrestricted = apply_filters(&ds, &all)?;
    assert_eq!(unrestricted.height(), 9);
    Ok(())
}

#[test]
fn test_filtering_is_idempotent_and_leaves_source_untouched() -> Result<()> {
    let ds = sample()?;
    let before = ds.frame().clone();
    let filters = Filters::default();

    let first = apply_filters(&ds, &filters)?;
    let second = apply_filters(&ds, &filters)?;

    assert!(first.equals_missing(&second));
    assert!(ds.frame().equals_missing(&before));
    assert_eq!(ds.len(), 10);
    Ok(())
}
