use crate::prelude::*;
use crate::scrape::{extract::LabelPolicy, region::Region};
use anyhow::anyhow;
use std::{env::var, path::PathBuf, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    File,
    Stdout,
}

impl FromStr for OutputMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(OutputMode::File),
            "stdout" => Ok(OutputMode::Stdout),
            unknown => Err(anyhow!("Unknown output mode: {}", unknown)),
        }
    }
}

fn get_var(name: &str) -> Option<String> {
    non_empty(name, var(name).ok())
}

fn non_empty(name: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(value) => match value.trim().is_empty() {
            true => {
                tracing::debug!("{} is empty, using default", name);
                None
            }
            false => Some(value),
        },
        None => None,
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = anyhow::Error>,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let err = format!("Failed to parse {}: {}", name, e);
            tracing::error!(err);
            Err(anyhow!(err))
        }
    }
}

pub fn get_output_mode() -> Result<OutputMode> {
    output_mode_from(get_var("OUTPUT_MODE"))
}

fn output_mode_from(value: Option<String>) -> Result<OutputMode> {
    match value {
        Some(mode) => parse_var("OUTPUT_MODE", &mode),
        None => Ok(OutputMode::File),
    }
}

pub fn get_output_path() -> PathBuf {
    output_path_from(get_var("OUTPUT_PATH"))
}

fn output_path_from(value: Option<String>) -> PathBuf {
    match value {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("usa-locations-spaceanet.json"),
    }
}

pub fn get_label_policy() -> Result<LabelPolicy> {
    label_policy_from(get_var("MISSING_LABEL_POLICY"))
}

fn label_policy_from(value: Option<String>) -> Result<LabelPolicy> {
    match value {
        Some(policy) => parse_var("MISSING_LABEL_POLICY", &policy),
        None => Ok(LabelPolicy::default()),
    }
}

pub fn get_regions() -> Result<Vec<Region>> {
    regions_from(get_var("LOCATION_REGIONS"))
}

fn regions_from(value: Option<String>) -> Result<Vec<Region>> {
    match value {
        Some(regions) => parse_regions(&regions),
        None => Ok(Region::ALL.to_vec()),
    }
}

/// Parses a comma-separated region list into the fixed emission order, without duplicates.
pub fn parse_regions(list: &str) -> Result<Vec<Region>> {
    let mut regions = list
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| parse_var::<Region>("LOCATION_REGIONS", name))
        .collect::<Result<Vec<Region>>>()?;
    regions.sort();
    regions.dedup();

    Ok(regions)
}

pub fn get_log_level() -> Result<tracing::Level> {
    log_level_from(get_var("LOG_LEVEL"))
}

// Read before the subscriber exists, so a bad value is returned rather than logged.
fn log_level_from(value: Option<String>) -> Result<tracing::Level> {
    match value {
        Some(level) => match level.trim().parse::<tracing::Level>() {
            Ok(level) => Ok(level),
            Err(e) => Err(anyhow!("Failed to parse LOG_LEVEL {}: {}", level, e)),
        },
        None => Ok(tracing::Level::INFO),
    }
}
