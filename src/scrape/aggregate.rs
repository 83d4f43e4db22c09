use super::extract::{Extractor, LabelPolicy};
use super::region::Region;
use crate::prelude::*;
use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub title: String,
    pub keywords: Vec<String>,
}

impl LocationRecord {
    pub fn new(title: String) -> Self {
        Self {
            title,
            keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {region} locations: {source}")]
    Request {
        region: Region,
        #[source]
        source: reqwest::Error,
    },
    #[error("Non-success response for {region} locations: {status}")]
    Status { region: Region, status: StatusCode },
}

impl FetchError {
    pub fn region(&self) -> Region {
        match self {
            FetchError::Request { region, .. } | FetchError::Status { region, .. } => *region,
        }
    }
}

pub async fn fetch_page(client: &Client, region: Region, url: Url) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request { region, source })?;
    if !response.status().is_success() {
        let status = response.status();
        tracing::error!("Non-success response from {} locations: {}", region, status);
        return Err(FetchError::Status { region, status }.into());
    }

    Ok(response
        .text()
        .await
        .map_err(|source| FetchError::Request { region, source })?)
}

/// Fetches each region in turn and flattens the combined locations into records.
/// The first failed fetch aborts the whole run.
pub async fn aggregate<F, Fut>(
    regions: &[Region],
    policy: LabelPolicy,
    fetch: F,
) -> Result<Vec<LocationRecord>>
where
    F: Fn(Region, Url) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut records = Vec::new();
    for &region in regions {
        let html = match fetch(region, region.url()?).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Failed to fetch {} locations: {:#}", region, e);
                return Err(e.context(format!("Fetching {} locations", region)));
            }
        };

        let extractor = Extractor::for_region(region)
            .with_context(|| format!("Building extractor for {}", region))?;
        let locations = extractor.extract(&html, policy);
        tracing::info!("Extracted {} {} locations", locations.len(), region);
        records.extend(locations.into_iter().map(LocationRecord::new));
    }

    Ok(records)
}
