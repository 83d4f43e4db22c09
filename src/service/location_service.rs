use crate::prelude::*;
use crate::scrape::aggregate::{aggregate, fetch_page};
use crate::service::output_service::write_locations;
use crate::service::var_service::{
    get_label_policy, get_output_mode, get_output_path, get_regions,
};
use reqwest::Client;

pub async fn run_location_scrape() -> Result<()> {
    let regions = get_regions()?;
    let policy = get_label_policy()?;
    let mode = get_output_mode()?;
    let path = get_output_path();
    tracing::debug!("Scraping {:?} with {:?} into {:?}", regions, policy, mode);

    let client = Client::new();
    let records = aggregate(&regions, policy, |region, url| {
        fetch_page(&client, region, url)
    })
    .await?;
    write_locations(&records, mode, &path)?;

    Ok(())
}
