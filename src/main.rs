mod prelude;
mod scrape {
    pub mod aggregate;
    pub mod extract;
    pub mod region;
    pub mod util;
}
mod service {
    pub mod location_service;
    pub mod log_service;
    pub mod output_service;
    pub mod var_service;
}

use prelude::*;
use service::{
    location_service::run_location_scrape, log_service::set_logging, var_service::get_log_level,
};

#[tokio::main]
async fn main() -> Result<()> {
    set_logging(get_log_level()?)?;
    run_location_scrape().await?;

    Ok(())
}
