use clap::Parser;
use std::error::Error;
use std::path::Path;
use zscaler_egress_ips::config::{Cli, Config};
use zscaler_egress_ips::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(Path::new("log4rs.yml"))?;
    let config = Config::from(Cli::parse());
    log::info!("#Start main() mode={:?} output={}", config.mode, config.output.display());

    match zscaler_egress_ips::run(&config).await {
        Ok(count) => {
            log::info!("#End main() wrote {count} entries");
            Ok(())
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("Failed to fetch data: {e}");
            } else {
                log::error!("Unexpected error: {e}");
            }
            Err(e.into())
        }
    }
}
