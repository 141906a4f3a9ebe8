//! Loads the bundled project data into the `projects` collection.

use std::process::ExitCode;

use portfolio_api::{config::Config, db::ConnectionProvider, seed};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let projects = match seed::bundled_projects() {
        Ok(projects) => projects,
        Err(e) => {
            error!("Bundled project data is invalid: {e}");
            return ExitCode::FAILURE;
        }
    };

    let provider = ConnectionProvider::from_config(&config);
    let result = match provider.database().await {
        Ok(database) => seed::seed_projects(&database, &projects).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(touched) => {
            info!(
                "Seeded {} projects ({touched} inserted or changed)",
                projects.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}
