use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use chrono::Utc;
use tracing::{error, info, warn};

mod catalog;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration and logging
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.log) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    // 2️⃣ Load the catalog once; workers share it read-only
    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "catalog failed to load");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        warn!("catalog is empty, the catalog page will have no cards");
    }

    // 3️⃣ Start the server
    info!(
        addr = %config.addr,
        workers = config.workers,
        shoes = catalog.len(),
        "starting server at http://{}",
        config.addr
    );

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}

fn load_catalog(config: &Config) -> Result<Catalog, CatalogError> {
    match &config.data_path {
        Some(path) => Catalog::load(path),
        None => {
            info!("SHOE_CATALOG_DATA unset, serving the demo catalog");
            Catalog::demo(Utc::now())
        }
    }
}
