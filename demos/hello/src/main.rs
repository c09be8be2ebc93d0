//! Serves `GET /tokens`, each parameter injected through its own tag
//!
//! ```text
//! curl -H 'x-request-id: abc' localhost:8080/tokens
//! ```

use wrapp_axum::{Strategy, builder::WrappAxumStrategyBuilder, serve::DynError};
use wrapp_config::{loader::ConfigLoader, provider::ConfigProvider};

use crate::{config::HelloConfig, injection::resolvers, logging::init_logging};

mod config;
mod injection;
mod logging;
mod routes;

#[tokio::main]
async fn main() -> Result<(), DynError> {
    let loader = ConfigLoader::new("HELLO").with_config_path("hello.toml");
    let config: HelloConfig = loader.load()?;
    init_logging(&config.log_level);
    if let Some(path) = loader.missing_config_file() {
        tracing::warn!("Config file {} not found, using defaults and environment", path.display());
    }
    tracing::info!("Starting hello on {}", config.address());

    let address = config.address();
    let mut configs = ConfigProvider::initialize();
    configs.add_config(config)?;

    WrappAxumStrategyBuilder::new()
        .router(routes::router())
        .resolvers(resolvers(&configs)?)
        .listener_tcp(address)
        .build()
        .serve()
        .await
}
