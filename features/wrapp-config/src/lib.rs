//! Wrapp Config provides a registry of configs that can be injected into request handlers.
//!
//! Wrapp Config is split into three major parts:
//! 1. ConfigLoader: Loads a config from defaults, a TOML file and the environment
//! 2. ConfigProvider: Used to create the registry of all configs
//! 3. Config<T>: A shared handle to a config, which can be bound on an injector
//!
//! # Examples
//!
//! ```rust
//! use wrapp_config::provider::ConfigProvider;
//!
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//!     app_name: String,
//! }
//!
//! fn setup_config() {
//!     let app_config = AppConfig {
//!         host: "localhost".to_string(),
//!         port: 8080_u16,
//!         app_name: "My Awesome App".to_string(),
//!     };
//!
//!     let mut config_provider = ConfigProvider::initialize();
//!     if let Err(e) = config_provider.add_config(app_config) {
//!         eprintln!("{e}");
//!         return;
//!     }
//!
//!     let retrieved_config = match config_provider.get_config::<AppConfig>() {
//!         Ok(c) => c,
//!         Err(e) => {
//!             eprintln!("{e}");
//!             return;
//!         }
//!     };
//!
//!     assert_eq!(retrieved_config.host, "localhost");
//!     assert_eq!(retrieved_config.port, 8080);
//!     assert_eq!(retrieved_config.app_name, "My Awesome App");
//! }
//! # setup_config();
//! ```

pub mod config;
pub mod errors;
pub mod loader;
pub mod provider;
