use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use wrapp_inject::TypeInfo;

use crate::errors::LoadConfigError;

/// Loads a config from layered sources
///
/// Sources are merged in this order, later ones override earlier ones:
/// 1. `T::default()`
/// 2. The TOML file, if set and present
/// 3. Environment variables `<PREFIX>_<KEY>`, e.g. `HELLO_PORT`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new(env_prefix: impl Into<String>) -> Self {
        ConfigLoader {
            config_path: None,
            env_prefix: env_prefix.into(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The configured file, if it is set but does not exist
    ///
    /// [ConfigLoader::load] skips it. Callers loading before logging is set up can report it
    /// once a subscriber is installed.
    pub fn missing_config_file(&self) -> Option<&Path> {
        self.config_path().filter(|path| !path.exists())
    }

    pub fn load<T>(&self) -> Result<T, LoadConfigError>
    where
        T: Serialize + DeserializeOwned + Default + 'static,
    {
        let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

        if let Some(path) = &self.config_path {
            if path.exists() {
                tracing::debug!("Loading config file {}", path.display());
                figment = figment.merge(Toml::file(path));
            } else {
                tracing::warn!("Config file {} not found, skipping", path.display());
            }
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)));

        figment
            .extract()
            .map_err(|source| LoadConfigError::Extract {
                config: TypeInfo::of::<T>(),
                source: Box::new(source),
            })
    }
}
