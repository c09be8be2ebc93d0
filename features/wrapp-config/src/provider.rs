use std::{any::Any, collections::HashMap, sync::Arc};

use wrapp_inject::TypeInfo;

use crate::{
    config::Config,
    errors::{GetConfigError, RegisterConfigError},
};

/// A provider to register all configs.
///
/// Configs can be registered and retrieved based on type.
#[derive(Default)]
pub struct ConfigProvider {
    configs: HashMap<TypeInfo, Arc<dyn Any + Send + Sync + 'static>>,
}

impl ConfigProvider {
    /// Initializes an empty Config Provider
    pub fn initialize() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Retrieve a config with specified type.
    ///
    /// If the config type is not registered, it will return [`GetConfigError::Missing`]
    pub fn get_config<T: Send + Sync + 'static>(&self) -> Result<Config<T>, GetConfigError> {
        let info = TypeInfo::of::<T>();

        self.configs
            .get(&info)
            .and_then(|entry| entry.clone().downcast::<T>().ok())
            .map(Config::from_arc)
            .ok_or(GetConfigError::Missing(info))
    }

    /// Add a config to the registry.
    ///
    /// If the config type is already registered, it will return
    /// [`RegisterConfigError::AlreadyRegistered`]
    pub fn add_config<T: Send + Sync + 'static>(
        &mut self,
        config: T,
    ) -> Result<&mut Self, RegisterConfigError> {
        let info = TypeInfo::of::<T>();

        if self.configs.contains_key(&info) {
            return Err(RegisterConfigError::AlreadyRegistered(info));
        }

        tracing::debug!("Registered config {info}");
        self.configs.insert(info, Arc::new(config));
        Ok(self)
    }

    /// Can optionally add a config to the registry.
    ///
    /// If the config provided is `Some(T)`, it will be the same as calling [`ConfigProvider::add_config`]
    /// If the config provided is `None`, then the function just returns `Ok(self)` for chaining
    pub fn maybe_add_config<T: Send + Sync + 'static>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, RegisterConfigError> {
        match config {
            Some(c) => self.add_config(c),
            None => Ok(self),
        }
    }

    /// A producer handing out the registered config of type `T`
    ///
    /// Allows binding configs on an injector:
    /// `builder.register_anonymous(provider.config_producer::<AppConfig>()?)`
    pub fn config_producer<T: Send + Sync + 'static>(
        &self,
    ) -> Result<impl Fn() -> Config<T> + Send + Sync + 'static, GetConfigError> {
        let config = self.get_config::<T>()?;
        Ok(move || config.clone())
    }
}
