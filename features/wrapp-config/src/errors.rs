use wrapp_inject::TypeInfo;

/// Errors when trying to aquire a config
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GetConfigError {
    /// The required Config is not known
    #[error("The required Config type '{0}' is not known")]
    Missing(TypeInfo),
}

/// Errors when trying to register a config
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterConfigError {
    /// The Config type is already registered
    #[error("The Config type '{0}' is already registered")]
    AlreadyRegistered(TypeInfo),
}

/// Errors when loading a config from its sources
#[derive(thiserror::Error, Debug)]
pub enum LoadConfigError {
    /// One of the sources could not be read or did not match the config type
    #[error("Failed to load config '{config}': {source}")]
    Extract {
        config: TypeInfo,
        #[source]
        source: Box<figment::Error>,
    },
}
