use std::{fmt::Debug, ops::Deref, sync::Arc};

/// A shared handle to a registered config
///
/// Retrieved from the [`ConfigProvider`](crate::provider::ConfigProvider), or injected into a
/// handler parameter when bound with
/// [`ConfigProvider::config_producer`](crate::provider::ConfigProvider::config_producer).
///
/// # Example
/// ```rust
/// use wrapp_config::provider::ConfigProvider;
/// use wrapp_inject::{Injector, MarkerTag, TagInfo, TagSet};
/// use wrapp_config::config::Config;
///
/// pub struct MyModuleConfig {
///     enabled: bool,
/// }
///
/// struct ConfigParam;
/// impl MarkerTag for ConfigParam {}
///
/// let mut config_provider = ConfigProvider::initialize();
/// config_provider.add_config(MyModuleConfig { enabled: true }).unwrap();
///
/// let mut builder = Injector::builder(TagSet::of::<(ConfigParam,)>());
/// builder.register_anonymous(config_provider.config_producer::<MyModuleConfig>().unwrap());
/// let injector = builder.build();
///
/// let config: Config<MyModuleConfig> = injector
///     .resolve(&[TagInfo::of::<ConfigParam>()])
///     .unwrap()
///     .unwrap();
/// assert!(config.enabled);
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Clone for Config<T> {
    fn clone(&self) -> Self {
        Config {
            inner: self.inner.clone(),
        }
    }
}
impl<T: Debug> Debug for Config<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Config").field(&self.inner).finish()
    }
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T> Config<T> {
    pub(crate) fn from_arc(inner: Arc<T>) -> Self {
        Config { inner }
    }

    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}
