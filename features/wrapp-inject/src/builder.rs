use std::sync::Arc;

use crate::{
    errors::ConfigurationError,
    injector::Injector,
    producer::{DynProducer, Producer},
    registry::{BindingKey, Registry},
    tags::{MarkerTag, TagInfo, TagSet},
};

/// Collects bindings during startup
///
/// Registration is only possible on the builder. [InjectorBuilder::build] freezes it into an
/// [Injector] which can be shared with request handlers, but never written to again.
///
/// ```rust
/// use wrapp_inject::{InjectorBuilder, MarkerTag, TagInfo, TagSet};
///
/// struct User(String);
///
/// struct CustomInject;
/// impl MarkerTag for CustomInject {}
///
/// let mut builder = InjectorBuilder::new(TagSet::of::<(CustomInject,)>());
/// // Default for every User parameter tagged with a known tag
/// builder.register_anonymous(|| User("DefaultInject".to_string()));
/// // Specific for `CustomInject` tagged User parameters
/// builder
///     .register_tagged::<CustomInject, _>(|| User("CustomInject".to_string()))
///     .unwrap();
///
/// let injector = builder.build();
/// let user: User = injector
///     .resolve(&[TagInfo::of::<CustomInject>()])
///     .unwrap()
///     .unwrap();
/// assert_eq!(user.0, "CustomInject");
/// ```
pub struct InjectorBuilder {
    tags: TagSet,
    registry: Registry,
}

impl InjectorBuilder {
    pub fn new(tags: TagSet) -> Self {
        InjectorBuilder {
            tags,
            registry: Registry::default(),
        }
    }

    /// Tags this builder accepts bindings for
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Binds `producer` for its type without a tag
    ///
    /// Used whenever a recognized tag has no binding of its own for the type.
    /// Replaces an earlier anonymous binding for the same type.
    pub fn register_anonymous<P: Producer>(&mut self, producer: P) -> &mut Self {
        self.insert(None, Arc::new(producer));
        self
    }

    /// Binds `producer` for its type under `Tag`
    ///
    /// Fails if `Tag` is not part of this builder's tag set, nothing is registered in that case.
    pub fn register_tagged<Tag: MarkerTag, P: Producer>(
        &mut self,
        producer: P,
    ) -> Result<&mut Self, ConfigurationError> {
        self.register(producer, &[TagInfo::of::<Tag>()])
    }

    /// Binds `producer` under each of `tags`, or anonymously if `tags` is empty
    ///
    /// All tags are validated up front, if any of them is unknown nothing is registered.
    pub fn register<P: Producer>(
        &mut self,
        producer: P,
        tags: &[TagInfo],
    ) -> Result<&mut Self, ConfigurationError> {
        if tags.is_empty() {
            return Ok(self.register_anonymous(producer));
        }

        self.verify_tags_allowed(tags)?;

        let mut unique: Vec<TagInfo> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(tag) {
                unique.push(*tag);
            }
        }

        let producer: Arc<dyn DynProducer> = Arc::new(producer);
        for tag in unique {
            self.insert(Some(tag), producer.clone());
        }
        Ok(self)
    }

    pub fn contains_binding(&self, key: &BindingKey) -> bool {
        self.registry.contains(key)
    }

    /// Freezes all registered bindings
    pub fn build(self) -> Injector {
        tracing::debug!(
            "Building injector with {} tags and {} bindings",
            self.tags.len(),
            self.registry.len()
        );
        Injector::new(self.tags, self.registry)
    }

    /// Returns an error listing every tag which is not part of the tag set
    fn verify_tags_allowed(&self, tags: &[TagInfo]) -> Result<(), ConfigurationError> {
        let mut disallowed: Vec<TagInfo> = Vec::new();
        for tag in tags {
            if !self.tags.contains(tag) && !disallowed.contains(tag) {
                disallowed.push(*tag);
            }
        }

        if !disallowed.is_empty() {
            tracing::error!("Tried to register bindings for unmapped tags: {disallowed:?}");
            return Err(ConfigurationError::UnmappedTags { tags: disallowed });
        }

        Ok(())
    }

    pub(crate) fn insert(&mut self, tag: Option<TagInfo>, producer: Arc<dyn DynProducer>) {
        let key = BindingKey {
            tag,
            target: producer.supplies(),
        };

        // Last registration wins
        if self.registry.insert(key, producer) {
            tracing::warn!("Binding for {key} was registered twice, replacing the earlier one");
        } else {
            tracing::debug!("Registered binding for {key}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeInfo;

    struct A;
    impl MarkerTag for A {}
    struct B;
    impl MarkerTag for B {}
    struct Unknown;
    impl MarkerTag for Unknown {}

    fn builder() -> InjectorBuilder {
        InjectorBuilder::new(TagSet::of::<(A, B)>())
    }

    #[test]
    fn zero_tags_register_anonymously() {
        let mut builder = builder();
        builder.register(|| 7_u8, &[]).unwrap();

        assert!(builder.contains_binding(&BindingKey::anonymous(TypeInfo::of::<u8>())));
    }

    #[test]
    fn one_producer_under_many_tags() {
        let mut builder = builder();
        builder
            .register(|| 7_u8, &[TagInfo::of::<A>(), TagInfo::of::<B>()])
            .unwrap();

        let target = TypeInfo::of::<u8>();
        assert!(builder.contains_binding(&BindingKey::tagged(TagInfo::of::<A>(), target)));
        assert!(builder.contains_binding(&BindingKey::tagged(TagInfo::of::<B>(), target)));
        assert!(!builder.contains_binding(&BindingKey::anonymous(target)));
    }

    #[test]
    fn unknown_tag_rejects_whole_registration() {
        let mut builder = builder();
        let err = builder
            .register(
                || 7_u8,
                &[TagInfo::of::<A>(), TagInfo::of::<Unknown>(), TagInfo::of::<Unknown>()],
            )
            .map(|_| ())
            .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::UnmappedTags {
                tags: vec![TagInfo::of::<Unknown>()]
            }
        );
        let target = TypeInfo::of::<u8>();
        assert!(!builder.contains_binding(&BindingKey::tagged(TagInfo::of::<A>(), target)));
    }

    /// Counts `warn!` events emitted while the closure runs
    fn count_warnings(f: impl FnOnce()) -> usize {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::{
            layer::{Context, SubscriberExt},
            Layer,
        };

        struct WarnCounter(Arc<AtomicUsize>);
        impl<S: Subscriber> Layer<S> for WarnCounter {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == Level::WARN {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn repeated_tag_in_one_registration_is_bound_once() {
        let mut builder = builder();
        let warnings = count_warnings(|| {
            builder
                .register(|| 7_u8, &[TagInfo::of::<A>(), TagInfo::of::<A>()])
                .unwrap();
        });

        assert_eq!(warnings, 0);
        assert_eq!(builder.build().bindings().count(), 1);
    }

    #[test]
    fn replacing_a_binding_warns() {
        let mut builder = builder();
        builder.register_tagged::<A, _>(|| 1_u8).unwrap();
        let warnings = count_warnings(|| {
            builder.register_tagged::<A, _>(|| 2_u8).unwrap();
        });

        assert_eq!(warnings, 1);
    }

    #[test]
    fn registrations_chain() {
        let mut builder = builder();
        builder
            .register_anonymous(|| 1_u8)
            .register_tagged::<A, _>(|| 2_u8)
            .unwrap()
            .register_tagged::<B, _>(|| 3_u16)
            .unwrap();

        assert_eq!(builder.build().bindings().count(), 3);
    }
}
