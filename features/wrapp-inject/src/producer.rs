use crate::types::{Injectable, Produced, TypeInfo};

/// A zero argument factory producing fresh instances of a given type
///
/// Implemented for any `Fn() -> T`, so most registrations are just closures.
/// The producer is invoked once per resolved parameter, nothing is cached.
pub trait Producer: Send + Sync + 'static {
    type Provides: Injectable;

    /// Returns the typeinfo about the producer's provided type
    fn supplies() -> TypeInfo {
        TypeInfo::of::<Self::Provides>()
    }

    /// Produces a new instance
    fn produce(&self) -> Self::Provides;
}

impl<F, T> Producer for F
where
    F: Fn() -> T + Send + Sync + 'static,
    T: Injectable,
{
    type Provides = T;

    fn produce(&self) -> T {
        self()
    }
}

/// Wrapper Trait for producers, providing values of Any
pub(crate) trait DynProducer: Send + Sync {
    fn supplies(&self) -> TypeInfo;

    fn produce(&self) -> Produced;
}
// Impl DynProducer for any Producer
impl<SpecificProducer: Producer> DynProducer for SpecificProducer {
    fn supplies(&self) -> TypeInfo {
        <SpecificProducer as Producer>::supplies()
    }

    fn produce(&self) -> Produced {
        Produced::new(Producer::produce(self))
    }
}
