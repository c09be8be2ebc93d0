use std::sync::Arc;

use crate::{
    injector::Injector,
    producer::Producer,
    tags::{MarkerTag, TagInfo, TagSet},
};

/// An injector for exactly one tag and one type
///
/// The producer usually delegates to some other collaborator, e.g. ambient request state.
/// Parameters with `Tag` but a different type fail with a missing binding, like any other injector.
pub fn single<Tag: MarkerTag, P: Producer>(producer: P) -> Injector {
    let tag = TagInfo::of::<Tag>();
    let mut builder = Injector::builder(TagSet::new([tag]));
    // Tag is part of the set, no validation needed
    builder.insert(Some(tag), Arc::new(producer));
    builder.build()
}
