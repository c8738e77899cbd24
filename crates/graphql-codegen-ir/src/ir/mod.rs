//! The entity-graph intermediate representation.
//!
//! Each compilation unit (an [`Operation`] or a [`NamedFragment`]) owns an
//! [`EntityStorage`] holding one [`Entity`] per response [`Location`], with
//! every field selected at that location merged and narrowed by type
//! condition.

mod entity;
mod entity_field;
mod entity_graph_builder;
mod entity_storage;
mod fragment_registry;
mod ir_build_error;
mod ir_builder;
mod ir_document;
mod location;
mod named_fragment;
mod operation;
mod selection_normalizer;

pub use entity::Entity;
pub use entity_field::EntityField;
pub use entity_storage::EntityStorage;
pub use fragment_registry::FragmentRegistry;
pub use ir_build_error::IrBuildError;
pub use ir_builder::IrBuilder;
pub use ir_document::IrDocument;
pub use location::Location;
pub use location::LocationSource;
pub use location::LocationStep;
pub use named_fragment::NamedFragment;
pub use operation::Operation;
pub use selection_normalizer::NormalizedSelection;
pub use selection_normalizer::normalize_selection_set;

use indexmap::IndexMap;
use serde::Serialize;
use serde::Serializer;
use std::sync::Arc;

fn serialize_map_keys<V, S: Serializer>(
    map: &IndexMap<String, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.keys())
}

fn serialize_map_values<K, V: Serialize, S: Serializer>(
    map: &IndexMap<K, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.values())
}

#[allow(clippy::ptr_arg)]
fn serialize_arcs<T: Serialize, S: Serializer>(
    items: &Vec<Arc<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(items.iter().map(|item| item.as_ref()))
}

#[cfg(test)]
mod tests;
