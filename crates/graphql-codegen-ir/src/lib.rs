//! Builds the entity-graph intermediate representation that GraphQL client
//! code generators render typed response models from.
//!
//! The entry points are [`schema::SchemaBuilder`] (to load a [`Schema`]),
//! [`operation::ExecutableDocument`] (to load operations and fragments) and
//! [`ir::IrBuilder`] (to build [`ir::Operation`]s and
//! [`ir::NamedFragment`]s against them).

pub mod ast;
pub mod ir;
pub mod loc;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::Schema;

#[cfg(test)]
mod test;
