#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
pub(crate) mod schema_builder;
mod schema_lookup_error;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_lookup_error::SchemaLookupError;
