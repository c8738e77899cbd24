//! Fixtures shared by the unit tests of every module.

use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::path::PathBuf;

pub(crate) const STAR_WARS_SCHEMA_SRC: &str =
    include_str!("fixtures/star_wars_schema.graphql");

pub(crate) fn star_wars_schema() -> Schema {
    SchemaBuilder::from_str(
        Some(PathBuf::from("star_wars_schema.graphql")),
        STAR_WARS_SCHEMA_SRC,
    )
    .unwrap()
    .build()
    .unwrap()
}
