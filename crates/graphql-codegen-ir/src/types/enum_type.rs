use crate::ast;
use crate::loc;
use crate::types::EnumValue;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::EnumType,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &def.position,
            ),
            description: def.description.to_owned(),
            name: def.name.to_owned(),
            values: def.values.iter().map(|value_def| (
                value_def.name.to_owned(),
                EnumValue::from_ast(file_path, def.name.as_str(), value_def),
            )).collect(),
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`EnumType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The description of this [`EnumType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in the order they were declared in the schema.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
