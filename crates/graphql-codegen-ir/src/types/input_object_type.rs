use crate::ast;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}
impl InputObjectType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::InputObjectType,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &def.position,
            ),
            description: def.description.to_owned(),
            fields: def.fields.iter().map(|input_val| (
                input_val.name.to_owned(),
                Field::from_ast_input_value(
                    file_path,
                    def.name.as_str(),
                    input_val,
                ),
            )).collect(),
            name: def.name.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from input-field name -> [`Field`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
