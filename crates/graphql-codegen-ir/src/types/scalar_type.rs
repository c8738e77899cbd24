use crate::ast;
use crate::loc;
use std::path::Path;

/// The scalars every schema defines implicitly.
pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars), either
/// one of the built-in scalars or a custom scalar defined in the schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        }
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ScalarType,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &def.position,
            ),
            description: def.description.to_owned(),
            name: def.name.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this is one of `Boolean`, `Float`, `ID`, `Int` or `String`.
    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
