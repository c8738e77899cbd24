use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::deprecation_state::deprecation_reason_from_ast;
use std::path::Path;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) enum_type_name: String,
    pub(super) name: String,
}

impl EnumValue {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        enum_type_name: &str,
        def: &ast::schema::EnumValue,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &def.position,
            ),
            deprecation_reason: deprecation_reason_from_ast(&def.directives),
            description: def.description.to_owned(),
            enum_type_name: enum_type_name.to_string(),
            name: def.name.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.deprecation_reason).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) this value
    /// belongs to.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
