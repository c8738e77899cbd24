use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaLookupError;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::deprecation_state::deprecation_reason_from_ast;
use indexmap::IndexMap;
use std::path::Path;

pub(crate) const TYPENAME_FIELD_NAME: &str = "__typename";

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType),
/// [`InterfaceType`](crate::types::InterfaceType) or
/// [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        parent_type_name: &str,
        def: &ast::schema::Field,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );
        Self {
            deprecation_reason: deprecation_reason_from_ast(&def.directives),
            description: def.description.to_owned(),
            name: def.name.to_owned(),
            parameters: def.arguments.iter().map(|input_val| (
                input_val.name.to_owned(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            parent_type: NamedGraphQLTypeRef::new(
                parent_type_name,
                def_location.to_owned(),
            ),
            type_annotation: TypeAnnotation::from_ast_type(&def.field_type),
            def_location,
        }
    }

    pub(crate) fn from_ast_input_value(
        file_path: Option<&Path>,
        parent_type_name: &str,
        def: &ast::schema::InputValue,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );
        Self {
            deprecation_reason: deprecation_reason_from_ast(&def.directives),
            description: def.description.to_owned(),
            name: def.name.to_owned(),
            parameters: IndexMap::new(),
            parent_type: NamedGraphQLTypeRef::new(
                parent_type_name,
                def_location.to_owned(),
            ),
            type_annotation: TypeAnnotation::from_ast_type(&def.value_type),
            def_location,
        }
    }

    /// The implicit `__typename: String!` field every object and interface
    /// type carries.
    pub(crate) fn typename(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            deprecation_reason: None,
            description: None,
            name: TYPENAME_FIELD_NAME.to_string(),
            parameters: IndexMap::new(),
            parent_type: NamedGraphQLTypeRef::new(
                parent_type_name,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
            type_annotation: TypeAnnotation::named("String", false),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`Field`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.deprecation_reason).into()
    }

    /// The description of this [`Field`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments accepted by this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, SchemaLookupError> {
        schema.get_type(self.parent_type.name())
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
