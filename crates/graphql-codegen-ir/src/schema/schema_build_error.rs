use crate::loc;
use crate::operation::OperationKind;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple `{operation}` root operation types were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{type_name}.{field_name}` field is defined more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, but it is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements `{interface_name}`, \
        but `{interface_name}` is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        interface_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type names may not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is used as the {operation} root type, but it is \
        a {kind} type (root operation types must be object types)"
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
        kind: GraphQLTypeKind,
    },

    #[error(
        "The `{union_name}` union includes `{member_name}`, but union members \
        must be defined object types"
    )]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("No query type was defined for this schema")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document `{file:?}`: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "`{referenced_from}` refers to the `{type_name}` type, but no such \
        type is defined"
    )]
    UndefinedTypeReference {
        type_name: String,
        referenced_from: String,
        location: loc::SourceLocation,
    },

    #[error("The `{operation}` root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Extending `{type_name}` is not supported (only object types can be extended)")]
    UnsupportedTypeExtension {
        type_name: String,
        location: loc::SourceLocation,
    },
}
