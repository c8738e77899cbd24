use crate::ir::Location;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::SchemaLookupError;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum IrBuildError {
    #[error(
        "This IrBuilder failed an earlier build and can no longer be used"
    )]
    BuilderPoisoned,

    #[error("Multiple fragments named `{fragment_name}` were defined")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error(
        "Cannot merge `{response_key}` at {location}: it is selected as \
        `{existing}` and as `{conflicting}` under overlapping type conditions"
    )]
    FieldMergeConflict {
        location: Location,
        response_key: String,
        existing: TypeAnnotation,
        conflicting: TypeAnnotation,
    },

    #[error("Fragment cycle detected: {}", .cycle_path.join(" -> "))]
    FragmentCycleDetected {
        /// Fragment names from the first fragment of the cycle to the spread
        /// that closes it (so the first and last entries are equal).
        cycle_path: Vec<String>,
    },

    #[error(
        "`{type_name}` is a {kind} type, but it was used where an object, \
        interface or union type is required"
    )]
    NotACompositeType {
        type_name: String,
        kind: GraphQLTypeKind,
    },

    #[error("The schema defines no {operation} root operation type")]
    UndefinedRootOperationType {
        operation: OperationKind,
    },

    #[error("The `{type_name}` type has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("No fragment named `{fragment_name}` is defined")]
    UnknownFragment {
        fragment_name: String,
    },

    #[error("No operation named `{operation_name}` is defined")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    UnknownType {
        type_name: String,
    },
}
impl std::convert::From<SchemaLookupError> for IrBuildError {
    fn from(value: SchemaLookupError) -> Self {
        match value {
            SchemaLookupError::NotACompositeType { type_name, kind } =>
                Self::NotACompositeType { type_name, kind },
            SchemaLookupError::UnknownType(type_name) =>
                Self::UnknownType { type_name },
        }
    }
}
