use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaLookupError {
    #[error("`{type_name}` is an {kind} type, but a composite type was expected")]
    NotACompositeType {
        type_name: String,
        kind: GraphQLTypeKind,
    },

    #[error("No type named `{0}` is defined in the schema")]
    UnknownType(String),
}
