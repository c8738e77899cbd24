mod deprecation_state;
mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

use crate::loc;
use crate::named_ref::NamedRef;
use crate::schema::Schema;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub(crate) use field::TYPENAME_FIELD_NAME;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type::BUILTIN_SCALAR_NAMES;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

pub type NamedGraphQLTypeRef = NamedRef<Schema, loc::SourceLocation, GraphQLType>;
