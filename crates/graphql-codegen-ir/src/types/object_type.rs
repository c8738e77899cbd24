use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ObjectType,
    ) -> Self {
        Self(ObjectOrInterfaceTypeData::new(
            file_path,
            &def.position,
            def.description.as_ref(),
            def.name.as_str(),
            &def.implements_interfaces,
            &def.fields,
        ))
    }

    /// Applies an `extend type` block to this type, returning the names of
    /// any fields the extension tried to redefine.
    pub(crate) fn extend_from_ast(
        &mut self,
        file_path: Option<&Path>,
        ext: &ast::schema::ObjectTypeExtension,
    ) -> Vec<String> {
        let ext_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ext.position,
        );
        self.0.extend(
            file_path,
            &ext_location,
            &ext.implements_interfaces,
            &ext.fields,
        )
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Look up a single [`Field`] by name (including `__typename`).
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema.
    ///
    /// The map retains the order fields were defined in, with the implicit
    /// `__typename` field first. Fields added by type extensions follow the
    /// fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Whether this type declares (directly) that it implements the named
    /// interface.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    /// The list of [`InterfaceType`]s implemented by this [`ObjectType`], in
    /// declaration order.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s implemented by this [`ObjectType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
