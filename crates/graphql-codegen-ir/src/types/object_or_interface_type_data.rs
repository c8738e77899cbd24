use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TYPENAME_FIELD_NAME;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(
        file_path: Option<&Path>,
        position: &ast::AstPos,
        description: Option<&String>,
        name: &str,
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            position,
        );
        let mut data = Self {
            def_location: def_location.to_owned(),
            description: description.cloned(),
            fields: IndexMap::from([(
                TYPENAME_FIELD_NAME.to_string(),
                Field::typename(name),
            )]),
            interfaces: vec![],
            name: name.to_string(),
        };
        data.extend(file_path, &def_location, implements_interfaces, fields);
        data
    }

    /// Appends fields and implemented interfaces (from the type definition
    /// itself or from an `extend type` block).
    ///
    /// Returns the names of any fields that were already defined.
    pub(super) fn extend(
        &mut self,
        file_path: Option<&Path>,
        ref_location: &loc::SourceLocation,
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) -> Vec<String> {
        let mut duplicate_field_names = vec![];
        for field_def in fields {
            if self.fields.contains_key(field_def.name.as_str()) {
                duplicate_field_names.push(field_def.name.to_owned());
                continue;
            }
            self.fields.insert(
                field_def.name.to_owned(),
                Field::from_ast(file_path, self.name.as_str(), field_def),
            );
        }
        for iface_name in implements_interfaces {
            if self.interfaces.iter().any(|iface| iface.name() == iface_name) {
                continue;
            }
            self.interfaces.push(NamedGraphQLTypeRef::new(
                iface_name,
                ref_location.to_owned(),
            ));
        }
        duplicate_field_names
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| {
                iface_ref.deref(schema)
                    .ok()
                    .and_then(|type_| type_.as_interface())
            })
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
