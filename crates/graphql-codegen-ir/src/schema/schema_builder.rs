use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NamedTypeDefLocation {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) type_name: String,
}
impl NamedTypeDefLocation {
    fn from_pos(
        type_name: String,
        file_path: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                pos,
            ),
            type_name,
        }
    }
}

/// Utility for building a [Schema] from one or more SDL documents.
///
/// ```
/// use graphql_codegen_ir::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), graphql_codegen_ir::schema::SchemaBuildError> {
/// let schema = SchemaBuilder::from_str(
///     None,
///     "type Query { hello: String }",
/// )?
/// .build()?;
///
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    object_extensions: Vec<(Option<PathBuf>, ast::schema::ObjectTypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.apply_object_extensions()?;
        self.validate_type_references()?;

        let query_type =
            Self::resolve_root_type(
                &self.types,
                OperationKind::Query,
                self.query_type.take(),
            )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        log::debug!(
            "Built schema with {} types (query root: `{}`).",
            self.types.len(),
            query_type.name(),
        );

        Ok(Schema::new(
            self.types,
            query_type,
            mutation_type,
            subscription_type,
        ))
    }

    /// Shorthand for `SchemaBuilder::new().load_str(file_path, content)`.
    pub fn from_str(
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    /// Load every definition in an already-parsed schema document.
    ///
    /// `file_path` is only used to annotate source locations.
    pub fn load_ast(
        mut self,
        file_path: Option<&Path>,
        ast_doc: &ast::schema::Document,
    ) -> Result<Self> {
        for def in &ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        self.load_ast(Some(file_path.as_path()), &ast_doc)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            object_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: BUILTIN_SCALAR_NAMES
                .iter()
                .map(|name| (
                    name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(name)),
                ))
                .collect(),
        }
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc,
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc,
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn apply_object_extensions(&mut self) -> Result<()> {
        for (file_path, ext) in self.object_extensions.drain(..) {
            let file_path = file_path.as_deref();
            let ext_location = loc::SourceLocation::from_schema_ast_position(
                file_path,
                &ext.position,
            );
            match self.types.get_mut(ext.name.as_str()) {
                Some(GraphQLType::Object(obj_type)) => {
                    let duplicates = obj_type.extend_from_ast(file_path, &ext);
                    if let Some(field_name) = duplicates.into_iter().next() {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name: ext.name.to_owned(),
                            field_name,
                            location: ext_location,
                        });
                    }
                },

                Some(_) => return Err(SchemaBuildError::UnsupportedTypeExtension {
                    type_name: ext.name.to_owned(),
                    location: ext_location,
                }),

                None => return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: ext.name.to_owned(),
                    location: ext_location,
                }),
            }
        }
        Ok(())
    }

    fn check_duplicate_fields(
        type_name: &str,
        file_path: Option<&Path>,
        fields: &[ast::schema::Field],
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.name.as_str()) || field.name == "__typename" {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_owned(),
                    location: loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &field.position,
                    ),
                });
            }
        }
        Ok(())
    }

    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        operation: OperationKind,
        explicit: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let typedef_loc = match explicit {
            Some(typedef_loc) => typedef_loc,
            None => match types.get(operation.default_root_type_name()) {
                Some(GraphQLType::Object(obj_type)) => NamedTypeDefLocation {
                    def_location: obj_type.def_location().to_owned(),
                    type_name: obj_type.name().to_string(),
                },
                _ => return Ok(None),
            },
        };

        match types.get(typedef_loc.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                typedef_loc.type_name,
                typedef_loc.def_location,
            ))),

            Some(other_type) => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: typedef_loc.type_name,
                kind: GraphQLTypeKind::from(other_type),
            }),

            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name: typedef_loc.type_name,
            }),
        }
    }

    fn set_root_type(
        slot: &mut Option<NamedTypeDefLocation>,
        operation: OperationKind,
        typedef_loc: NamedTypeDefLocation,
    ) -> Result<()> {
        if let Some(existing_typedef_loc) = slot {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation,
                location1: existing_typedef_loc.def_location.to_owned(),
                location2: typedef_loc.def_location,
            });
        }
        *slot = Some(typedef_loc);
        Ok(())
    }

    fn validate_field_references(
        &self,
        type_name: &str,
        field: &Field,
    ) -> Result<()> {
        let check = |annot_type_name: &str, referenced_from: String| {
            if self.types.contains_key(annot_type_name) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    type_name: annot_type_name.to_string(),
                    referenced_from,
                    location: field.def_location().to_owned(),
                })
            }
        };

        check(
            field.type_annotation().innermost_type_name(),
            format!("{type_name}.{}", field.name()),
        )?;
        for param in field.parameters().values() {
            check(
                param.type_annotation().innermost_type_name(),
                format!("{type_name}.{}({}:)", field.name(), param.name()),
            )?;
        }
        Ok(())
    }

    fn validate_type_references(&self) -> Result<()> {
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields().values() {
                        self.validate_field_references(input_type.name(), field)?;
                    }
                },

                GraphQLType::Interface(iface_type) => {
                    self.validate_implemented_interfaces(
                        iface_type.name(),
                        iface_type.def_location(),
                        iface_type.interface_names(),
                    )?;
                    for field in iface_type.fields().values() {
                        self.validate_field_references(iface_type.name(), field)?;
                    }
                },

                GraphQLType::Object(obj_type) => {
                    self.validate_implemented_interfaces(
                        obj_type.name(),
                        obj_type.def_location(),
                        obj_type.interface_names(),
                    )?;
                    for field in obj_type.fields().values() {
                        self.validate_field_references(obj_type.name(), field)?;
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        if !matches!(
                            self.types.get(member_name),
                            Some(GraphQLType::Object(_)),
                        ) {
                            return Err(SchemaBuildError::InvalidUnionMember {
                                union_name: union_type.name().to_string(),
                                member_name: member_name.to_string(),
                                location: union_type.def_location().to_owned(),
                            });
                        }
                    }
                },
            }
        }
        Ok(())
    }

    fn validate_implemented_interfaces(
        &self,
        type_name: &str,
        location: &loc::SourceLocation,
        interface_names: Vec<&str>,
    ) -> Result<()> {
        for iface_name in interface_names {
            match self.types.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => return Err(SchemaBuildError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    interface_name: iface_name.to_string(),
                    location: location.to_owned(),
                }),
                None => return Err(SchemaBuildError::UndefinedTypeReference {
                    type_name: iface_name.to_string(),
                    referenced_from: type_name.to_string(),
                    location: location.to_owned(),
                }),
            }
        }
        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: &ast::schema::Definition,
    ) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Skipping directive definition `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                &schema_def.position,
            );
            let slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            Self::set_root_type(slot, operation, typedef_loc)?;
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        let (name, position, type_) = match type_def {
            TypeDefinition::Enum(def) => (
                &def.name,
                &def.position,
                GraphQLType::Enum(EnumType::from_ast(file_path, def)),
            ),

            TypeDefinition::InputObject(def) => (
                &def.name,
                &def.position,
                GraphQLType::InputObject(InputObjectType::from_ast(file_path, def)),
            ),

            TypeDefinition::Interface(def) => {
                Self::check_duplicate_fields(&def.name, file_path, &def.fields)?;
                (
                    &def.name,
                    &def.position,
                    GraphQLType::Interface(InterfaceType::from_ast(file_path, def)),
                )
            },

            TypeDefinition::Object(def) => {
                Self::check_duplicate_fields(&def.name, file_path, &def.fields)?;
                (
                    &def.name,
                    &def.position,
                    GraphQLType::Object(ObjectType::from_ast(file_path, def)),
                )
            },

            TypeDefinition::Scalar(def) => (
                &def.name,
                &def.position,
                GraphQLType::Scalar(ScalarType::from_ast(file_path, def)),
            ),

            TypeDefinition::Union(def) => (
                &def.name,
                &def.position,
                GraphQLType::Union(UnionType::from_ast(file_path, def)),
            ),
        };

        self.add_new_type(
            name,
            loc::SourceLocation::from_schema_ast_position(file_path, position),
            type_,
        )
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        type_ext: &ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension;
        let (name, position) = match type_ext {
            TypeExtension::Object(ext) => {
                self.object_extensions.push((
                    file_path.map(|path| path.to_path_buf()),
                    ext.to_owned(),
                ));
                return Ok(());
            },
            TypeExtension::Enum(ext) => (&ext.name, &ext.position),
            TypeExtension::InputObject(ext) => (&ext.name, &ext.position),
            TypeExtension::Interface(ext) => (&ext.name, &ext.position),
            TypeExtension::Scalar(ext) => (&ext.name, &ext.position),
            TypeExtension::Union(ext) => (&ext.name, &ext.position),
        };
        Err(SchemaBuildError::UnsupportedTypeExtension {
            type_name: name.to_owned(),
            location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                position,
            ),
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
