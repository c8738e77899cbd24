use crate::ir::EntityField;
use crate::ir::EntityStorage;
use crate::ir::FragmentRegistry;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::ir::NamedFragment;
use crate::ir::selection_normalizer::NormalizedSelection;
use crate::ir::selection_normalizer::normalize_selection_set;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TYPENAME_FIELD_NAME;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IrBuildError>;

/// Walks the selection sets of one compilation unit, producing its
/// [`EntityStorage`] and the ordered set of named fragments it references.
///
/// Spreads are resolved through the [`FragmentRegistry`] of the current run,
/// which may recursively build other fragments with their own
/// `EntityGraphBuilder`.
pub(super) struct EntityGraphBuilder<'schema, 'reg> {
    entities: EntityStorage,
    referenced_fragments: IndexMap<String, Arc<NamedFragment>>,
    registry: &'reg mut FragmentRegistry,
    schema: &'schema Schema,
}
impl<'schema, 'reg> EntityGraphBuilder<'schema, 'reg> {
    pub(super) fn new(
        schema: &'schema Schema,
        registry: &'reg mut FragmentRegistry,
    ) -> Self {
        Self {
            entities: EntityStorage::default(),
            referenced_fragments: IndexMap::new(),
            registry,
            schema,
        }
    }

    pub(super) fn finish(self) -> (EntityStorage, IndexMap<String, Arc<NamedFragment>>) {
        (self.entities, self.referenced_fragments)
    }

    /// Visits `selection_set` as the selections made on the entity at
    /// `location`, under `type_condition`.
    pub(super) fn visit_selection_set(
        &mut self,
        location: &Location,
        type_condition: &str,
        selection_set: &SelectionSet,
    ) -> Result<()> {
        self.entities.entity_mut_or_create(location);

        for selection in normalize_selection_set(self.schema, selection_set, type_condition)? {
            match selection {
                NormalizedSelection::Field { field, type_condition } =>
                    self.visit_field(location, field, &type_condition)?,

                NormalizedSelection::FragmentSpread { spread, type_condition } =>
                    self.visit_fragment_spread(location, spread, &type_condition)?,

                NormalizedSelection::UnreachableInlineFragment {
                    inline_fragment,
                    type_condition,
                } => self.validate_selection_set(
                    &type_condition,
                    inline_fragment.selection_set(),
                )?,
            }
        }
        Ok(())
    }

    /// Checks `selection_set` under `type_condition` without contributing
    /// anything to this unit's entities: every field must exist, every spread
    /// must resolve (which also runs the fragment cycle guard).
    fn validate_selection_set(
        &mut self,
        type_condition: &str,
        selection_set: &SelectionSet,
    ) -> Result<()> {
        for selection in normalize_selection_set(self.schema, selection_set, type_condition)? {
            match selection {
                NormalizedSelection::Field { field, type_condition } => {
                    let type_annotation = self.field_type_annotation(field, &type_condition)?;
                    let field_type =
                        self.schema.get_type(type_annotation.innermost_type_name())?;
                    if field_type.is_composite() {
                        self.validate_selection_set(field_type.name(), field.selection_set())?;
                    } else if !field.selection_set().is_empty() {
                        return Err(IrBuildError::NotACompositeType {
                            type_name: field_type.name().to_string(),
                            kind: GraphQLTypeKind::from(field_type),
                        });
                    }
                },

                NormalizedSelection::FragmentSpread { spread, .. } => {
                    self.registry.resolve(self.schema, spread.fragment_name())?;
                },

                NormalizedSelection::UnreachableInlineFragment {
                    inline_fragment,
                    type_condition,
                } => self.validate_selection_set(
                    &type_condition,
                    inline_fragment.selection_set(),
                )?,
            }
        }
        Ok(())
    }

    /// The declared type of `field` on `type_condition`.
    fn field_type_annotation(
        &self,
        field: &FieldSelection,
        type_condition: &str,
    ) -> Result<TypeAnnotation> {
        if field.name() == TYPENAME_FIELD_NAME {
            return Ok(TypeAnnotation::named("String", false));
        }
        let schema_field = match self.schema.get_type(type_condition)? {
            GraphQLType::Interface(iface) => iface.field(field.name()),
            GraphQLType::Object(obj) => obj.field(field.name()),
            _ => None,
        };
        Ok(schema_field
            .ok_or_else(|| IrBuildError::UnknownField {
                type_name: type_condition.to_string(),
                field_name: field.name().to_string(),
                location: field.def_location().to_owned(),
            })?
            .type_annotation()
            .to_owned())
    }

    fn add_referenced_fragment(&mut self, fragment: &Arc<NamedFragment>) {
        let nested_fragments =
            std::iter::once((fragment.name(), fragment))
                .chain(fragment.referenced_fragments()
                    .iter()
                    .map(|(name, nested)| (name.as_str(), nested)));

        for (name, nested) in nested_fragments {
            if !self.referenced_fragments.contains_key(name) {
                self.referenced_fragments.insert(name.to_string(), Arc::clone(nested));
            }
        }
    }

    /// Copies the entity at `source` (owned by `fragment`) into this unit's
    /// entity at `target`, restricting every copied field to
    /// `type_condition`. Nested entities are copied recursively to the
    /// matching nested locations under `target`.
    fn merge_fragment_entity(
        &mut self,
        target: &Location,
        fragment: &NamedFragment,
        source: &Location,
        type_condition: &str,
    ) -> Result<()> {
        let source_entity = &fragment.entities()[source];

        let target_entity = self.entities.entity_mut_or_create(target);
        target_entity.merged_fragments.insert(fragment.name().to_string());
        target_entity.merged_fragments.extend(
            source_entity.merged_fragments().iter().cloned(),
        );

        for source_field in source_entity.fields() {
            let mut type_conditions = IndexSet::new();
            for field_condition in source_field.type_conditions() {
                type_conditions.extend(
                    self.schema.intersect_type_conditions(
                        field_condition,
                        type_condition,
                    )?,
                );
            }
            if type_conditions.is_empty() {
                continue;
            }

            let entity = match source_field.entity_location() {
                Some(source_child) => {
                    let child_type = source_child.type_name();
                    let target_child =
                        target.appending(source_field.response_key(), child_type);
                    self.merge_fragment_entity(
                        &target_child,
                        fragment,
                        source_child,
                        child_type,
                    )?;
                    Some(target_child)
                },
                None => None,
            };

            let merged_field = EntityField {
                entity,
                field_name: source_field.field_name().to_string(),
                response_key: source_field.response_key().to_string(),
                type_annotation: source_field.type_annotation().to_owned(),
                type_conditions,
            };
            self.entities
                .entity_mut_or_create(target)
                .merge_field(self.schema, merged_field)?;
        }
        Ok(())
    }

    fn visit_field(
        &mut self,
        location: &Location,
        field: &FieldSelection,
        type_condition: &str,
    ) -> Result<()> {
        let type_annotation = self.field_type_annotation(field, type_condition)?;

        let field_type = self.schema.get_type(type_annotation.innermost_type_name())?;
        let entity =
            if field_type.is_composite() {
                let child_location =
                    location.appending(field.response_key(), field_type.name());
                self.visit_selection_set(
                    &child_location,
                    field_type.name(),
                    field.selection_set(),
                )?;
                Some(child_location)
            } else if !field.selection_set().is_empty() {
                return Err(IrBuildError::NotACompositeType {
                    type_name: field_type.name().to_string(),
                    kind: GraphQLTypeKind::from(field_type),
                });
            } else {
                None
            };

        let entity_field = EntityField::new(
            field.response_key(),
            field.name(),
            type_annotation,
            entity,
            type_condition,
        );
        self.entities
            .entity_mut_or_create(location)
            .merge_field(self.schema, entity_field)
    }

    fn visit_fragment_spread(
        &mut self,
        location: &Location,
        spread: &FragmentSpread,
        type_condition: &str,
    ) -> Result<()> {
        let fragment = self.registry.resolve(self.schema, spread.fragment_name())?;
        self.add_referenced_fragment(&fragment);

        let merge_conditions = self.schema.intersect_type_conditions(
            type_condition,
            fragment.type_condition(),
        )?;
        let fragment_root = fragment.root_location();
        for merge_condition in &merge_conditions {
            self.merge_fragment_entity(
                location,
                &fragment,
                fragment_root,
                merge_condition,
            )?;
        }
        Ok(())
    }
}
