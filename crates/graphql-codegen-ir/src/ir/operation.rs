use crate::ir::Entity;
use crate::ir::EntityField;
use crate::ir::EntityStorage;
use crate::ir::FragmentRegistry;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::ir::NamedFragment;
use crate::ir::entity_graph_builder::EntityGraphBuilder;
use crate::operation::OperationDefinition;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IrBuildError>;

/// The IR of one query, mutation or subscription.
#[derive(Debug, serde::Serialize)]
pub struct Operation {
    definition: OperationDefinition,
    entities: EntityStorage,
    #[serde(serialize_with = "super::serialize_map_keys")]
    referenced_fragments: IndexMap<String, Arc<NamedFragment>>,
    root_field: EntityField,
    #[serde(skip)]
    root_location: Location,
}
impl Operation {
    pub(super) fn build(
        schema: &Schema,
        registry: &mut FragmentRegistry,
        definition: &OperationDefinition,
    ) -> Result<Self> {
        let kind = definition.kind();
        let op_label = definition.name().unwrap_or("<anonymous>");
        log::debug!("Building {kind} `{op_label}`.");

        let root_type = schema
            .root_operation_type(kind)
            .ok_or(IrBuildError::UndefinedRootOperationType { operation: kind })?;

        let root_location = Location::operation(definition.name(), root_type.name());
        let mut builder = EntityGraphBuilder::new(schema, registry);
        builder.visit_selection_set(
            &root_location,
            root_type.name(),
            definition.selection_set(),
        )?;
        let (entities, referenced_fragments) = builder.finish();

        let root_field = EntityField::new(
            "data",
            "data",
            TypeAnnotation::named(root_type.name(), false),
            Some(root_location.to_owned()),
            root_type.name(),
        );

        log::debug!(
            "Built {kind} `{op_label}` ({} entities, {} referenced fragments).",
            entities.len(),
            referenced_fragments.len(),
        );

        Ok(Self {
            definition: definition.to_owned(),
            entities,
            referenced_fragments,
            root_field,
            root_location,
        })
    }

    pub fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    pub fn entities(&self) -> &EntityStorage {
        &self.entities
    }

    pub fn name(&self) -> Option<&str> {
        self.definition.name()
    }

    /// Every named fragment spread by this operation, directly or
    /// transitively, in first-encounter order.
    pub fn referenced_fragments(&self) -> &IndexMap<String, Arc<NamedFragment>> {
        &self.referenced_fragments
    }

    pub fn root_entity(&self) -> &Entity {
        &self.entities[&self.root_location]
    }

    /// The synthetic `data` field, typed as the non-null root operation type.
    pub fn root_field(&self) -> &EntityField {
        &self.root_field
    }

    pub fn root_location(&self) -> &Location {
        &self.root_location
    }
}
