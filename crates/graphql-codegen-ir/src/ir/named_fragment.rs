use crate::ir::Entity;
use crate::ir::EntityField;
use crate::ir::EntityStorage;
use crate::ir::FragmentRegistry;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::ir::entity_graph_builder::EntityGraphBuilder;
use crate::operation::FragmentDefinition;
use crate::schema::Schema;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IrBuildError>;

/// A named fragment compiled independently of the operations that spread
/// it.
///
/// Built once per run by the [`FragmentRegistry`] and shared through
/// [`Arc`]; immutable afterwards. Two `NamedFragment`s are equal only if they
/// have equal definitions *and* are the same built instance.
#[derive(Debug, serde::Serialize)]
pub struct NamedFragment {
    definition: FragmentDefinition,
    entities: EntityStorage,
    #[serde(serialize_with = "super::serialize_map_keys")]
    referenced_fragments: IndexMap<String, Arc<NamedFragment>>,
    root_field: EntityField,
    #[serde(skip)]
    root_location: Location,
}
impl NamedFragment {
    pub(super) fn build(
        schema: &Schema,
        registry: &mut FragmentRegistry,
        definition: FragmentDefinition,
    ) -> Result<Self> {
        log::debug!("Building fragment `{}`.", definition.name());

        let fragment_type = schema.get_type(definition.type_condition())?;
        if !fragment_type.is_composite() {
            return Err(IrBuildError::NotACompositeType {
                type_name: fragment_type.name().to_string(),
                kind: GraphQLTypeKind::from(fragment_type),
            });
        }

        let root_location = Location::named_fragment(
            definition.name(),
            definition.type_condition(),
        );
        let mut builder = EntityGraphBuilder::new(schema, registry);
        builder.visit_selection_set(
            &root_location,
            definition.type_condition(),
            definition.selection_set(),
        )?;
        let (entities, referenced_fragments) = builder.finish();

        let root_field = EntityField::new(
            definition.name(),
            definition.name(),
            TypeAnnotation::named(definition.type_condition(), false),
            Some(root_location.to_owned()),
            definition.type_condition(),
        );

        log::debug!(
            "Built fragment `{}` ({} entities).",
            definition.name(),
            entities.len(),
        );

        Ok(Self {
            definition,
            entities,
            referenced_fragments,
            root_field,
            root_location,
        })
    }

    pub fn definition(&self) -> &FragmentDefinition {
        &self.definition
    }

    /// All entities of this fragment, the root entity first.
    pub fn entities(&self) -> &EntityStorage {
        &self.entities
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// Every named fragment this fragment spreads, directly or transitively,
    /// in first-encounter order.
    pub fn referenced_fragments(&self) -> &IndexMap<String, Arc<NamedFragment>> {
        &self.referenced_fragments
    }

    pub fn root_entity(&self) -> &Entity {
        &self.entities[self.root_location()]
    }

    /// A synthetic field named after the fragment, typed as the non-null
    /// fragment type, whose entity is the fragment's root entity.
    pub fn root_field(&self) -> &EntityField {
        &self.root_field
    }

    pub fn root_location(&self) -> &Location {
        &self.root_location
    }

    pub fn type_condition(&self) -> &str {
        self.definition.type_condition()
    }
}
impl PartialEq for NamedFragment {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
            && std::ptr::eq(&self.root_field, &other.root_field)
    }
}
impl Eq for NamedFragment {}
impl Hash for NamedFragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition.hash(state);
        std::ptr::hash(&self.root_field, state);
    }
}
