use crate::ir::Entity;
use crate::ir::EntityStorage;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, IrBuildError>;

/// A field selected on an [`Entity`], merged across every selection that
/// reached the entity's [`Location`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntityField {
    pub(super) entity: Option<Location>,
    pub(super) field_name: String,
    pub(super) response_key: String,
    pub(super) type_annotation: TypeAnnotation,
    pub(super) type_conditions: IndexSet<String>,
}
impl EntityField {
    pub(super) fn new(
        response_key: impl Into<String>,
        field_name: impl Into<String>,
        type_annotation: TypeAnnotation,
        entity: Option<Location>,
        type_condition: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            field_name: field_name.into(),
            response_key: response_key.into(),
            type_annotation,
            type_conditions: IndexSet::from([type_condition.into()]),
        }
    }

    /// Resolves the nested entity (for composite-typed fields) within the
    /// storage of the unit that owns this field.
    pub fn entity<'a>(&self, storage: &'a EntityStorage) -> Option<&'a Entity> {
        self.entity.as_ref().and_then(|location| storage.get(location))
    }

    /// [`Location`] of the nested entity, if this field has one.
    pub fn entity_location(&self) -> Option<&Location> {
        self.entity.as_ref()
    }

    /// The field's name on the schema type. Differs from
    /// [`EntityField::response_key()`] when the selection is aliased.
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The type names under which this field is present in the response.
    /// No condition in this set is contained in another.
    pub fn type_conditions(&self) -> &IndexSet<String> {
        &self.type_conditions
    }
}

/// Adds `type_condition` to `conditions` unless an existing condition already
/// covers it, evicting existing conditions that it covers.
///
/// Equivalent conditions (same possible types under different names) collapse
/// to the lexically smaller name so that the outcome is independent of
/// insertion order.
pub(super) fn insert_type_condition(
    schema: &Schema,
    conditions: &mut IndexSet<String>,
    type_condition: &str,
) -> Result<()> {
    let mut subsumed = vec![];
    for existing in conditions.iter() {
        let new_within_existing =
            schema.type_condition_is_within(type_condition, existing)?;
        let existing_within_new =
            schema.type_condition_is_within(existing, type_condition)?;
        match (new_within_existing, existing_within_new) {
            (true, true) if type_condition < existing.as_str() =>
                subsumed.push(existing.to_owned()),
            (true, _) => return Ok(()),
            (false, true) => subsumed.push(existing.to_owned()),
            (false, false) => (),
        }
    }

    for existing in &subsumed {
        conditions.shift_remove(existing);
    }
    conditions.insert(type_condition.to_string());
    Ok(())
}
