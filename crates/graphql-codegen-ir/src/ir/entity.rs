use crate::ir::EntityField;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::ir::entity_field::insert_type_condition;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, IrBuildError>;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(super) struct FieldKey {
    response_key: String,
    type_annotation: TypeAnnotation,
}

/// The merged selections known to apply at one [`Location`] of a
/// compilation unit.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Entity {
    #[serde(serialize_with = "super::serialize_map_values")]
    pub(super) fields: IndexMap<FieldKey, EntityField>,
    pub(super) location: Location,
    pub(super) merged_fragments: IndexSet<String>,
    pub(super) root_type: String,
}
impl Entity {
    pub(super) fn new(location: Location) -> Self {
        Self {
            fields: IndexMap::new(),
            root_type: location.type_name().to_string(),
            location,
            merged_fragments: IndexSet::new(),
        }
    }

    /// Every merged field in first-selected order. A response key appears
    /// more than once only when its contributions have different types under
    /// non-overlapping type conditions.
    pub fn fields(&self) -> impl Iterator<Item = &EntityField> {
        self.fields.values()
    }

    /// All merged fields that share the given response key.
    pub fn fields_for_response_key<'a>(
        &'a self,
        response_key: &'a str,
    ) -> impl Iterator<Item = &'a EntityField> {
        self.fields.values().filter(move |field| field.response_key() == response_key)
    }

    /// Shorthand for the single field with the given response key, if there
    /// is exactly one.
    pub fn field<'a>(&'a self, response_key: &'a str) -> Option<&'a EntityField> {
        let mut matches = self.fields_for_response_key(response_key);
        match (matches.next(), matches.next()) {
            (Some(field), None) => Some(field),
            _ => None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Names of the named fragments whose selections were merged in here.
    pub fn merged_fragments(&self) -> &IndexSet<String> {
        &self.merged_fragments
    }

    /// The declared response type of this entity.
    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    /// Merges one field contribution into this entity.
    ///
    /// A contribution whose response key is already present with a different
    /// [`TypeAnnotation`] under an overlapping type condition is a
    /// [`IrBuildError::FieldMergeConflict`]. Otherwise the type conditions of
    /// matching contributions are unioned.
    pub(super) fn merge_field(
        &mut self,
        schema: &Schema,
        mut incoming: EntityField,
    ) -> Result<()> {
        for existing in self.fields.values() {
            if existing.response_key != incoming.response_key
                || existing.type_annotation.is_merge_compatible_with(&incoming.type_annotation) {
                continue;
            }
            for existing_cond in &existing.type_conditions {
                for incoming_cond in &incoming.type_conditions {
                    if schema.type_conditions_overlap(existing_cond, incoming_cond)? {
                        return Err(IrBuildError::FieldMergeConflict {
                            location: self.location.to_owned(),
                            response_key: incoming.response_key.to_owned(),
                            existing: existing.type_annotation.to_owned(),
                            conflicting: incoming.type_annotation.to_owned(),
                        });
                    }
                }
            }
        }

        let key = FieldKey {
            response_key: incoming.response_key.to_owned(),
            type_annotation: incoming.type_annotation.to_owned(),
        };
        match self.fields.get_mut(&key) {
            Some(existing) => {
                for type_condition in &incoming.type_conditions {
                    insert_type_condition(
                        schema,
                        &mut existing.type_conditions,
                        type_condition,
                    )?;
                }
                if existing.entity.is_none() {
                    existing.entity = incoming.entity;
                }
            },

            None => {
                let incoming_conditions = std::mem::take(&mut incoming.type_conditions);
                for type_condition in &incoming_conditions {
                    insert_type_condition(
                        schema,
                        &mut incoming.type_conditions,
                        type_condition,
                    )?;
                }
                self.fields.insert(key, incoming);
            },
        }
        Ok(())
    }
}
