use crate::ast;
use crate::loc;
use crate::operation::SelectionSet;
use std::path::Path;

/// A field selected within some [`SelectionSet`] (e.g. `hero: leader { name }`).
///
/// The field is not resolved against a schema here; that happens while the
/// IR is built.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl FieldSelection {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_field: &ast::operation::Field,
    ) -> Self {
        Self {
            alias: ast_field.alias.to_owned(),
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast_field.position,
            ),
            name: ast_field.name.to_owned(),
            selection_set: SelectionSet::from_ast(
                file_path,
                &ast_field.selection_set,
            ),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The name of the field on the schema type (never the alias).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    /// Sub-selections of this field. Empty for leaf fields.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
