use crate::ast;
use crate::loc;
use crate::operation::SelectionSet;
use std::path::Path;

/// A `... on Type { ... }` (or condition-less `... { ... }`) selection.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct InlineFragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: Option<String>,
}
impl InlineFragment {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_inline: &ast::operation::InlineFragment,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast_inline.position,
            ),
            selection_set: SelectionSet::from_ast(
                file_path,
                &ast_inline.selection_set,
            ),
            type_condition: ast_inline.type_condition.as_ref().map(
                |ast::operation::TypeCondition::On(type_name)| type_name.to_owned(),
            ),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// `None` when the inline fragment has no `on Type` clause; the
    /// enclosing type condition then applies unchanged.
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
