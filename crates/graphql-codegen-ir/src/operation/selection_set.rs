use crate::ast;
use crate::operation::Selection;
use std::path::Path;

/// An ordered list of [`Selection`]s, exactly as written in the document.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_sel_set: &ast::operation::SelectionSet,
    ) -> Self {
        Self {
            selections: ast_sel_set.items
                .iter()
                .map(|ast_selection| Selection::from_ast(file_path, ast_selection))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
