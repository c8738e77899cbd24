use crate::ast;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use std::path::Path;

#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_selection: &ast::operation::Selection,
    ) -> Self {
        match ast_selection {
            ast::operation::Selection::Field(ast_field) =>
                Self::Field(FieldSelection::from_ast(file_path, ast_field)),

            ast::operation::Selection::FragmentSpread(ast_spread) =>
                Self::FragmentSpread(FragmentSpread::from_ast(file_path, ast_spread)),

            ast::operation::Selection::InlineFragment(ast_inline) =>
                Self::InlineFragment(InlineFragment::from_ast(file_path, ast_inline)),
        }
    }
}
