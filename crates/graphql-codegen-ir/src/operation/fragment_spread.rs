use crate::ast;
use crate::loc;
use std::path::Path;

/// A `...FragmentName` selection.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct FragmentSpread {
    pub(super) def_location: loc::SourceLocation,
    pub(super) fragment_name: String,
}
impl FragmentSpread {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_spread: &ast::operation::FragmentSpread,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast_spread.position,
            ),
            fragment_name: ast_spread.fragment_name.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
