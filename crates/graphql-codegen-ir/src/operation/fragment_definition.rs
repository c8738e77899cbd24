use crate::ast;
use crate::loc;
use crate::operation::SelectionSet;
use std::path::Path;

/// A named fragment (`fragment Name on Type { ... }`) as written in an
/// executable document.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct FragmentDefinition {
    pub(super) def_location: loc::SourceLocation,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl FragmentDefinition {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_frag: &ast::operation::FragmentDefinition,
    ) -> Self {
        let ast::operation::TypeCondition::On(type_condition) =
            &ast_frag.type_condition;
        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast_frag.position,
            ),
            name: ast_frag.name.to_owned(),
            selection_set: SelectionSet::from_ast(
                file_path,
                &ast_frag.selection_set,
            ),
            type_condition: type_condition.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type this fragment selects against.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
