use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use std::path::Path;

/// A query, mutation or subscription as written in an executable document.
///
/// The `{ ... }` query shorthand becomes an anonymous [`OperationKind::Query`].
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct OperationDefinition {
    pub(super) def_location: loc::SourceLocation,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
}
impl OperationDefinition {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        ast_op: &ast::operation::OperationDefinition,
    ) -> Self {
        use graphql_parser::query::OperationDefinition as OpDef;
        let (kind, name, position, ast_sel_set) = match ast_op {
            OpDef::Mutation(op) =>
                (OperationKind::Mutation, op.name.as_deref(), &op.position, &op.selection_set),
            OpDef::Query(op) =>
                (OperationKind::Query, op.name.as_deref(), &op.position, &op.selection_set),
            OpDef::SelectionSet(sel_set) =>
                (OperationKind::Query, None, &sel_set.span.0, sel_set),
            OpDef::Subscription(op) =>
                (OperationKind::Subscription, op.name.as_deref(), &op.position, &op.selection_set),
        };

        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                position,
            ),
            kind,
            name: name.map(str::to_string),
            selection_set: SelectionSet::from_ast(file_path, ast_sel_set),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
