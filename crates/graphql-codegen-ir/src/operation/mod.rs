//! Owned, location-annotated operation and fragment definitions converted
//! from the `graphql-parser` executable-document AST.

mod executable_document;
mod executable_document_build_error;
mod field_selection;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;

pub use executable_document::ExecutableDocument;
pub use executable_document_build_error::ExecutableDocumentBuildError;
pub use field_selection::FieldSelection;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;

#[cfg(test)]
mod tests;
