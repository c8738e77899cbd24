use crate::ast;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ExecutableDocumentBuildError>;

/// The operations and named fragments of one executable document, in
/// declaration order.
///
/// Fragment names are not checked for uniqueness here; the IR builder
/// reports duplicates when it registers them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExecutableDocument {
    pub(super) file_path: Option<PathBuf>,
    pub(super) fragments: Vec<FragmentDefinition>,
    pub(super) operations: Vec<OperationDefinition>,
}
impl ExecutableDocument {
    pub fn from_ast(
        file_path: Option<&Path>,
        ast_doc: &ast::operation::Document,
    ) -> Result<Self> {
        let mut fragments = vec![];
        let mut operations: Vec<OperationDefinition> = vec![];
        let mut named_ops = HashMap::new();
        for def in &ast_doc.definitions {
            match def {
                ast::operation::Definition::Fragment(ast_frag) =>
                    fragments.push(FragmentDefinition::from_ast(file_path, ast_frag)),

                ast::operation::Definition::Operation(ast_op) => {
                    let op = OperationDefinition::from_ast(file_path, ast_op);
                    if let Some(op_name) = op.name()
                        && let Some(prev_idx) = named_ops.insert(
                            op_name.to_string(),
                            operations.len(),
                        ) {
                        return Err(ExecutableDocumentBuildError::DuplicateOperationName {
                            operation_name: op_name.to_string(),
                            location1: operations[prev_idx].def_location().to_owned(),
                            location2: op.def_location().to_owned(),
                        });
                    }
                    operations.push(op);
                },
            }
        }

        if operations.len() > 1
            && let Some(anon_op) = operations.iter().find(|op| op.name().is_none()) {
            return Err(ExecutableDocumentBuildError::AnonymousOperationNotAlone {
                location: anon_op.def_location().to_owned(),
            });
        }

        log::debug!(
            "Loaded executable document with {} operation(s) and {} fragment(s).",
            operations.len(),
            fragments.len(),
        );

        Ok(Self {
            file_path: file_path.map(|path| path.to_path_buf()),
            fragments,
            operations,
        })
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc =
            ast::operation::parse(content.as_ref())
                .map_err(|err| ExecutableDocumentBuildError::ParseError {
                    file: file_path.map(|path| path.to_path_buf()),
                    err: err.to_string(),
                })?;
        Self::from_ast(file_path, &ast_doc)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn fragments(&self) -> &[FragmentDefinition] {
        self.fragments.as_slice()
    }

    /// Find an operation by name.
    pub fn operation(&self, name: &str) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| op.name() == Some(name))
    }

    pub fn operations(&self) -> &[OperationDefinition] {
        self.operations.as_slice()
    }
}
