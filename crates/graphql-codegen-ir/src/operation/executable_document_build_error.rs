use crate::loc;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutableDocumentBuildError {
    #[error(
        "An anonymous operation must be the only operation in its executable \
        document"
    )]
    AnonymousOperationNotAlone {
        location: loc::SourceLocation,
    },

    #[error("Multiple operations named `{operation_name}` in one executable document")]
    DuplicateOperationName {
        operation_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Error parsing executable document `{file:?}`: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
