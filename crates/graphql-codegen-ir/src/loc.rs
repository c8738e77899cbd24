use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: crate::ast::AstPos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema or executable-document element was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (built-in scalars, `__typename`).
    GraphQLBuiltIn,
    ExecutableDocument(FilePosition),
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file: Option<&Path>,
        pos: &crate::ast::AstPos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, *pos))
    }

    pub(crate) fn from_execdoc_ast_position(
        file: Option<&Path>,
        pos: &crate::ast::AstPos,
    ) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file, *pos))
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::ExecutableDocument(pos) | Self::Schema(pos) => Some(pos),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::ExecutableDocument(pos) | Self::Schema(pos) => pos.fmt(f),
        }
    }
}
