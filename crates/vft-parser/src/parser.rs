//! ast-grep wrapper and Swift source detection.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether a path names a Swift source file.
#[must_use]
pub fn is_swift_path(file_path: &str) -> bool {
    Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "swift")
}

/// Parse Swift source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Swift.ast_grep(source)
}

/// Read a Swift file from disk, rejecting other languages.
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for non-`.swift` paths and
/// `ParserError::Read` when the file cannot be read.
pub fn read_swift_file(file_path: &str) -> Result<String, ParserError> {
    if !is_swift_path(file_path) {
        return Err(ParserError::UnsupportedLanguage(file_path.to_string()));
    }
    std::fs::read_to_string(file_path).map_err(|source| ParserError::Read {
        path: file_path.to_string(),
        source,
    })
}
