//! Swift scanner: locate annotated declarations and lower them.

use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_core::Node;
use ast_grep_language::SupportLang;
use vft_core::{DeclarationAnchor, ExpansionRequest, SourceSpan};

use crate::error::ParserError;
use crate::parser::{parse_source, read_swift_file};
use crate::site::{AnnotatedSite, ScannedFile};

mod classify;
mod helpers;

/// Declaration kinds that may carry attributes.
///
/// Only the first three lower to a recognized shape; the rest are kept so
/// an annotation on them is still located (and expands to nothing).
const SWIFT_DECLARATION_KINDS: &[&str] = &[
    "property_declaration",
    "function_declaration",
    "init_declaration",
    "subscript_declaration",
    "deinit_declaration",
    "typealias_declaration",
    "class_declaration",
    "protocol_declaration",
    "protocol_function_declaration",
    "protocol_property_declaration",
    "associatedtype_declaration",
];

/// Find every declaration annotated with `@<annotation>` in a parsed tree.
///
/// `source` must be the text `root` was parsed from; it is used to compute
/// each declaration's indentation.
pub fn scan<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    source: &str,
    annotation: &str,
) -> Vec<AnnotatedSite> {
    let matchers: Vec<KindMatcher> = SWIFT_DECLARATION_KINDS
        .iter()
        .map(|kind| KindMatcher::new(kind, SupportLang::Swift))
        .collect();
    let matcher = Any::new(matchers);

    let mut sites = Vec::new();
    for node in root.root().find_all(&matcher) {
        let Some(annotation_node) = helpers::find_annotation(&node, annotation) else {
            continue;
        };
        let site = build_site(&node, &annotation_node, source, annotation);
        tracing::trace!(
            line = site.line(),
            shape = site.request.declaration.shape_name(),
            "found annotated declaration"
        );
        sites.push(site);
    }

    sites.sort_by_key(|site| site.declaration_range.start);
    sites
}

/// Parse `source` and scan it.
#[must_use]
pub fn scan_source(source: &str, annotation: &str) -> Vec<AnnotatedSite> {
    let root = parse_source(source);
    scan(&root, source, annotation)
}

/// Read a `.swift` file and scan it.
///
/// # Errors
/// Returns `ParserError` if the path is not Swift or cannot be read.
pub fn scan_file(path: &str, annotation: &str) -> Result<ScannedFile, ParserError> {
    let source = read_swift_file(path)?;
    let sites = scan_source(&source, annotation);
    tracing::debug!(%path, count = sites.len(), "scanned swift file");
    Ok(ScannedFile {
        path: path.to_string(),
        source,
        sites,
    })
}

fn build_site<D: ast_grep_core::Doc>(
    node: &Node<D>,
    annotation_node: &Node<D>,
    source: &str,
    annotation: &str,
) -> AnnotatedSite {
    let declaration = classify::lower(node);
    let range = node.range();
    let span = SourceSpan {
        start_line: line_number(node.start_pos().line()),
        end_line: line_number(node.end_pos().line()),
        start_byte: range.start,
        end_byte: range.end,
    };
    let anchor = DeclarationAnchor::new(declaration.describe()).with_span(span);

    let mut request = ExpansionRequest::new(declaration)
        .with_attributes(helpers::attached_attributes(node, annotation))
        .with_anchor(anchor);
    request.enclosing = helpers::enclosing_type(node);

    AnnotatedSite {
        request,
        indentation: helpers::line_indentation(source, range.start),
        declaration_range: range,
        annotation_range: annotation_node.range(),
    }
}

fn line_number(zero_based: usize) -> u32 {
    u32::try_from(zero_based + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
