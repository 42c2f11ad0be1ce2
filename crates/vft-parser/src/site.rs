//! Located annotated declarations.

use std::ops::Range;

use serde::Serialize;
use vft_core::ExpansionRequest;

/// One annotated declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSite {
    pub request: ExpansionRequest,
    /// Byte range of the whole declaration, attributes included.
    pub declaration_range: Range<usize>,
    /// Byte range of the annotation attribute itself.
    pub annotation_range: Range<usize>,
    /// Leading whitespace of the line the declaration starts on.
    pub indentation: String,
}

/// A Swift file together with the annotated sites found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    pub path: String,
    #[serde(skip)]
    pub source: String,
    pub sites: Vec<AnnotatedSite>,
}

impl AnnotatedSite {
    /// One-based line the declaration starts on.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.request.anchor.span.map_or(0, |span| span.start_line)
    }
}
