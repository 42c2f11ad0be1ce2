//! # vft-parser
//!
//! ast-grep-based Swift frontend for vft.
//!
//! Plays the host role for the expansion engine: it finds every declaration
//! carrying the testing annotation, lowers it to an
//! [`AnnotatedDeclaration`](vft_core::AnnotatedDeclaration), collects the
//! attributes attached next to the annotation, and records where the
//! declaration sits so accessors can be spliced back in.

pub mod error;
pub mod parser;
pub mod site;
pub mod swift;

pub use error::ParserError;
pub use site::{AnnotatedSite, ScannedFile};
pub use swift::{scan, scan_file, scan_source};
