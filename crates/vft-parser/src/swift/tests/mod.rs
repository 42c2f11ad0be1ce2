use super::*;
pub(super) use crate::site::AnnotatedSite;
pub(super) use vft_core::AnnotatedDeclaration;

mod sites;

const ANNOTATION: &str = "VisibleForTesting";

fn scan_snippet(source: &str) -> Vec<AnnotatedSite> {
    scan_source(source, ANNOTATION)
}

fn fixture_sites() -> Vec<AnnotatedSite> {
    let source = include_str!("../../../tests/fixtures/sample.swift");
    scan_source(source, ANNOTATION)
}

fn find_by_description<'a>(sites: &'a [AnnotatedSite], description: &str) -> &'a AnnotatedSite {
    sites
        .iter()
        .find(|site| site.request.anchor.description == description)
        .unwrap_or_else(|| panic!("should find site described as '{description}'"))
}
