use pretty_assertions::assert_eq;
use vft_core::EnclosingKind;

use crate::swift::scan_source;

use super::*;

#[test]
fn sibling_attributes_exclude_the_annotation() {
    let sites = fixture_sites();
    let reset = find_by_description(&sites, "func reset");
    assert_eq!(reset.request.attributes, vec!["@MainActor".to_string()]);
}

#[test]
fn enclosing_type_is_reported() {
    let sites = fixture_sites();

    let member = find_by_description(&sites, "var myAccessibleVar");
    let enclosing = member
        .request
        .enclosing
        .as_ref()
        .expect("class member has an enclosing type");
    assert_eq!(enclosing.kind, EnclosingKind::Class);
    assert_eq!(enclosing.name.as_deref(), Some("Test"));
    assert!(!enclosing.is_final);

    let total = find_by_description(&sites, "var total");
    assert_eq!(
        total.request.enclosing.as_ref().map(|context| context.kind),
        Some(EnclosingKind::Struct)
    );
}

#[test]
fn final_class_is_not_subclassable() {
    let source = "final class Sealed {\n    @VisibleForTesting\n    init(seed: UInt64) {}\n}\n";
    let sites = scan_snippet(source);

    assert_eq!(sites.len(), 1);
    let enclosing = sites[0]
        .request
        .enclosing
        .as_ref()
        .expect("init has an enclosing type");
    assert!(enclosing.is_final);
    assert_eq!(enclosing.is_subclassable(), Some(false));
}

#[test]
fn top_level_declaration_has_no_enclosing_type() {
    let sites = scan_snippet("@VisibleForTesting\nvar myVar: Int\n");
    assert_eq!(sites.len(), 1);
    assert!(sites[0].request.enclosing.is_none());
}

#[test]
fn ranges_and_indentation_locate_the_declaration() {
    let source = "class A {\n    @VisibleForTesting\n    private var x: Int\n}\n";
    let sites = scan_snippet(source);

    assert_eq!(sites.len(), 1);
    let site = &sites[0];
    assert_eq!(&source[site.annotation_range.clone()], "@VisibleForTesting");
    assert!(source[site.declaration_range.clone()].starts_with("@VisibleForTesting"));
    assert!(source[site.declaration_range.clone()].ends_with("private var x: Int"));
    assert_eq!(site.indentation, "    ");
    assert_eq!(site.line(), 2);
}

#[test]
fn qualified_annotation_is_recognized() {
    let sites = scan_snippet("@Testing.VisibleForTesting\nfunc f() {}\n");
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].request.anchor.description, "func f");
}

#[test]
fn custom_annotation_name_is_honored() {
    let source = "@TestVisible\nfunc f() {}\n\n@VisibleForTesting\nfunc g() {}\n";
    let sites = scan_source(source, "TestVisible");
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].request.anchor.description, "func f");
}

#[test]
fn sites_are_returned_in_source_order() {
    let sites = fixture_sites();
    assert!(
        sites
            .windows(2)
            .all(|pair| pair[0].declaration_range.start < pair[1].declaration_range.start)
    );
}
