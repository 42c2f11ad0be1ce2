//! End-to-end expansion scenarios: declaration in, rendered accessors out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vft_core::{
    AccessorKind, AnnotatedDeclaration, ArgumentLabel, BindingKind, BindingPattern, Effects,
    EnclosingKind, ExpansionRequest, Failability, InitPolicy, InitializerDecl, MethodDecl,
    Parameter, PropertyBinding, PropertyDecl, TypeContext,
};
use vft_expand::{Expander, ExpanderOptions, Renderer};

fn property(binding_kind: BindingKind, name: &str, ty: Option<&str>) -> AnnotatedDeclaration {
    AnnotatedDeclaration::Property(PropertyDecl {
        binding_kind,
        bindings: vec![PropertyBinding {
            pattern: BindingPattern::Identifier(name.to_string()),
            declared_type: ty.map(ToString::to_string),
            accessors: AccessorKind::Stored,
        }],
        is_static: false,
    })
}

fn method(name: &str, parameters: Vec<Parameter>, return_type: Option<&str>) -> AnnotatedDeclaration {
    AnnotatedDeclaration::Method(MethodDecl {
        name: name.to_string(),
        generic_params: None,
        parameters,
        effects: Effects::default(),
        return_type: return_type.map(ToString::to_string),
        where_clause: None,
        is_static: false,
    })
}

fn initializer(is_required: bool, parameters: Vec<Parameter>) -> AnnotatedDeclaration {
    AnnotatedDeclaration::Initializer(InitializerDecl {
        is_required,
        failability: Failability::None,
        generic_params: None,
        parameters,
        effects: Effects::default(),
        where_clause: None,
    })
}

fn param(label: &str, ty: &str) -> Parameter {
    Parameter::new(ArgumentLabel::from_source(label), ty)
}

fn expand_compact(request: &ExpansionRequest) -> Vec<String> {
    let expansion = Expander::default().expand_collecting(request);
    assert!(expansion.diagnostics.is_empty(), "{:?}", expansion.diagnostics);
    expansion
        .declarations
        .iter()
        .map(|declaration| Renderer::compact().render(declaration))
        .collect()
}

#[rstest]
#[case::mutable_property(
    property(BindingKind::Mutable, "myVar", Some("Int")),
    "public var __test_myVar: Int { get { self.myVar } set { self.myVar = newValue } }"
)]
#[case::immutable_property(
    property(BindingKind::Immutable, "myVar", Some("Int")),
    "public var __test_myVar: Int { get { self.myVar } }"
)]
#[case::method_with_labels(
    method("f", vec![param("_", "String"), param("arg", "Int")], Some("Int")),
    "public func _test_f(_ arg0: String, arg arg1: Int) -> Int { f(arg0, arg: arg1) }"
)]
#[case::method_without_parameters(
    method("f", Vec::new(), None),
    "public func _test_f() { f() }"
)]
#[case::method_with_unlabelled_name(
    method("move", vec![param("to", "Point"), param("animated", "Bool")], None),
    "public func _test_move(to arg0: Point, animated arg1: Bool) { move(to: arg0, animated: arg1) }"
)]
#[case::initializer_with_default(
    initializer(true, vec![param("_", "String").with_default("\"default\"")]),
    "public static func _test_init(_ arg0: String = \"default\") -> Self { Self.init(arg0) }"
)]
fn declaration_expands_to_single_accessor(
    #[case] declaration: AnnotatedDeclaration,
    #[case] expected: &str,
) {
    let rendered = expand_compact(&ExpansionRequest::new(declaration));
    assert_eq!(rendered, vec![expected.to_string()]);
}

#[test]
fn attached_attributes_precede_every_accessor_unchanged() {
    let request = ExpansionRequest::new(method("refresh", Vec::new(), None))
        .with_attributes(["@MainActor", "@available(iOS 17, *)"]);

    let rendered = expand_compact(&request);

    assert_eq!(
        rendered,
        vec!["@MainActor @available(iOS 17, *) public func _test_refresh() { refresh() }"]
    );
}

#[test]
fn missing_type_annotation_is_empty_not_error() {
    let expansion = Expander::default()
        .expand_collecting(&ExpansionRequest::new(property(BindingKind::Mutable, "x", None)));
    assert!(expansion.declarations.is_empty());
    assert!(expansion.diagnostics.is_empty());
}

#[test]
fn destructured_binding_is_empty_not_error() {
    let declaration = AnnotatedDeclaration::Property(PropertyDecl {
        binding_kind: BindingKind::Immutable,
        bindings: vec![PropertyBinding {
            pattern: BindingPattern::Destructured("(lhs, rhs)".to_string()),
            declared_type: Some("(Int, Int)".to_string()),
            accessors: AccessorKind::Stored,
        }],
        is_static: false,
    });
    let expansion = Expander::default().expand_collecting(&ExpansionRequest::new(declaration));
    assert!(expansion.declarations.is_empty());
    assert!(expansion.diagnostics.is_empty());
}

#[test]
fn non_required_initializer_in_struct_is_accepted_even_when_strict() {
    let expander = Expander::new(ExpanderOptions {
        init_policy: InitPolicy::Strict,
        ..ExpanderOptions::default()
    });
    let request = ExpansionRequest::new(initializer(false, vec![param("value", "Int")]))
        .with_enclosing(TypeContext::new(EnclosingKind::Struct));

    let expansion = expander.expand_collecting(&request);

    assert!(expansion.diagnostics.is_empty());
    assert_eq!(
        Renderer::compact().render(&expansion.declarations[0]),
        "public static func _test_init(value arg0: Int) -> Self { Self.init(value: arg0) }"
    );
}

#[test]
fn async_throwing_generic_method_expands_in_expanded_layout() {
    let declaration = AnnotatedDeclaration::Method(MethodDecl {
        name: "load".to_string(),
        generic_params: Some("<T: Decodable>".to_string()),
        parameters: vec![param("_", "URL"), param("into", "inout [T]")],
        effects: Effects {
            is_async: true,
            throws: Some("throws".to_string()),
        },
        return_type: Some("Int".to_string()),
        where_clause: None,
        is_static: true,
    });

    let expansion = Expander::default().expand_collecting(&ExpansionRequest::new(declaration));
    let rendered = Renderer::expanded().render_all(&expansion.declarations);

    let expected = "\
public static func _test_load<T: Decodable>(_ arg0: URL, into arg1: inout [T]) async throws -> Int {
    try await load(arg0, into: &arg1)
}";
    assert_eq!(rendered, expected);
}

#[test]
fn expansion_is_deterministic() {
    let request = ExpansionRequest::new(method("f", vec![param("_", "Int")], Some("Int")));
    let expander = Expander::default();
    assert_eq!(
        expander.expand_collecting(&request),
        expander.expand_collecting(&request)
    );
}
