//! Parameter renaming, forwarding-call construction, and attribute propagation.

use vft_core::naming::synthetic_argument;
use vft_core::{
    Argument, ArgumentLabel, Effects, ForwardingCall, Parameter, SynthesizedDeclaration,
    SynthesizedKind, SynthesizedParameter,
};

/// Rename every parameter to `argN`, keeping label, type, and default.
pub(crate) fn parameters(source: &[Parameter]) -> Vec<SynthesizedParameter> {
    source
        .iter()
        .enumerate()
        .map(|(index, param)| SynthesizedParameter {
            label: param.label.clone(),
            name: synthetic_argument(index),
            ty: param.ty.clone(),
            default_value: param.default_value.clone(),
        })
        .collect()
}

/// Arguments passing each `argN` under the original call-site label.
pub(crate) fn arguments(source: &[Parameter]) -> Vec<Argument> {
    source
        .iter()
        .enumerate()
        .map(|(index, param)| Argument {
            label: match &param.label {
                ArgumentLabel::Named(label) => Some(label.clone()),
                ArgumentLabel::Wildcard => None,
            },
            value: synthetic_argument(index),
            is_inout: param.is_inout(),
        })
        .collect()
}

/// Whether every argument can be passed on unchanged.
///
/// A variadic parameter arrives as an array and Swift cannot splat it back
/// into the original call.
pub(crate) fn forwardable(callee: &str, source: &[Parameter]) -> bool {
    match source.iter().position(Parameter::is_variadic) {
        Some(index) => {
            tracing::debug!(%callee, index, "skipping declaration with variadic parameter");
            false
        }
        None => true,
    }
}

pub(crate) fn call(
    callee: impl Into<String>,
    source: &[Parameter],
    effects: &Effects,
) -> ForwardingCall {
    ForwardingCall {
        callee: callee.into(),
        arguments: arguments(source),
        is_try: effects.is_throwing(),
        is_await: effects.is_async,
    }
}

pub(crate) fn propagate_attributes(
    synthesized: Vec<SynthesizedKind>,
    attributes: &[String],
) -> Vec<SynthesizedDeclaration> {
    synthesized
        .into_iter()
        .map(|kind| SynthesizedDeclaration {
            attributes: attributes.to_vec(),
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labelled(label: &str, ty: &str) -> Parameter {
        Parameter::new(ArgumentLabel::from_source(label), ty)
    }

    #[test]
    fn parameters_are_renamed_positionally() {
        let source = vec![
            labelled("_", "String"),
            labelled("arg", "Int").with_default("42"),
        ];

        let renamed = parameters(&source);

        assert_eq!(
            renamed,
            vec![
                SynthesizedParameter {
                    label: ArgumentLabel::Wildcard,
                    name: "arg0".to_string(),
                    ty: "String".to_string(),
                    default_value: None,
                },
                SynthesizedParameter {
                    label: ArgumentLabel::Named("arg".to_string()),
                    name: "arg1".to_string(),
                    ty: "Int".to_string(),
                    default_value: Some("42".to_string()),
                },
            ]
        );
    }

    #[test]
    fn wildcard_arguments_drop_label_and_inout_is_flagged() {
        let source = vec![labelled("_", "inout [Int]"), labelled("times", "Int")];

        let args = arguments(&source);

        assert_eq!(args[0].label, None);
        assert!(args[0].is_inout);
        assert_eq!(args[1].label.as_deref(), Some("times"));
        assert_eq!(args[1].value, "arg1");
        assert!(!args[1].is_inout);
    }

    #[test]
    fn call_marks_try_and_await_from_effects() {
        let effects = Effects {
            is_async: true,
            throws: Some("rethrows".to_string()),
        };
        let forwarded = call("load", &[], &effects);
        assert!(forwarded.is_try);
        assert!(forwarded.is_await);
        assert!(forwarded.arguments.is_empty());
    }
}
