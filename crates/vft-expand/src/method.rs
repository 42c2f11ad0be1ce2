//! Method accessor synthesis.

use vft_core::naming::{is_identifier, method_accessor_name};
use vft_core::{MethodDecl, SynthesizedFunction, SynthesizedKind};

use crate::forwarding;

/// `_test_<name>` forwarding every argument to the original method.
///
/// Operator methods have no nameable accessor and yield `None`.
pub(crate) fn synthesize(method: &MethodDecl) -> Option<SynthesizedKind> {
    if !is_identifier(&method.name) {
        tracing::debug!(name = %method.name, "skipping operator method");
        return None;
    }
    if !forwarding::forwardable(&method.name, &method.parameters) {
        return None;
    }

    Some(SynthesizedKind::Function(SynthesizedFunction {
        name: method_accessor_name(&method.name),
        is_static: method.is_static,
        generic_params: method.generic_params.clone(),
        parameters: forwarding::parameters(&method.parameters),
        effects: method.effects.clone(),
        return_type: method.return_type.clone(),
        where_clause: method.where_clause.clone(),
        body: forwarding::call(&method.name, &method.parameters, &method.effects),
    }))
}
