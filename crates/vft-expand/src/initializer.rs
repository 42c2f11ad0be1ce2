//! Initializer factory synthesis.

use vft_core::naming::INIT_FACTORY;
use vft_core::{InitializerDecl, SynthesizedFunction, SynthesizedKind};

use crate::forwarding;

const DELEGATE: &str = "Self.init";

/// `static func _test_init(...) -> Self` delegating to `Self.init(...)`.
///
/// `Self.init` is valid for both final and subclassable enclosing types as
/// long as the delegated-to initializer is inherited by subclasses; whether
/// that holds is not decided here.
pub(crate) fn synthesize(init: &InitializerDecl) -> SynthesizedKind {
    SynthesizedKind::Function(SynthesizedFunction {
        name: INIT_FACTORY.to_string(),
        is_static: true,
        generic_params: init.generic_params.clone(),
        parameters: forwarding::parameters(&init.parameters),
        effects: init.effects.clone(),
        return_type: Some(format!("Self{}", init.failability.suffix())),
        where_clause: init.where_clause.clone(),
        body: forwarding::call(DELEGATE, &init.parameters, &init.effects),
    })
}
