//! Swift source rendering for synthesized declarations.

use vft_core::synth::ACCESSOR_VISIBILITY;
use vft_core::{
    Argument, Effects, ForwardingCall, Layout, SynthesizedDeclaration, SynthesizedFunction,
    SynthesizedKind, SynthesizedParameter, SynthesizedProperty,
};

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    layout: Layout,
    indent_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::expanded()
    }
}

impl Renderer {
    #[must_use]
    pub const fn new(layout: Layout, indent_width: usize) -> Self {
        Self {
            layout,
            indent_width,
        }
    }

    #[must_use]
    pub const fn expanded() -> Self {
        Self::new(Layout::Expanded, DEFAULT_INDENT_WIDTH)
    }

    #[must_use]
    pub const fn compact() -> Self {
        Self::new(Layout::Compact, DEFAULT_INDENT_WIDTH)
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Render one declaration, attributes first.
    #[must_use]
    pub fn render(&self, declaration: &SynthesizedDeclaration) -> String {
        let body = match &declaration.kind {
            SynthesizedKind::Property(property) => self.property(property),
            SynthesizedKind::Function(function) => self.function(function),
        };

        if declaration.attributes.is_empty() {
            return body;
        }
        let separator = match self.layout {
            Layout::Expanded => "\n",
            Layout::Compact => " ",
        };
        format!(
            "{}{separator}{body}",
            declaration.attributes.join(separator)
        )
    }

    /// Render several declarations separated by a blank line (or a space).
    #[must_use]
    pub fn render_all(&self, declarations: &[SynthesizedDeclaration]) -> String {
        let separator = match self.layout {
            Layout::Expanded => "\n\n",
            Layout::Compact => " ",
        };
        declarations
            .iter()
            .map(|declaration| self.render(declaration))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn property(&self, property: &SynthesizedProperty) -> String {
        let header = format!(
            "{ACCESSOR_VISIBILITY} {}var {}: {}",
            static_keyword(property.is_static),
            property.name,
            property.ty
        );
        let getter = property.target.clone();
        let setter = property
            .settable
            .then(|| format!("{} = newValue", property.target));

        match self.layout {
            Layout::Compact => {
                let mut text = format!("{header} {{ get {{ {getter} }}");
                if let Some(setter) = setter {
                    text.push_str(&format!(" set {{ {setter} }}"));
                }
                text.push_str(" }");
                text
            }
            Layout::Expanded => {
                let one = self.indent(1);
                let two = self.indent(2);
                let mut text = format!("{header} {{\n{one}get {{\n{two}{getter}\n{one}}}\n");
                if let Some(setter) = setter {
                    text.push_str(&format!("{one}set {{\n{two}{setter}\n{one}}}\n"));
                }
                text.push('}');
                text
            }
        }
    }

    fn function(&self, function: &SynthesizedFunction) -> String {
        let mut header = format!(
            "{ACCESSOR_VISIBILITY} {}func {}{}({})",
            static_keyword(function.is_static),
            function.name,
            function.generic_params.as_deref().unwrap_or_default(),
            parameter_clause(&function.parameters)
        );
        header.push_str(&effects_clause(&function.effects));
        if let Some(return_type) = &function.return_type {
            header.push_str(&format!(" -> {return_type}"));
        }
        if let Some(where_clause) = &function.where_clause {
            header.push_str(&format!(" {where_clause}"));
        }

        let call = forwarding_call(&function.body);
        match self.layout {
            Layout::Compact => format!("{header} {{ {call} }}"),
            Layout::Expanded => format!("{header} {{\n{}{call}\n}}", self.indent(1)),
        }
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}

const fn static_keyword(is_static: bool) -> &'static str {
    if is_static { "static " } else { "" }
}

fn parameter_clause(parameters: &[SynthesizedParameter]) -> String {
    parameters
        .iter()
        .map(|param| {
            let mut text = format!("{} {}: {}", param.label.as_str(), param.name, param.ty);
            if let Some(default_value) = &param.default_value {
                text.push_str(&format!(" = {default_value}"));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn effects_clause(effects: &Effects) -> String {
    let mut text = String::new();
    if effects.is_async {
        text.push_str(" async");
    }
    if let Some(throws) = &effects.throws {
        text.push(' ');
        text.push_str(throws);
    }
    text
}

fn forwarding_call(call: &ForwardingCall) -> String {
    let mut text = String::new();
    if call.is_try {
        text.push_str("try ");
    }
    if call.is_await {
        text.push_str("await ");
    }
    let arguments = call
        .arguments
        .iter()
        .map(argument)
        .collect::<Vec<_>>()
        .join(", ");
    text.push_str(&format!("{}({arguments})", call.callee));
    text
}

fn argument(argument: &Argument) -> String {
    let ampersand = if argument.is_inout { "&" } else { "" };
    match &argument.label {
        Some(label) => format!("{label}: {ampersand}{}", argument.value),
        None => format!("{ampersand}{}", argument.value),
    }
}
