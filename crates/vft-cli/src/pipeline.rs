//! Scan, expand, and render the annotated declarations of one Swift file.

use std::ops::Range;

use serde::Serialize;
use vft_config::VftConfig;
use vft_core::{Diagnostic, InitPolicy, Layout};
use vft_expand::{Expander, ExpanderOptions, Expansion, Insertion, Renderer};
use vft_parser::{AnnotatedSite, ScannedFile};

/// Effective settings after configuration and command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub annotation: String,
    pub expander: Expander,
    pub renderer: Renderer,
    pub strip_annotation: bool,
}

impl Settings {
    pub fn from_config(config: &VftConfig) -> Self {
        let annotation = config.expansion.annotation_name().to_string();
        Self {
            expander: Expander::new(ExpanderOptions {
                annotation: annotation.clone(),
                init_policy: config.expansion.init_policy,
            }),
            renderer: Renderer::new(config.render.layout, config.render.indent_width),
            strip_annotation: config.expansion.strip_annotation,
            annotation,
        }
    }
}

/// Command-line overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub compact: bool,
    pub strict_init: bool,
    pub keep_annotation: bool,
}

impl Overrides {
    pub fn apply(self, config: &VftConfig) -> VftConfig {
        let mut config = config.clone();
        if self.compact {
            config.render.layout = Layout::Compact;
        }
        if self.strict_init {
            config.expansion.init_policy = InitPolicy::Strict;
        }
        if self.keep_annotation {
            config.expansion.strip_annotation = false;
        }
        config
    }
}

/// Expansion result for one annotated declaration.
#[derive(Debug, Serialize)]
pub struct SiteReport {
    pub line: u32,
    pub shape: &'static str,
    pub declaration: String,
    pub accessors: Vec<String>,
    pub rendered: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    declaration_range: Range<usize>,
    #[serde(skip)]
    annotation_range: Range<usize>,
    #[serde(skip)]
    indentation: String,
}

/// Expansion results for a whole file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(skip)]
    pub source: String,
    pub sites: Vec<SiteReport>,
}

impl FileReport {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.sites.iter().flat_map(|site| site.diagnostics.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().next().is_some()
    }

    /// The source with every accessor block inserted after its declaration.
    pub fn spliced(&self, strip_annotation: bool) -> anyhow::Result<String> {
        let insertions = self
            .sites
            .iter()
            .map(|site| Insertion {
                declaration: site.declaration_range.clone(),
                annotation: strip_annotation.then(|| site.annotation_range.clone()),
                indentation: site.indentation.clone(),
                rendered: site.rendered.clone(),
            })
            .collect::<Vec<_>>();
        Ok(vft_expand::splice(&self.source, &insertions)?)
    }
}

/// Read and process a file from disk.
pub fn process_file(path: &str, settings: &Settings) -> anyhow::Result<FileReport> {
    let scanned = vft_parser::scan_file(path, &settings.annotation)?;
    Ok(process_scanned(scanned, settings))
}

/// Process an already-scanned file.
pub fn process_scanned(scanned: ScannedFile, settings: &Settings) -> FileReport {
    let sites = scanned
        .sites
        .into_iter()
        .map(|site| process_site(site, settings))
        .collect();
    FileReport {
        path: scanned.path,
        source: scanned.source,
        sites,
    }
}

fn process_site(site: AnnotatedSite, settings: &Settings) -> SiteReport {
    let Expansion {
        declarations,
        diagnostics,
    } = settings.expander.expand_collecting(&site.request);

    for diagnostic in &diagnostics {
        tracing::debug!(%diagnostic, "expansion reported a diagnostic");
    }

    SiteReport {
        line: site.line(),
        shape: site.request.declaration.shape_name(),
        declaration: site.request.anchor.description.clone(),
        accessors: declarations
            .iter()
            .map(|declaration| declaration.name().to_string())
            .collect(),
        rendered: declarations
            .iter()
            .map(|declaration| settings.renderer.render(declaration))
            .collect(),
        diagnostics,
        declaration_range: site.declaration_range,
        annotation_range: site.annotation_range,
        indentation: site.indentation,
    }
}
