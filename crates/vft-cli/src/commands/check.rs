use serde::Serialize;
use vft_config::VftConfig;
use vft_core::Diagnostic;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::EXIT_DIAGNOSTICS;
use crate::output::output;
use crate::pipeline::{self, Overrides, Settings};

#[derive(Debug, Serialize)]
struct FileDiagnostics {
    path: String,
    sites: usize,
    diagnostics: Vec<Diagnostic>,
}

/// Handle `vft check`.
pub fn handle(args: &CheckArgs, config: &VftConfig, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let config = Overrides {
        strict_init: args.strict_init,
        ..Overrides::default()
    }
    .apply(config);
    let settings = Settings::from_config(&config);

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let report = pipeline::process_file(path, &settings)?;
        results.push(FileDiagnostics {
            path: report.path.clone(),
            sites: report.sites.len(),
            diagnostics: report.diagnostics().cloned().collect(),
        });
    }

    let errors: usize = results.iter().map(|file| file.diagnostics.len()).sum();
    output(&results, flags.format, |results| text_lines(results))?;
    if !flags.quiet {
        eprintln!("checked {} file(s): {errors} error(s)", results.len());
    }

    Ok(if errors > 0 { EXIT_DIAGNOSTICS } else { 0 })
}

fn text_lines(results: &[FileDiagnostics]) -> String {
    let mut text = String::new();
    for file in results {
        for diagnostic in &file.diagnostics {
            text.push_str(&format!("{}:{diagnostic}\n", file.path));
        }
    }
    text
}
