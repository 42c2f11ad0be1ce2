use vft_config::VftConfig;

use crate::cli::root_commands::ExpandArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::EXIT_DIAGNOSTICS;
use crate::output::output;
use crate::pipeline::{self, Overrides, Settings};

/// Handle `vft expand`.
///
/// Text output is the spliced source and is withheld when any declaration
/// was rejected; JSON output always carries the per-site results.
pub fn handle(args: &ExpandArgs, config: &VftConfig, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let config = Overrides {
        compact: args.compact,
        strict_init: args.strict_init,
        keep_annotation: args.keep_annotation,
    }
    .apply(config);
    let settings = Settings::from_config(&config);
    let report = pipeline::process_file(&args.file, &settings)?;

    for diagnostic in report.diagnostics() {
        eprintln!("{}:{diagnostic}", report.path);
    }

    match flags.format {
        OutputFormat::Json => output(&report, flags.format, |_| String::new())?,
        OutputFormat::Text if report.has_errors() => {}
        OutputFormat::Text => {
            let spliced = report.spliced(settings.strip_annotation)?;
            output(&spliced, flags.format, Clone::clone)?;
        }
    }

    Ok(if report.has_errors() {
        EXIT_DIAGNOSTICS
    } else {
        0
    })
}
