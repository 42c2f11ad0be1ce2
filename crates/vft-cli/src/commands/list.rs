use vft_config::VftConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;
use crate::pipeline::{self, FileReport, Settings};

/// Handle `vft list`.
pub fn handle(args: &ListArgs, config: &VftConfig, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let settings = Settings::from_config(config);
    let report = pipeline::process_file(&args.file, &settings)?;
    output(&report, flags.format, text_lines)?;
    Ok(0)
}

fn text_lines(report: &FileReport) -> String {
    report
        .sites
        .iter()
        .map(|site| {
            let accessors = if site.accessors.is_empty() {
                "(none)".to_string()
            } else {
                site.accessors.join(", ")
            };
            format!(
                "{}:{}: {} {} -> {accessors}",
                report.path, site.line, site.shape, site.declaration
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
