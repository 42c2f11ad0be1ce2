use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print a Swift file with test accessors spliced in.
    Expand(ExpandArgs),
    /// Report diagnostics for annotated declarations.
    Check(CheckArgs),
    /// List annotated declarations and the accessors they produce.
    List(ListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExpandArgs {
    /// Swift source file.
    pub file: String,

    /// Render each accessor on a single line.
    #[arg(long)]
    pub compact: bool,

    /// Reject non-required initializers of subclassable classes.
    #[arg(long)]
    pub strict_init: bool,

    /// Leave the annotation attribute in place.
    #[arg(long)]
    pub keep_annotation: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Swift source files.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Reject non-required initializers of subclassable classes.
    #[arg(long)]
    pub strict_init: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Swift source file.
    pub file: String,
}
