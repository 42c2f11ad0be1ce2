pub mod check;
pub mod dispatch;
pub mod expand;
pub mod list;

/// Process exit code when any diagnostic was reported.
pub const EXIT_DIAGNOSTICS: i32 = 1;
