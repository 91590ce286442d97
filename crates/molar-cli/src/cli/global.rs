use clap::ValueEnum;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON.
    Json,
    /// Aligned columns.
    Table,
    /// Single-line JSON.
    Raw,
}

/// Flags shared by every command.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub project: Option<String>,
    /// Never call the hosted functions, even when configured.
    pub offline: bool,
}
