use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console_core::dbt_form::FormMode;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Inspect catalog console settings menus, dbt forms and placeholders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the console config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the settings menu visible to a user
    Menu {
        /// JSON permissions file (defaults to the configured one)
        #[arg(long, value_name = "PATH")]
        permissions: Option<PathBuf>,
        /// Treat the user as an administrator
        #[arg(long)]
        admin: bool,
        /// Current route, used to highlight the selected item
        #[arg(long, value_name = "PATH")]
        route: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the path a menu key navigates to
    Navigate {
        /// Menu key, e.g. `access.roles`
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the dbt configuration form for a source
    Form {
        /// dbt source: cloud, local, http, s3, gcs or none
        source: String,
        /// JSON file with the pipeline's dbt settings
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
        /// Form mode
        #[arg(long, value_enum, default_value_t = ModeArg::Add)]
        mode: ModeArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration a dbt source would submit
    Submit {
        /// dbt source: cloud, local, http, s3, gcs or none
        source: String,
        /// JSON file with the pipeline's dbt settings
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
        /// Draft edit applied before submitting, `key=value`
        #[arg(long = "set", value_name = "KEY=VALUE")]
        edits: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the placeholder shown for a kind
    Placeholder {
        /// create, assign, filter, permission, custom or anything else for no data
        kind: String,
        /// Illustration size (defaults to the configured one)
        #[arg(long, value_name = "SIZE")]
        size: Option<String>,
        /// Heading text
        #[arg(long)]
        heading: Option<String>,
        /// Documentation link
        #[arg(long, value_name = "URL")]
        doc: Option<String>,
        /// Whether the user may act on the placeholder
        #[arg(long)]
        permission: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Add,
    Edit,
}

impl From<ModeArg> for FormMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Add => Self::Add,
            ModeArg::Edit => Self::Edit,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
