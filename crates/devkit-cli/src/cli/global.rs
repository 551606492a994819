//! Flags accepted before or after any devkit subcommand.

use clap::Args;
use std::path::PathBuf;

/// Logging, output and config-file flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: warnings by default, `-v` info, `-vv` debug,
    /// `-vvv` trace. `RUST_LOG` takes precedence when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "Log level written to stderr:
    (none)  - warnings and errors
    -v      - info: resolved paths, clipboard backend
    -vv     - debug: every file written
    -vvv    - trace
RUST_LOG overrides this flag."
    )]
    pub verbose: u8,

    /// Keep only the result (the password, the JSON document) and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only results and errors"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` or `output.no_color` in a config file.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Extra TOML file, applied after the user file and `.devkit.toml` and
    /// before `DEVKIT_*` variables. Unlike those files it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Additional configuration file (must exist)"
    )]
    pub config: Option<PathBuf>,

    /// Falls back to `output.format` from config while left at `auto`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format: auto, human, plain or json"
    )]
    pub output_format: OutputFormat,
}

/// How results and status lines are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored status lines with icons.
    Human,
    /// Same lines without ANSI codes.
    Plain,
    /// One JSON document per command; status lines are dropped.
    Json,
}
