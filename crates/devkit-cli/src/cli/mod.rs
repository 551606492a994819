//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use devkit_core::domain::{PlaygroundPlatform, PlaygroundTemplate};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "devkit",
    bin_name = "devkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Developer utilities: passwords and Swift playgrounds",
    long_about = "devkit generates random passwords and scaffolds Xcode Swift \
                  playgrounds from built-in templates.",
    after_help = "EXAMPLES:\n\
        \x20 devkit password --length 20\n\
        \x20 devkit password -l 12 --no-special --no-copy\n\
        \x20 devkit playground Demo --location ~/Playgrounds --platform ios\n\
        \x20 devkit completions bash > /usr/share/bash-completion/completions/devkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a random password and copy it to the clipboard.
    #[command(
        visible_alias = "pw",
        about = "Generate a password",
        after_help = "EXAMPLES:\n\
            \x20 devkit password                  # configured defaults\n\
            \x20 devkit password --length 32\n\
            \x20 devkit password -l 8 --no-numbers --no-special\n\
            \x20 devkit password --interactive    # prompt for the length"
    )]
    Password(PasswordArgs),

    /// Create a new Swift playground.
    #[command(
        visible_alias = "pg",
        about = "Create a Swift playground",
        after_help = "EXAMPLES:\n\
            \x20 devkit playground Demo\n\
            \x20 devkit playground Demo --template swiftui --platform ios --open\n\
            \x20 devkit playground Sketch --location ~/Playgrounds --platform macos"
    )]
    Playground(PlaygroundArgs),

    /// Initialise a devkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 devkit init           # user config directory\n\
            \x20 devkit init --local   # .devkit.toml in CWD\n\
            \x20 devkit init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 devkit completions bash > ~/.local/share/bash-completion/completions/devkit\n\
            \x20 devkit completions zsh  > ~/.zfunc/_devkit\n\
            \x20 devkit completions fish > ~/.config/fish/completions/devkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the devkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 devkit config get password.length\n\
            \x20 devkit config list\n\
            \x20 devkit config path"
    )]
    Config(ConfigCommands),
}

// ── password ──────────────────────────────────────────────────────────────────

/// Arguments for `devkit password`.
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password length as typed; validated by the generator (5 to 64).
    #[arg(
        short = 'l',
        long = "length",
        value_name = "LENGTH",
        allow_hyphen_values = true,
        help = "Number of characters (5-64)"
    )]
    pub length: Option<String>,

    /// Prompt for the length instead of reading it from flags or config.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with = "length",
        help = "Prompt for the password length"
    )]
    pub interactive: bool,

    #[arg(long = "numbers", overrides_with = "no_numbers", help = "Include digits")]
    pub numbers: bool,

    #[arg(long = "no-numbers", overrides_with = "numbers", help = "Exclude digits")]
    pub no_numbers: bool,

    #[arg(
        long = "special",
        overrides_with = "no_special",
        help = "Include special characters"
    )]
    pub special: bool,

    #[arg(
        long = "no-special",
        overrides_with = "special",
        help = "Exclude special characters"
    )]
    pub no_special: bool,

    /// Print the password without touching the clipboard.
    #[arg(long = "no-copy", help = "Do not copy to the clipboard")]
    pub no_copy: bool,
}

impl PasswordArgs {
    /// `Some` when a flag decided whether digits are used.
    pub fn use_numbers(&self) -> Option<bool> {
        flag_pair(self.numbers, self.no_numbers)
    }

    /// `Some` when a flag decided whether special characters are used.
    pub fn use_special(&self) -> Option<bool> {
        flag_pair(self.special, self.no_special)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ── playground ────────────────────────────────────────────────────────────────

/// Arguments for `devkit playground`.
#[derive(Debug, Args)]
pub struct PlaygroundArgs {
    /// Playground name; the directory becomes `<NAME>.playground`.
    #[arg(value_name = "NAME", help = "Playground name")]
    pub name: String,

    /// Parent directory (`~` expands to the home directory).
    #[arg(
        short = 'l',
        long = "location",
        value_name = "DIR",
        help = "Directory to create the playground in"
    )]
    pub location: Option<PathBuf>,

    /// Parsed with the same rules as the `playground.template` config key.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Starting source template [empty, swiftui]"
    )]
    pub template: Option<PlaygroundTemplate>,

    /// Parsed with the same rules as the `playground.platform` config key.
    #[arg(
        short = 'p',
        long = "platform",
        value_name = "PLATFORM",
        help = "Target platform [ios, macos, tvos]"
    )]
    pub platform: Option<PlaygroundPlatform>,

    /// Open the playground once it exists.
    #[arg(long = "open", overrides_with = "no_open", help = "Open after creating")]
    pub open: bool,

    #[arg(long = "no-open", overrides_with = "open", help = "Do not open")]
    pub no_open: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl PlaygroundArgs {
    pub fn open_after(&self) -> Option<bool> {
        flag_pair(self.open, self.no_open)
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `devkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.devkit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `devkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `devkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `password.length`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_password_command() {
        let cli = Cli::parse_from(["devkit", "password", "--length", "12", "--no-special"]);
        let Commands::Password(args) = cli.command else {
            panic!("expected Password command");
        };
        assert_eq!(args.length.as_deref(), Some("12"));
        assert_eq!(args.use_special(), Some(false));
        assert_eq!(args.use_numbers(), None);
    }

    #[test]
    fn length_is_kept_as_raw_text() {
        // Validation belongs to the core, so clap must not reject these.
        for raw in ["abc", "-3", "999"] {
            let cli = Cli::parse_from(["devkit", "pw", "--length", raw]);
            let Commands::Password(args) = cli.command else {
                panic!("expected Password command");
            };
            assert_eq!(args.length.as_deref(), Some(raw));
        }
    }

    #[test]
    fn last_flag_of_a_pair_wins() {
        let cli = Cli::parse_from(["devkit", "pw", "--no-numbers", "--numbers"]);
        let Commands::Password(args) = cli.command else {
            panic!("expected Password command");
        };
        assert_eq!(args.use_numbers(), Some(true));
    }

    #[test]
    fn interactive_conflicts_with_length() {
        let result = Cli::try_parse_from(["devkit", "pw", "-i", "--length", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_playground_command() {
        let cli = Cli::parse_from([
            "devkit",
            "playground",
            "Demo",
            "--template",
            "swiftui",
            "--platform",
            "macos",
            "--open",
        ]);
        let Commands::Playground(args) = cli.command else {
            panic!("expected Playground command");
        };
        assert_eq!(args.name, "Demo");
        assert_eq!(args.template, Some(PlaygroundTemplate::SwiftUi));
        assert_eq!(args.platform, Some(PlaygroundPlatform::MacOs));
        assert_eq!(args.open_after(), Some(true));
    }

    #[test]
    fn playground_flags_accept_alternate_spellings() {
        let cli = Cli::parse_from([
            "devkit",
            "pg",
            "Demo",
            "-t",
            "interactive-ui",
            "-p",
            "macOS",
        ]);
        let Commands::Playground(args) = cli.command else {
            panic!("expected Playground command");
        };
        assert_eq!(args.template, Some(PlaygroundTemplate::SwiftUi));
        assert_eq!(args.platform, Some(PlaygroundPlatform::MacOs));

        let cli = Cli::parse_from(["devkit", "pg", "Demo", "-p", "osx"]);
        let Commands::Playground(args) = cli.command else {
            panic!("expected Playground command");
        };
        assert_eq!(args.platform, Some(PlaygroundPlatform::MacOs));
    }

    #[test]
    fn unknown_platform_is_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["devkit", "pg", "Demo", "-p", "watchos"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unknown playground platform 'watchos'"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["devkit", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
