//! Output management and formatting.
//!
//! Status lines honour `--quiet`; command results ([`OutputManager::result`]
//! and [`OutputManager::json`]) are always written so that scripts can rely
//! on them.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// The value a command exists to produce. Never suppressed.
    pub fn result(&self, value: &str) -> io::Result<()> {
        self.term.write_line(value)
    }

    /// Machine-readable result as a single line of JSON.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, |s| s.green().bold().to_string(), |s| {
            s.green().to_string()
        })
    }

    /// Warning indicator: `⚠ <msg>`. Written to stderr.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        Term::stderr().write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, |s| s.blue().bold().to_string(), |s| {
            s.blue().to_string()
        })
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// JSON output carries only the result document.
    fn is_silent(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn status(
        &self,
        icon: &str,
        msg: &str,
        paint_icon: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{icon} {msg}")
        } else {
            format!("{} {}", paint_icon(icon), paint_msg(msg))
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, format: OutputFormat, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn explicit_format_is_kept() {
        let out = make_manager(false, OutputFormat::Json, &AppConfig::default());
        assert_eq!(out.resolved_format, OutputFormat::Json);
        assert!(out.is_json());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();
        let out = make_manager(false, OutputFormat::Auto, &config);
        assert_eq!(out.resolved_format, OutputFormat::Json);
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let mut config = AppConfig::default();
        config.output.format = "fancy".into();
        let out = make_manager(false, OutputFormat::Auto, &config);
        assert_ne!(out.resolved_format, OutputFormat::Auto);
    }

    #[test]
    fn plain_format_disables_color() {
        let out = make_manager(false, OutputFormat::Plain, &AppConfig::default());
        assert!(out.no_color);
    }

    #[test]
    fn human_format_respects_config_no_color() {
        let mut config = AppConfig::default();
        assert!(!make_manager(false, OutputFormat::Human, &config).no_color);
        config.output.no_color = true;
        assert!(make_manager(false, OutputFormat::Human, &config).no_color);
    }

    #[test]
    fn quiet_and_json_silence_status_lines() {
        assert!(make_manager(true, OutputFormat::Plain, &AppConfig::default()).is_silent());
        assert!(make_manager(false, OutputFormat::Json, &AppConfig::default()).is_silent());
        assert!(!make_manager(false, OutputFormat::Plain, &AppConfig::default()).is_silent());
    }

    #[test]
    fn writes_do_not_fail_without_a_terminal() {
        let out = make_manager(true, OutputFormat::Plain, &AppConfig::default());
        assert!(out.print("hidden").is_ok());
        assert!(out.result("shown").is_ok());
    }
}
