//! Implementation of the `devkit password` command.
//!
//! Responsibility: merge flags with config, ask the core for a password,
//! hand it to the clipboard and display it. Length validation lives in the
//! core.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use devkit_adapters::SystemClipboard;
use devkit_core::prelude::{Clipboard, PasswordService};

use crate::{
    cli::PasswordArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Fully resolved inputs for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    /// Length as the user supplied it, still unvalidated.
    pub raw_length: String,
    pub use_numbers: bool,
    pub use_special: bool,
    pub copy: bool,
}

/// What the command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordOutcome {
    pub password: String,
    pub length: usize,
    pub copied: bool,
    #[serde(skip)]
    pub copy_error: Option<String>,
}

/// Execute the `devkit password` command.
#[instrument(skip_all)]
pub fn execute(args: PasswordArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = resolve(&args, &config, prompt_length)?;
    debug!(
        numbers = request.use_numbers,
        special = request.use_special,
        copy = request.copy,
        "Password request resolved"
    );

    let outcome = generate(&request, &SystemClipboard::new())?;

    if let Some(reason) = &outcome.copy_error {
        output.warning(&format!("Could not copy to the clipboard: {reason}"))?;
    }

    if output.is_json() {
        output.json(&outcome)?;
        return Ok(());
    }

    if outcome.copied {
        output.success("Copied Password")?;
    }
    output.result(&outcome.password)?;
    Ok(())
}

/// Merge CLI flags over config values. Flags always win.
pub fn resolve(
    args: &PasswordArgs,
    config: &AppConfig,
    prompt: impl FnOnce(&AppConfig) -> CliResult<String>,
) -> CliResult<PasswordRequest> {
    let raw_length = match (&args.length, args.interactive) {
        (_, true) => prompt(config)?,
        (Some(length), false) => length.clone(),
        (None, false) => config.password.length.to_string(),
    };

    Ok(PasswordRequest {
        raw_length,
        use_numbers: args.use_numbers().unwrap_or(config.password.numbers),
        use_special: args.use_special().unwrap_or(config.password.special),
        copy: config.password.copy && !args.no_copy,
    })
}

/// Generate and, when requested, copy. A clipboard failure does not fail
/// the command.
pub fn generate(request: &PasswordRequest, clipboard: &dyn Clipboard) -> CliResult<PasswordOutcome> {
    let password = PasswordService::new()
        .generate_from_input(&request.raw_length, request.use_numbers, request.use_special)
        .map_err(CliError::Core)?;

    let (copied, copy_error) = if request.copy {
        match clipboard.copy(&password) {
            Ok(()) => (true, None),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                (false, Some(e.to_string()))
            }
        }
    } else {
        (false, None)
    };

    Ok(PasswordOutcome {
        length: password.chars().count(),
        password,
        copied,
        copy_error,
    })
}

#[cfg(feature = "interactive")]
fn prompt_length(config: &AppConfig) -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Password length")
        .default(config.password.length.to_string())
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: "Failed to read password length".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_length(_config: &AppConfig) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use devkit_adapters::MemoryClipboard;
    use devkit_core::domain::SPECIAL_CHARS;

    fn args(argv: &[&str]) -> PasswordArgs {
        let mut full = vec!["devkit", "password"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Password(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn no_prompt(_: &AppConfig) -> CliResult<String> {
        panic!("prompt must not be called")
    }

    fn request(raw_length: &str, copy: bool) -> PasswordRequest {
        PasswordRequest {
            raw_length: raw_length.into(),
            use_numbers: true,
            use_special: true,
            copy,
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let req = resolve(&args(&[]), &AppConfig::default(), no_prompt).unwrap();
        assert_eq!(req, request("16", true));
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.password.numbers = false;
        config.password.special = false;

        let req = resolve(
            &args(&["--length", "9", "--numbers", "--no-copy"]),
            &config,
            no_prompt,
        )
        .unwrap();

        assert_eq!(req.raw_length, "9");
        assert!(req.use_numbers);
        assert!(!req.use_special);
        assert!(!req.copy);
    }

    #[test]
    fn config_can_disable_copy() {
        let mut config = AppConfig::default();
        config.password.copy = false;
        assert!(!resolve(&args(&[]), &config, no_prompt).unwrap().copy);
    }

    #[test]
    fn interactive_uses_prompt() {
        let req = resolve(&args(&["-i"]), &AppConfig::default(), |_| Ok("30".into())).unwrap();
        assert_eq!(req.raw_length, "30");
    }

    #[test]
    fn generates_and_copies() {
        let clipboard = MemoryClipboard::new();
        let outcome = generate(&request("20", true), &clipboard).unwrap();

        assert_eq!(outcome.length, 20);
        assert!(outcome.copied);
        assert_eq!(clipboard.contents(), Some(outcome.password));
    }

    #[test]
    fn no_copy_leaves_clipboard_untouched() {
        let clipboard = MemoryClipboard::new();
        let outcome = generate(&request("8", false), &clipboard).unwrap();

        assert!(!outcome.copied);
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn letters_only_when_classes_disabled() {
        let req = PasswordRequest {
            use_numbers: false,
            use_special: false,
            ..request("64", false)
        };
        let outcome = generate(&req, &MemoryClipboard::new()).unwrap();
        assert!(outcome.password.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(!outcome.password.chars().any(|c| SPECIAL_CHARS.contains(c)));
    }

    #[test]
    fn invalid_length_is_a_user_error() {
        for (raw, message) in [
            ("4", "greater than 4"),
            ("65", "less than 65"),
            ("abc", "must be a number"),
        ] {
            let err = generate(&request(raw, true), &MemoryClipboard::new()).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{raw}");
            assert!(err.to_string().contains(message), "{raw}: {err}");
        }
    }

    #[test]
    fn json_omits_copy_error() {
        let outcome = PasswordOutcome {
            password: "abcde".into(),
            length: 5,
            copied: false,
            copy_error: Some("no clipboard".into()),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"password": "abcde", "length": 5, "copied": false})
        );
    }
}
