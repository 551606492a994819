//! Implementation of the `devkit playground` command.
//!
//! Responsibility: merge flags with config into `CreationParameters`, call
//! the core playground service, and display results.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use devkit_adapters::{LocalFilesystem, SystemOpener};
use devkit_core::domain::DomainValidator;
use devkit_core::prelude::{CreationParameters, Playground, PlaygroundService};

use crate::{
    cli::PlaygroundArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaygroundReport {
    pub name: String,
    pub path: PathBuf,
    pub already_exists: bool,
}

impl From<&Playground> for PlaygroundReport {
    fn from(playground: &Playground) -> Self {
        Self {
            name: playground.name.clone(),
            path: playground.path.clone(),
            already_exists: playground.already_exists,
        }
    }
}

/// Execute the `devkit playground` command.
///
/// 1. Resolve name, location, template and platform
/// 2. Early-exit if `--dry-run`
/// 3. Create (or find) the playground via `PlaygroundService`
/// 4. Open it when requested
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: PlaygroundArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let params = resolve(&args, &config)?;
    let open = args.open_after().unwrap_or(config.playground.open);

    let service = PlaygroundService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(SystemOpener::new()),
    );

    if args.dry_run {
        preview(&service, &params, &output)?;
        return Ok(());
    }

    let playground = service.create(&params).map_err(CliError::Core)?;
    report(&playground, &output)?;

    if open {
        info!(path = %playground.path.display(), "Opening playground");
        if let Err(e) = playground.open() {
            warn!(error = %e, "Opening playground failed");
            output.warning(&e.to_string())?;
        }
    }

    Ok(())
}

/// Merge CLI flags over config values into validated parameters.
pub fn resolve(args: &PlaygroundArgs, config: &AppConfig) -> CliResult<CreationParameters> {
    let name = DomainValidator::validate_playground_name(&args.name)
        .map_err(|e| CliError::Core(e.into()))?;
    let location = args
        .location
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.playground.location));

    Ok(CreationParameters::new(
        name,
        location,
        args.template.unwrap_or(config.playground.template),
        args.platform.unwrap_or(config.playground.platform),
    ))
}

fn report(playground: &Playground, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&PlaygroundReport::from(playground))?;
        return Ok(());
    }

    let path = playground.path.display();
    if playground.already_exists {
        output.info(&format!("Playground already exists at {path}"))?;
    } else {
        output.success(&format!(
            "Playground '{}' created at {path}",
            playground.name
        ))?;
    }
    Ok(())
}

/// List what `create` would write, at the path it would use. Returns that path.
fn preview(
    service: &PlaygroundService,
    params: &CreationParameters,
    output: &OutputManager,
) -> CliResult<PathBuf> {
    let root = service.resolve_path(params).map_err(CliError::Core)?;

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        params.name,
        root.display()
    ))?;
    output.info(&format!("  Template: {}", params.template))?;
    output.info(&format!("  Platform: {}", params.platform))?;
    for file in params.template_files() {
        output.print(&format!("    {}", file.relative_path().display()))?;
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands, GlobalArgs};
    use crate::cli::global::OutputFormat;
    use clap::Parser;
    use devkit_adapters::{MemoryFilesystem, RecordingOpener};
    use devkit_core::prelude::{Filesystem, PlaygroundPlatform, PlaygroundTemplate};
    use std::path::Path;

    fn args(argv: &[&str]) -> PlaygroundArgs {
        let mut full = vec!["devkit", "playground"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Playground(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let params = resolve(&args(&["Demo"]), &AppConfig::default()).unwrap();
        assert_eq!(params.name.as_str(), "Demo");
        assert_eq!(params.location, PathBuf::from("~/Desktop"));
        assert_eq!(params.template, PlaygroundTemplate::Empty);
        assert_eq!(params.platform, PlaygroundPlatform::Ios);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.playground.platform = PlaygroundPlatform::TvOs;

        let params = resolve(
            &args(&["Demo", "-l", "/tmp/pg", "-t", "swiftui", "-p", "macos"]),
            &config,
        )
        .unwrap();

        assert_eq!(params.location, PathBuf::from("/tmp/pg"));
        assert_eq!(params.template, PlaygroundTemplate::SwiftUi);
        assert_eq!(params.platform, PlaygroundPlatform::MacOs);
    }

    #[test]
    fn config_platform_used_without_flag() {
        let mut config = AppConfig::default();
        config.playground.platform = PlaygroundPlatform::TvOs;
        let params = resolve(&args(&["Demo"]), &config).unwrap();
        assert_eq!(params.platform, PlaygroundPlatform::TvOs);
    }

    fn quiet_output() -> OutputManager {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&global, &AppConfig::default())
    }

    #[test]
    fn dry_run_reports_the_path_create_would_use() {
        let fs = MemoryFilesystem::new();
        let service = PlaygroundService::new(Box::new(fs.clone()), Arc::new(RecordingOpener::new()))
            .with_home_dir("/home/dev");

        for location in ["~/Playgrounds", "relative/dir"] {
            let params = resolve(&args(&["Demo", "-l", location]), &AppConfig::default()).unwrap();
            let previewed = preview(&service, &params, &quiet_output()).unwrap();

            assert!(previewed.is_absolute(), "{location}");
            assert_eq!(fs.mutation_count(), 0, "{location}");
            assert_eq!(previewed, service.resolve_path(&params).unwrap());
        }
        let params = resolve(&args(&["Demo"]), &AppConfig::default()).unwrap();
        assert_eq!(
            preview(&service, &params, &quiet_output()).unwrap(),
            PathBuf::from("/home/dev/Desktop/Demo.playground")
        );
    }

    #[test]
    fn invalid_name_is_a_user_error() {
        let err = resolve(&args(&["../escape"]), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn report_reflects_playground() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work")).unwrap();
        let service = PlaygroundService::new(Box::new(fs), Arc::new(RecordingOpener::new()));

        let params = resolve(&args(&["Demo", "-l", "/work"]), &AppConfig::default()).unwrap();
        let first = PlaygroundReport::from(&service.create(&params).unwrap());
        let second = PlaygroundReport::from(&service.create(&params).unwrap());

        assert_eq!(
            first,
            PlaygroundReport {
                name: "Demo".into(),
                path: PathBuf::from("/work/Demo.playground"),
                already_exists: false,
            }
        );
        assert!(second.already_exists);
        assert_eq!(
            serde_json::to_value(&second).unwrap()["already_exists"],
            serde_json::json!(true)
        );
    }
}
