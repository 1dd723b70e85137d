//! Implementation of `kickoff [run]`.
//!
//! Responsibility: resolve CLI input into `RunParameters`, call the core
//! scaffold service, and hand back its exit code. No business logic lives
//! here.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use kickoff_adapters::{JsonManifestFormat, LocalFilesystem};
use kickoff_core::{
    application::{RunParameters, ScaffoldService, VerboseStream},
    domain::EXIT_NOT_RUN,
};

use crate::{
    cli::{self, GlobalArgs, RunArgs},
    commands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the run action.
///
/// Dispatch sequence:
/// 1. Resolve parameters (or show usage and stop)
/// 2. Wire the local adapters into `ScaffoldService`
/// 3. Return the outcome's exit code
#[instrument(skip_all)]
pub fn execute(
    args: RunArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<i32> {
    let Some(parameters) = get_parameters(args, global, config, output)? else {
        return Ok(EXIT_NOT_RUN);
    };

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonManifestFormat::new()),
    );
    let outcome = service.run(parameters)?;
    Ok(outcome.exit_code())
}

/// Turn parsed input into the parameters of one run.
///
/// Returns `None` after writing usage to the output when help was requested.
/// Touches nothing on disk.
pub fn get_parameters(
    args: RunArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Option<RunParameters>> {
    if global.help {
        output.print_raw(&cli::usage(None))?;
        return Ok(None);
    }

    if args
        .project_folder
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err(CliError::InvalidInput {
            message: "the project folder path cannot be empty".into(),
            source: None,
        });
    }

    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read the current folder")?;
    let project_folder = resolve_project_folder(args.project_folder.as_deref(), &cwd);
    let data_folder = commands::data_folder(config)?;

    debug!(
        project_folder = %project_folder.display(),
        data_folder = %data_folder.display(),
        verbose = global.verbose,
        "Parameters resolved"
    );

    let verbose = VerboseStream::new(output.writer()).with_enabled(global.verbose > 0);
    Ok(Some(
        RunParameters::new(Box::new(output.writer()), project_folder, data_folder)
            .with_verbose(verbose),
    ))
}

/// Absolute project folder for `arg`, which defaults to `cwd`.
///
/// `.` segments are dropped and `..` removes the segment before it, without
/// following symlinks. `..` at the root stays at the root.
pub fn resolve_project_folder(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    let joined = match arg {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn no_argument_means_current_folder() {
        assert_eq!(
            resolve_project_folder(None, Path::new("/work")),
            PathBuf::from("/work")
        );
    }

    #[cfg(unix)]
    #[test]
    fn relative_argument_resolves_against_current_folder() {
        assert_eq!(
            resolve_project_folder(Some(Path::new("my-lib")), Path::new("/work")),
            PathBuf::from("/work/my-lib")
        );
        assert_eq!(
            resolve_project_folder(Some(Path::new("./a/./b")), Path::new("/work")),
            PathBuf::from("/work/a/b")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_argument_wins() {
        assert_eq!(
            resolve_project_folder(Some(Path::new("/elsewhere/p")), Path::new("/work")),
            PathBuf::from("/elsewhere/p")
        );
    }

    #[cfg(unix)]
    #[test]
    fn dot_is_the_current_folder() {
        assert_eq!(
            resolve_project_folder(Some(Path::new(".")), Path::new("/work/p")),
            PathBuf::from("/work/p")
        );
    }

    #[cfg(unix)]
    #[test]
    fn parent_segments_are_folded() {
        assert_eq!(
            resolve_project_folder(Some(Path::new("..")), Path::new("/work/p")),
            PathBuf::from("/work")
        );
        assert_eq!(
            resolve_project_folder(Some(Path::new("../")), Path::new("/work/p")),
            PathBuf::from("/work")
        );
        assert_eq!(
            resolve_project_folder(Some(Path::new("sub/../lib")), Path::new("/work")),
            PathBuf::from("/work/lib")
        );
        assert_eq!(
            resolve_project_folder(Some(Path::new("../../..")), Path::new("/work")),
            PathBuf::from("/")
        );
    }

    fn data_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.logging.data_folder = Some(PathBuf::from("/data"));
        config
    }

    #[test]
    fn help_yields_no_parameters() {
        let global = GlobalArgs {
            help: true,
            ..GlobalArgs::default()
        };
        let output = OutputManager::new(&global, &AppConfig::default());
        let parameters =
            get_parameters(RunArgs::default(), &global, &data_config(), &output).unwrap();
        assert!(parameters.is_none());
    }

    #[test]
    fn verbose_flag_enables_diagnostics() {
        let global = GlobalArgs {
            verbose: 1,
            ..GlobalArgs::default()
        };
        let output = OutputManager::new(&global, &AppConfig::default());
        let args = RunArgs {
            project_folder: Some(PathBuf::from("demo")),
        };

        let parameters = get_parameters(args, &global, &data_config(), &output)
            .unwrap()
            .unwrap();
        assert!(parameters.verbose().is_enabled());
        assert!(parameters.project_folder().ends_with("demo"));
        assert!(parameters.project_folder().is_absolute());
        assert_eq!(parameters.data_folder(), Path::new("/data"));
    }

    #[test]
    fn diagnostics_are_off_by_default() {
        let global = GlobalArgs::default();
        let output = OutputManager::new(&global, &AppConfig::default());
        let parameters = get_parameters(RunArgs::default(), &global, &data_config(), &output)
            .unwrap()
            .unwrap();
        assert!(!parameters.verbose().is_enabled());
    }

    #[test]
    fn empty_folder_argument_is_rejected() {
        let global = GlobalArgs::default();
        let output = OutputManager::new(&global, &AppConfig::default());
        let args = RunArgs {
            project_folder: Some(PathBuf::new()),
        };
        let err = get_parameters(args, &global, &data_config(), &output).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
