//! Subcommand implementations and the request loading they share.

pub mod init;
pub mod list_rules;
pub mod output;
pub mod print;
pub mod resolve;

use anyhow::{Context, Result};
use clap::Args;
use lint_layers::{builtin_registries, resolve_registries};
use lint_layers_core::{ChainRequest, Config, NodeModulesResolver, Registries, TypedLayerOptions};
use lint_layers_ts::detect_project;
use std::path::{Path, PathBuf};

/// How the typed-language layer is selected on the command line. Overrides
/// the `[typescript]` table of the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct TypedSelection {
    /// Append the typed-language layer for the project rooted at DIR
    #[arg(long, value_name = "DIR")]
    pub typescript: Option<PathBuf>,

    /// Append the typed-language layer if the project has a tsconfig.json
    #[arg(long, conflicts_with = "typescript")]
    pub detect: bool,
}

/// Loads the chain request for `project`: resolved config file first, then
/// command-line typed-layer selection on top.
pub fn load_request(
    project: &Path,
    explicit_config: Option<&Path>,
    typed: &TypedSelection,
) -> Result<ChainRequest> {
    let found = locate_config(project, explicit_config, global_config_dir().as_deref());
    let mut config = load_config(found.as_ref(), project)?;

    if let Some(dir) = &typed.typescript {
        config.typescript = Some(TypedLayerOptions::new(dir));
    } else if typed.detect {
        match detect_project(project) {
            Some(options) => config.typescript = Some(options),
            None => tracing::warn!(
                "No tsconfig.json in {}, typed-language layer skipped",
                project.display()
            ),
        }
    }

    if let Some(options) = config.typescript.as_mut() {
        if let Some(root) = options.root_dir.take() {
            options.root_dir = Some(absolutize(root)?);
        }
    }

    Ok(config.into_request())
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["lint-layers.toml", ".lint-layers.toml"];

/// Config file name inside the user-wide config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// A config file selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConfigFile {
    path: PathBuf,
    global: bool,
}

impl ConfigFile {
    /// Relative paths inside a project or `--config` file resolve against
    /// the file's directory; inside the user-wide file, against the project.
    fn base_dir<'a>(&'a self, project: &'a Path) -> &'a Path {
        if self.global {
            return project;
        }
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(project)
    }
}

/// Picks the config file: `--config` as given, then the first project file
/// that exists, then the user-wide file.
fn locate_config(
    project: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> Option<ConfigFile> {
    if let Some(path) = explicit {
        return Some(ConfigFile {
            path: path.to_path_buf(),
            global: false,
        });
    }

    if let Some(path) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project.join(name))
        .find(|candidate| candidate.exists())
    {
        tracing::debug!("Found project config: {}", path.display());
        return Some(ConfigFile { path, global: false });
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.exists())
        .map(|path| ConfigFile { path, global: true })
}

/// `$LINT_LAYERS_CONFIG_DIR`, else `~/.lint-layers`.
fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os("LINT_LAYERS_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".lint-layers")),
    }
}

fn load_config(found: Option<&ConfigFile>, project: &Path) -> Result<Config> {
    let Some(file) = found else {
        tracing::debug!("No config found, using defaults");
        return Ok(Config::default());
    };
    if file.global {
        tracing::info!("Using global config: {}", file.path.display());
    }
    let config = Config::from_file(&file.path)
        .with_context(|| format!("Failed to load {}", file.path.display()))?;
    Ok(config.rooted_at(file.base_dir(project)))
}

/// Builds the registries, resolving capabilities against `node_modules`
/// when given.
pub fn load_registries(node_modules: Option<&Path>) -> Result<Registries> {
    let registries = match node_modules {
        Some(dir) => {
            tracing::info!("Resolving capabilities from {}", dir.display());
            resolve_registries(&NodeModulesResolver::new(dir))?
        }
        None => builtin_registries()?,
    };
    Ok(registries)
}

/// Makes a relative, non-empty path absolute against the working directory.
/// Empty paths are kept so the missing root is reported by the builder.
fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() || path.as_os_str().is_empty() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path))
}
