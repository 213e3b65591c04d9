//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use mattress_commerce::Catalog;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, nearest directory first.
const CONFIG_NAMES: [&str; 3] = ["mattress.toml", ".mattress.toml", "mattress.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Product catalog.
    pub catalog: Catalog,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = if let Some(path) = config_path {
            let config = CliConfig::load(path)?;
            (config, parent_dir(Path::new(path), &cwd))
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (CliConfig::default(), cwd.clone()))
        };

        console::set_colors_enabled(config.display.color);
        console::set_colors_enabled_stderr(config.display.color);
        let output = output.with_json(config.display.json);

        let catalog = match config.catalog.path.as_deref() {
            Some(path) => load_catalog(&resolve_path(&base_dir, path))?,
            None => Catalog::builtin(),
        };

        Ok(Self {
            config,
            output,
            catalog,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        debug!(path = %config_path.display(), "using config file");
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Row cap for listings; an explicit limit wins over the config.
    pub fn max_results(&self, explicit: Option<usize>) -> Option<usize> {
        explicit.or(self.config.display.max_results)
    }
}

/// Read a TOML or JSON catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = if path.extension().is_some_and(|e| e == "json") {
        Catalog::from_json_str(&content)
    } else {
        Catalog::from_toml_str(&content)
    };

    let catalog =
        catalog.with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    debug!(path = %path.display(), products = catalog.len(), "loaded catalog file");
    Ok(catalog)
}

fn parent_dir(path: &Path, cwd: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => resolve_path(cwd, &parent.to_string_lossy()),
        _ => cwd.to_path_buf(),
    }
}

/// Resolve a path relative to a base directory.
fn resolve_path(base: &Path, path: &str) -> PathBuf {
    if PathBuf::from(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}
