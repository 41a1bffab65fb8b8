//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use pods_core::{Site, SiteApp, SiteConfig};
use pods_observability::{LogFormat, LogLevel, StructuredLogger};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration.
    pub config: SiteConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve_path(&cwd, path);
            let config = SiteConfig::load(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            (config, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            SiteConfig::discover(&cwd).context("Failed to load discovered config")?
        };

        match &config_path {
            Some(path) => output.debug(&format!("Using config {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Logger for CLI runs: human-readable, quiet unless verbose.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            self.config.site.log_level.max(LogLevel::Warn)
        };
        self.config
            .logger("cli")
            .with_format(LogFormat::Human)
            .with_min_level(level)
    }

    /// Validate the configuration and load the catalogue.
    pub fn site(&self) -> Result<Site> {
        SiteApp::new(self.config.clone())
            .with_logger(self.logger())
            .build()
            .context("Failed to start site")
    }

    /// Default location for a new config file.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join("pods.toml")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &std::path::Path, path: &str) -> PathBuf {
    if PathBuf::from(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
