//! Builder for assembling the final configuration from all sources.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Loads, merges and validates configuration.
///
/// # Examples
///
/// ```
/// use court::config::{Config, ConfigBuilder, PolicyConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         policy: Some(PolicyConfig {
///             weekly_limit: Some(3),
///             ..Default::default()
///         }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.booking_policy().weekly_limit(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Don't read any configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Don't apply `COURT_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Start project config discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of `~/.court`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable holds an invalid value, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                debug!("using configuration file {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
