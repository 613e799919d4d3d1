//! Finding and reading court configuration files.
//!
//! Three files can contribute settings: the user's `config.yaml` in the
//! config directory, then `court.yaml` and `court.local.yaml` in the nearest
//! enclosing club directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the user configuration inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "court.yaml";

/// File name of the private project configuration.
pub const LOCAL_CONFIG_FILE: &str = "court.local.yaml";

const USER_PRECEDENCE: u8 = 1;
const PROJECT_PRECEDENCE: u8 = 2;
const LOCAL_PRECEDENCE: u8 = 3;

/// One configuration file that was found and parsed.
///
/// ```
/// use court::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let club = ConfigSource {
///     path: PathBuf::from("/clubs/riverside/court.yaml"),
///     precedence: 2,
///     config: Default::default(),
/// };
/// assert!(club.path.ends_with("court.yaml"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the file lives.
    pub path: PathBuf,
    /// Merge rank; a source with a larger value wins.
    pub precedence: u8,
    /// The parsed contents.
    pub config: Config,
}

/// Locates and parses configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Every configuration file that applies to `working_dir`, weakest first.
    ///
    /// The user file comes from `config_dir` when given, otherwise from
    /// `~/.court`. Project files come from
    /// [`discover_project_configs`](Self::discover_project_configs).
    ///
    /// # Errors
    ///
    /// Fails if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let user_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::default_config_dir()?,
        };

        let mut sources: Vec<ConfigSource> =
            Self::source_if_present(user_dir.join(USER_CONFIG_FILE), USER_PRECEDENCE)?
                .into_iter()
                .collect();
        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Project files from the closest directory at or above `start_dir` that
    /// has `court.yaml`, `court.local.yaml`, or both.
    ///
    /// # Errors
    ///
    /// Fails if a discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let mut found = Vec::new();
            for (name, precedence) in [
                (PROJECT_CONFIG_FILE, PROJECT_PRECEDENCE),
                (LOCAL_CONFIG_FILE, LOCAL_PRECEDENCE),
            ] {
                found.extend(Self::source_if_present(dir.join(name), precedence)?);
            }
            if !found.is_empty() {
                return Ok(found);
            }
        }

        Ok(Vec::new())
    }

    /// Parse one YAML file. Blank files yield [`Config::default`].
    ///
    /// # Errors
    ///
    /// A read failure is reported as [`Error::Validation`] naming the path;
    /// malformed YAML as [`Error::Configuration`].
    pub fn load_file(path: &Path) -> Result<Config> {
        debug!("reading configuration {}", path.display());

        let text = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("could not read configuration file: {e}"),
        })?;

        if text.trim().is_empty() {
            Ok(Config::default())
        } else {
            Ok(serde_yaml::from_str(&text)?)
        }
    }

    /// `~/.court`.
    ///
    /// # Errors
    ///
    /// Fails when the home directory is unknown.
    pub fn default_config_dir() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "config_dir".into(),
            message: "no home directory to look for ~/.court in".into(),
        })?;
        Ok(home.join(".court"))
    }

    fn source_if_present(path: PathBuf, precedence: u8) -> Result<Option<ConfigSource>> {
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence,
            config,
        }))
    }
}
