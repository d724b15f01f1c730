//! `waypoint.toml` configuration.
//!
//! Every key is optional. A missing file means all defaults: custom servers
//! enabled, kept in memory, and no listed servers.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use waypoint_core::{Icon, ServerCategory, ServerEntry};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "waypoint.toml";

/// Errors loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config from {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// The file parsed but describes something unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where custom server lists are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Lost on restart.
    #[default]
    Memory,
    /// redb database file.
    Redb,
}

/// Custom servers feature settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomServersConfig {
    /// Players may keep their own list and direct connect.
    pub enabled: bool,
    /// Backing store.
    pub storage: StorageKind,
    /// Database file, relative to the data folder.
    pub database: PathBuf,
}

impl Default for CustomServersConfig {
    fn default() -> Self {
        Self { enabled: true, storage: StorageKind::Memory, database: PathBuf::from("custom_servers.redb") }
    }
}

/// Loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Folder holding language files, the welcome notice and the database.
    pub data_folder: PathBuf,
    /// Active locale. `None` serves the base language only.
    pub language: Option<String>,
    /// Welcome notice file, relative to the data folder.
    pub welcome_file: PathBuf,
    /// Custom servers feature.
    pub custom_servers: CustomServersConfig,
    /// Official and Geyser servers, in display order.
    pub servers: Vec<ServerEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("data"),
            language: None,
            welcome_file: PathBuf::from("welcome.txt"),
            custom_servers: CustomServersConfig::default(),
            servers: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    data_folder: Option<PathBuf>,
    language: Option<String>,
    welcome_file: Option<PathBuf>,
    #[serde(default)]
    custom_servers: RawCustomServers,
    #[serde(default)]
    servers: Vec<RawServer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCustomServers {
    enabled: Option<bool>,
    storage: Option<StorageKind>,
    database: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawServer {
    title: String,
    address: String,
    port: u16,
    #[serde(default = "default_online")]
    online: bool,
    #[serde(default)]
    bedrock: bool,
    category: ServerCategory,
    icon: Option<Icon>,
}

const fn default_online() -> bool {
    true
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] if `None`.
    ///
    /// A missing default file yields [`Config::default`]. A missing file that
    /// was named explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return read_config(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        match read_config(default_path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!("Configuration file not found; using defaults");
                Ok(Self::default())
            },
            Err(other) => Err(other),
        }
    }

    /// Parse configuration text.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(text).map_err(|source| ConfigError::Parse { path: origin.to_path_buf(), source })?;
        Self::from_raw(raw)
    }

    /// Welcome notice path.
    pub fn welcome_path(&self) -> PathBuf {
        self.data_folder.join(&self.welcome_file)
    }

    /// Custom server database path.
    pub fn database_path(&self) -> PathBuf {
        self.data_folder.join(&self.custom_servers.database)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let servers = raw.servers.into_iter().map(RawServer::into_entry).collect::<Result<Vec<_>, _>>()?;

        let language = raw.language.map(|l| l.trim().to_string()).filter(|l| !l.is_empty());

        Ok(Self {
            data_folder: raw.data_folder.unwrap_or(defaults.data_folder),
            language,
            welcome_file: raw.welcome_file.unwrap_or(defaults.welcome_file),
            custom_servers: CustomServersConfig {
                enabled: raw.custom_servers.enabled.unwrap_or(defaults.custom_servers.enabled),
                storage: raw.custom_servers.storage.unwrap_or(defaults.custom_servers.storage),
                database: raw.custom_servers.database.unwrap_or(defaults.custom_servers.database),
            },
            servers,
        })
    }
}

impl RawServer {
    fn into_entry(self) -> Result<ServerEntry, ConfigError> {
        if self.category == ServerCategory::Custom {
            return Err(ConfigError::Invalid(format!(
                "server {:?} cannot be listed as custom; use official or geyser",
                self.title
            )));
        }
        if self.address.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("server {:?} has no address", self.title)));
        }

        let entry = ServerEntry::new(self.title, self.address.trim(), self.port, self.category)
            .with_online_mode(self.online)
            .with_bedrock(self.bedrock);
        Ok(match self.icon {
            Some(icon) => entry.with_icon(icon),
            None => entry,
        })
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "Reading configuration file");
    let content =
        fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    Config::parse(&content, path)
}
