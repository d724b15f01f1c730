//! Waypoint server.
//!
//! Production glue around [`waypoint_menu`]: loads `waypoint.toml`, prepares
//! the data folder (language files, welcome notice, custom server database),
//! and runs one [`Menu`] per player session over any [`Transport`].
//!
//! # Components
//!
//! - [`Config`]: TOML configuration with defaults for every key
//! - [`Waypoint`]: Shared state for all sessions
//! - [`SessionRegistry`]: Active sessions, deregistered by RAII guard
//! - [`ConsoleTransport`]: Line-oriented transport used by the `waypoint` binary

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod console;
mod error;
mod registry;
mod store;
mod welcome;

use std::{fs, sync::Arc};

pub use config::{Config, ConfigError, CustomServersConfig, DEFAULT_CONFIG_PATH, StorageKind};
pub use console::{CLOSE_COMMAND, ConsoleTransport, render};
pub use error::ServerError;
pub use registry::{SessionGuard, SessionRegistry};
pub use store::ConfiguredStore;
pub use welcome::{DEFAULT_NOTICE, load_notice};
use waypoint_core::{MemoryStore, PlayerId, RedbStore, StaticDirectory};
use waypoint_lang::MessageCatalog;
use waypoint_menu::{Features, Menu, Runtime, SessionEnd, Transport};

/// Shared state for all player sessions.
pub struct Waypoint {
    catalog: Arc<MessageCatalog>,
    directory: Arc<StaticDirectory>,
    store: ConfiguredStore,
    features: Features,
    welcome: String,
    registry: SessionRegistry,
}

impl Waypoint {
    /// Prepare the data folder and open the configured store.
    ///
    /// Language and welcome file problems degrade with a warning; only a
    /// store that cannot be opened is fatal.
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let mut catalog = MessageCatalog::bootstrap(&config.data_folder);
        if let Some(language) = &config.language {
            catalog.set_active_layer(language);
        }

        let store = match config.custom_servers.storage {
            StorageKind::Memory => ConfiguredStore::Memory(MemoryStore::new()),
            StorageKind::Redb => {
                let path = config.database_path();
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|source| ServerError::Io { path: parent.to_path_buf(), source })?;
                }
                tracing::info!(path = %path.display(), "Opening custom server database");
                ConfiguredStore::Redb(RedbStore::open(&path)?)
            },
        };

        let directory = StaticDirectory::new(config.servers.clone());
        tracing::info!(
            servers = directory.len(),
            custom_servers = config.custom_servers.enabled,
            locale = catalog.active_locale().unwrap_or(waypoint_lang::BASE_LOCALE),
            "Waypoint ready"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            directory: Arc::new(directory),
            store,
            features: Features::new(config.custom_servers.enabled),
            welcome: load_notice(&config.welcome_path()),
            registry: SessionRegistry::new(),
        })
    }

    /// Runtime feature toggles shared by every session.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Active sessions.
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Message catalog shared by every session.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Custom server store shared by every session.
    pub fn store(&self) -> &ConfiguredStore {
        &self.store
    }

    /// Fresh menu for `player`.
    pub fn menu(&self, player: PlayerId) -> Menu<Arc<StaticDirectory>, ConfiguredStore> {
        Menu::new(
            player,
            Arc::clone(&self.catalog),
            Arc::clone(&self.directory),
            self.store.clone(),
            self.features.clone(),
        )
        .with_welcome(self.welcome.clone())
    }

    /// Run one player's menu session to completion over `transport`.
    ///
    /// The player is registered for the duration of the call.
    pub async fn run_session<T: Transport>(
        &self,
        player: PlayerId,
        transport: T,
    ) -> Result<SessionEnd, ServerError> {
        let Some(guard) = self.registry.register(player.clone()) else {
            tracing::warn!(%player, "Rejecting second session for player");
            return Err(ServerError::DuplicateSession(player));
        };

        let result = Runtime::new(transport, self.menu(player)).run().await;
        let player = guard.player().clone();
        drop(guard);

        result.map_err(|e| ServerError::Session { player, message: e.to_string() })
    }
}
