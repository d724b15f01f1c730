//! Layered message catalog.
//!
//! Two lookup scopes, searched in order:
//!
//! 1. the active layer (the configured locale, may be sparse)
//! 2. the base layer (always complete, see [`crate::defaults`])
//!
//! A key found in neither resolves to itself, so a missing translation shows
//! up as its identifier instead of breaking the screen.
//!
//! # Lifecycle
//!
//! The catalog is configured once at startup ([`MessageCatalog::bootstrap`],
//! [`MessageCatalog::set_active_layer`]) and then shared read-only, typically
//! as `Arc<MessageCatalog>`.

use std::{
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{CatalogError, Template, defaults, lang_file};

/// Locale of the base layer and its file name stem.
pub const BASE_LOCALE: &str = "en_US";

/// Sub-folder of the data folder holding `<locale>.lang` files.
const LANG_FOLDER: &str = "lang";

type Layer = HashMap<String, String>;

/// Message catalog with a base layer and an optional active layer.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    /// Folder holding language files. `None` for in-memory catalogs.
    folder: Option<PathBuf>,
    /// Base layer: built-in defaults overlaid with the base file.
    base: Layer,
    /// Every locale load attempted so far. `None` marks a failed load.
    layers: HashMap<String, Option<Arc<Layer>>>,
    /// Currently selected locale and its layer.
    active: Option<(String, Arc<Layer>)>,
}

impl MessageCatalog {
    /// Catalog with only the built-in base layer and no language folder.
    pub fn in_memory() -> Self {
        let base =
            defaults::ENTRIES.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();

        Self { folder: None, base, layers: HashMap::new(), active: None }
    }

    /// Load the catalog from `<data_folder>/lang`.
    ///
    /// Creates the folder and writes the base file on first run. Any I/O or
    /// parse failure is logged and the catalog carries on with the built-in
    /// base layer, so startup never fails here.
    pub fn bootstrap(data_folder: &Path) -> Self {
        let mut catalog = Self::in_memory();
        let folder = data_folder.join(LANG_FOLDER);

        if !folder.is_dir() {
            if let Err(source) = fs::create_dir_all(&folder) {
                let error = CatalogError::Io { path: folder, source };
                tracing::error!(%error, "Failed to initialize language folder, using built-in messages");
                return catalog;
            }
            tracing::info!(folder = %folder.display(), "Created language folder");
        }

        match load_base(&folder) {
            Ok(entries) => catalog.base.extend(entries),
            Err(error) => {
                tracing::error!(%error, "Failed to load base language, using built-in messages");
            },
        }

        catalog.folder = Some(folder);
        catalog
    }

    /// Register a layer from memory, replacing any cached layer for `locale`.
    #[must_use]
    pub fn with_layer<K, V>(mut self, locale: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let layer: Layer = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.layers.insert(locale.to_string(), Some(Arc::new(layer)));
        self
    }

    /// Select the active locale.
    ///
    /// An empty id or the base locale clears the active layer. Otherwise the
    /// layer is taken from cache or loaded from `<locale>.lang` (at most one
    /// load attempt per id). If it cannot be loaded the active layer is
    /// cleared and the catalog serves the base layer only.
    pub fn set_active_layer(&mut self, locale: &str) {
        let locale = locale.trim();
        if locale.is_empty() || locale == BASE_LOCALE {
            self.active = None;
            return;
        }

        let layer = match self.layers.get(locale) {
            Some(cached) => cached.clone(),
            None => {
                let loaded = self.load_layer(locale).map(Arc::new);
                self.layers.insert(locale.to_string(), loaded.clone());
                loaded
            },
        };

        match layer {
            Some(layer) => {
                tracing::info!(locale, "Loaded language");
                self.active = Some((locale.to_string(), layer));
            },
            None => {
                tracing::warn!(locale, default = BASE_LOCALE, "Language not found, using default");
                self.active = None;
            },
        }
    }

    /// Active locale id. `None` when serving the base layer only.
    pub fn active_locale(&self) -> Option<&str> {
        self.active.as_ref().map(|(locale, _)| locale.as_str())
    }

    /// Whether the active layer itself defines `key`.
    ///
    /// `false` when no layer is active, even if the base layer has the key.
    pub fn is_translated(&self, key: &str) -> bool {
        self.active.as_ref().is_some_and(|(_, layer)| layer.contains_key(key))
    }

    /// Template for `key`: active layer, then base layer, then `key` itself.
    pub fn resolve(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    /// Resolve `key` and substitute `args` into its `%s` placeholders.
    ///
    /// On an argument count mismatch the unsubstituted template is returned
    /// and the mismatch is logged.
    pub fn resolve_formatted(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        let template = self.lookup(key);

        match Template::parse(template).render(args) {
            Ok(message) => message,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to format message");
                template.to_string()
            },
        }
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some((locale, layer)) = &self.active {
            if let Some(value) = layer.get(key) {
                return value.as_str();
            }
            tracing::trace!(key, locale = locale.as_str(), "Falling back to base language");
        }

        match self.base.get(key) {
            Some(value) => value.as_str(),
            None => {
                tracing::warn!(key, "Missing message key");
                key
            },
        }
    }

    fn load_layer(&self, locale: &str) -> Option<Layer> {
        if !is_valid_locale(locale) {
            tracing::warn!(locale, "Unrecognized language id");
            return None;
        }

        let folder = self.folder.as_ref()?;
        let path = folder.join(format!("{locale}.lang"));

        match read_layer(&path) {
            Ok(layer) => Some(layer),
            Err(CatalogError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Language file not found");
                None
            },
            Err(error) => {
                tracing::error!(locale, %error, "Failed to load language");
                None
            },
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Locale ids name files, so only `[A-Za-z0-9_-]` is accepted.
fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty() && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Write the base file if missing, then read it back.
fn load_base(folder: &Path) -> Result<Layer, CatalogError> {
    let path = folder.join(format!("{BASE_LOCALE}.lang"));

    if !path.exists() {
        let contents = lang_file::render(defaults::BASE_FILE_HEADER, defaults::ENTRIES.iter().copied());
        fs::write(&path, contents).map_err(|source| CatalogError::Io { path: path.clone(), source })?;
        tracing::info!(path = %path.display(), "Created default language file");
    }

    read_layer(&path)
}

fn read_layer(path: &Path) -> Result<Layer, CatalogError> {
    let source = fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;

    lang_file::parse(&source).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        line: e.line,
        reason: e.reason,
    })
}
