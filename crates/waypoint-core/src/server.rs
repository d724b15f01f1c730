//! Server entries and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which list a server belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerCategory {
    /// Featured servers run by their operators.
    Official,
    /// Community servers that run Geyser themselves.
    Geyser,
    /// Servers a player added to their own list.
    Custom,
}

impl ServerCategory {
    /// Human-readable category name, as shown in list titles.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Official => "Official",
            Self::Geyser => "Geyser",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for ServerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Image shown next to a server button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// Resource pack path on the client.
    Path(String),
    /// Remote image URL.
    Url(String),
}

/// One backend server a player can be sent to.
///
/// Immutable once built. Editing a custom server constructs a new entry and
/// replaces the old one in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerEntry {
    title: Option<String>,
    address: String,
    port: u16,
    online_mode: bool,
    bedrock: bool,
    category: ServerCategory,
    icon: Option<Icon>,
}

impl ServerEntry {
    /// Create a listed server with an explicit display title.
    pub fn new(
        title: impl Into<String>,
        address: impl Into<String>,
        port: u16,
        category: ServerCategory,
    ) -> Self {
        Self {
            title: Some(title.into()),
            address: address.into(),
            port,
            online_mode: true,
            bedrock: false,
            category,
            icon: None,
        }
    }

    /// Create a player-defined server. The address doubles as its title.
    pub fn custom(address: impl Into<String>, port: u16, online_mode: bool, bedrock: bool) -> Self {
        Self {
            title: None,
            address: address.into(),
            port,
            online_mode,
            bedrock,
            category: ServerCategory::Custom,
            icon: None,
        }
    }

    /// Set whether the backend authenticates players online.
    #[must_use]
    pub fn with_online_mode(mut self, online_mode: bool) -> Self {
        self.online_mode = online_mode;
        self
    }

    /// Set whether the backend speaks Bedrock natively.
    #[must_use]
    pub fn with_bedrock(mut self, bedrock: bool) -> Self {
        self.bedrock = bedrock;
        self
    }

    /// Attach a button icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Display title. Falls back to the address for untitled entries.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.address)
    }

    /// Hostname or IP address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Port number.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Backend authenticates players online.
    pub fn online_mode(&self) -> bool {
        self.online_mode
    }

    /// Backend is a Bedrock (or Geyser fronted) server.
    pub fn bedrock(&self) -> bool {
        self.bedrock
    }

    /// List this entry belongs to.
    pub fn category(&self) -> ServerCategory {
        self.category
    }

    /// Button icon. `None` if the entry has no image.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }
}

impl fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.title(), self.address, self.port)
    }
}
