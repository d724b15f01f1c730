//! Read-only directory of listed servers.

use std::sync::Arc;

use crate::{ServerCategory, ServerEntry};

/// Read-only, process-wide listing of servers by category.
///
/// Refreshing the listing is the implementor's business; callers take a
/// fresh snapshot on every render.
pub trait ServerDirectory: Send + Sync + 'static {
    /// Servers in `category`, in display order.
    ///
    /// Player-defined servers live in the custom store, so directories
    /// usually return nothing for [`ServerCategory::Custom`].
    fn list_by_category(&self, category: ServerCategory) -> Vec<ServerEntry>;
}

impl<D: ServerDirectory + ?Sized> ServerDirectory for Arc<D> {
    fn list_by_category(&self, category: ServerCategory) -> Vec<ServerEntry> {
        (**self).list_by_category(category)
    }
}

/// Directory backed by a fixed list, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    servers: Vec<ServerEntry>,
}

impl StaticDirectory {
    /// Create a directory from entries in display order.
    pub fn new(servers: Vec<ServerEntry>) -> Self {
        Self { servers }
    }

    /// Total number of listed servers across categories.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Directory has no servers.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl ServerDirectory for StaticDirectory {
    fn list_by_category(&self, category: ServerCategory) -> Vec<ServerEntry> {
        self.servers.iter().filter(|s| s.category() == category).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_category_in_order() {
        let directory = StaticDirectory::new(vec![
            ServerEntry::new("A", "a.example", 19132, ServerCategory::Official),
            ServerEntry::new("B", "b.example", 25565, ServerCategory::Geyser),
            ServerEntry::new("C", "c.example", 19132, ServerCategory::Official),
        ]);

        let official: Vec<_> = directory
            .list_by_category(ServerCategory::Official)
            .iter()
            .map(|s| s.title().to_string())
            .collect();

        assert_eq!(official, ["A", "C"]);
        assert_eq!(directory.list_by_category(ServerCategory::Geyser).len(), 1);
        assert!(directory.list_by_category(ServerCategory::Custom).is_empty());
    }
}
