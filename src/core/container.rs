//! Containers (card sets).
//!
//! A container owns the on-disk locations used to find a card's picture:
//! the packaged image directory shipped with an art pack and the proxy
//! directory where generated substitutes are written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::identity::{ContainerId, GameId};

/// A card set and its image locations.
///
/// ## Example
///
/// ```
/// use card_imagery::core::{Container, ContainerId, GameId};
///
/// let set = Container::new(ContainerId::random(), GameId::random(), "Core Set")
///     .with_image_dir("/games/demo/sets/core/cards")
///     .with_proxy_dir("/games/demo/sets/core/proxy");
///
/// assert!(set.proxy_dir().ends_with("proxy"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Unique identifier.
    pub id: ContainerId,

    /// Game this container belongs to (proxy generation context).
    pub game_id: GameId,

    /// Display name.
    pub name: String,

    /// Directory holding packaged card images.
    pub image_dir: PathBuf,

    /// Directory holding generated proxy images.
    pub proxy_dir: PathBuf,
}

impl Container {
    /// Create a container with empty image locations.
    #[must_use]
    pub fn new(id: ContainerId, game_id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            game_id,
            name: name.into(),
            image_dir: PathBuf::new(),
            proxy_dir: PathBuf::new(),
        }
    }

    /// Set the packaged image directory (builder pattern).
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Set the proxy image directory (builder pattern).
    #[must_use]
    pub fn with_proxy_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.proxy_dir = dir.into();
        self
    }

    #[must_use]
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    #[must_use]
    pub fn proxy_dir(&self) -> &Path {
        &self.proxy_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_dirs() {
        let set = Container::new(ContainerId::random(), GameId::random(), "Base")
            .with_image_dir("cards")
            .with_proxy_dir("proxy");

        assert_eq!(set.image_dir(), Path::new("cards"));
        assert_eq!(set.proxy_dir(), Path::new("proxy"));
        assert_eq!(set.name, "Base");
    }

    #[test]
    fn test_new_has_empty_dirs() {
        let set = Container::new(ContainerId::random(), GameId::random(), "Empty");
        assert_eq!(set.image_dir(), Path::new(""));
        assert_eq!(set.proxy_dir(), Path::new(""));
    }
}
