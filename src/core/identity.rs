//! Identity types.
//!
//! Cards, containers (sets) and games are keyed by UUIDs assigned when their
//! definitions are authored. The newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Wrap an existing UUID.
            #[must_use]
            pub const fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh random identity.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the raw UUID.
            #[must_use]
            pub const fn raw(self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a single card.
    CardId,
    "Card"
);

uuid_id!(
    /// Unique identifier for a container (a card set).
    ContainerId,
    "Container"
);

uuid_id!(
    /// Unique identifier for the game a container belongs to.
    ///
    /// Renderers use it to pick the proxy definition for the game.
    GameId,
    "Game"
);
