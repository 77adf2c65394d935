//! External container lookup.

use crate::core::{Container, ContainerId};

/// Lookup-by-identifier service for containers.
///
/// Answers must be stable for a given identifier. `ContainerIndex` keeps
/// the first answer for the rest of the process.
pub trait ContainerSource: Send + Sync {
    /// Find a container by id. `None` if it is not installed.
    fn container_by_id(&self, id: ContainerId) -> Option<Container>;
}

impl<F> ContainerSource for F
where
    F: Fn(ContainerId) -> Option<Container> + Send + Sync,
{
    fn container_by_id(&self, id: ContainerId) -> Option<Container> {
        self(id)
    }
}
