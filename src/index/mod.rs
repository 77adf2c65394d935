//! Container lookup: the external source and the memoizing index over it.
//!
//! ## Key Types
//!
//! - `ContainerSource`: Lookup-by-identifier service (set storage)
//! - `ContainerIndex`: Resolve-once cache shared by every card

pub mod container_index;
pub mod source;

pub use container_index::ContainerIndex;
pub use source::ContainerSource;
