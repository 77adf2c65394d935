//! Card picture resolution: packaged art, cached proxies, generated proxies.
//!
//! ## Key Types
//!
//! - `ImageResolver`: Card → local picture path
//! - `ImageStore`: Directory primitives (`LocalImageStore` for disk)
//! - `ProxyRenderer`: External "render and save" step
//! - `ResolveError`: Broken install errors

pub mod error;
pub mod render;
pub mod resolver;
pub mod store;

pub use error::{ResolveError, ResolveResult};
pub use render::ProxyRenderer;
pub use resolver::ImageResolver;
pub use store::{ImageStore, LocalImageStore};
