//! Card picture resolution.
//!
//! Resolution order for `picture`:
//! 1. Internal resource references (`pack://...`) are returned unchanged
//! 2. Packaged image `<key>.*` in the container's image directory,
//!    shortest file name first
//! 3. Cached proxy `<key>.png` in the container's proxy directory
//! 4. Generate the proxy at `<proxy dir>/<key>.png` and return that path
//!
//! `<key>` is `Card::image_key`. Step 4 returns the target path whether or
//! not the renderer managed to write it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::cards::{proxy_mappings, Card};
use crate::core::{Container, ResolverConfig};
use crate::index::{ContainerIndex, ContainerSource};

use super::error::{ResolveError, ResolveResult};
use super::render::ProxyRenderer;
use super::store::ImageStore;

/// Resolves cards to local picture paths.
pub struct ImageResolver<S, St, R> {
    index: ContainerIndex<S>,
    store: St,
    renderer: R,
    config: ResolverConfig,
}

impl<S, St, R> ImageResolver<S, St, R>
where
    S: ContainerSource,
    St: ImageStore,
    R: ProxyRenderer,
{
    /// Create a resolver with the default configuration.
    #[must_use]
    pub fn new(index: ContainerIndex<S>, store: St, renderer: R) -> Self {
        Self::with_config(index, store, renderer, ResolverConfig::default())
    }

    #[must_use]
    pub fn with_config(
        index: ContainerIndex<S>,
        store: St,
        renderer: R,
        config: ResolverConfig,
    ) -> Self {
        Self {
            index,
            store,
            renderer,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn index(&self) -> &ContainerIndex<S> {
        &self.index
    }

    #[must_use]
    pub fn store(&self) -> &St {
        &self.store
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Resolve the picture for a card's active alternate.
    ///
    /// Fails only if the container is not installed or its packaged image
    /// directory is missing.
    pub fn picture(&self, card: &Card) -> ResolveResult<String> {
        if self.config.is_internal(&card.image_uri) {
            return Ok(card.image_uri.clone());
        }

        let container = self.container(card)?;
        let image_dir = container.image_dir();
        if !self.store.dir_exists(image_dir) {
            return Err(ResolveError::BrokenContainer {
                path: image_dir.to_path_buf(),
            });
        }

        let key = card.image_key();
        if let Some(found) = self.packaged_image(image_dir, &key)? {
            return Ok(path_string(&found));
        }
        if let Some(found) = self.cached_proxy(container.proxy_dir(), &key)? {
            return Ok(path_string(&found));
        }

        let target = self.proxy_target(&container, &key);
        self.generate(&container, card, &target);
        Ok(path_string(&target))
    }

    /// Resolve the proxy picture for a card, ignoring packaged images.
    ///
    /// Generates the proxy if it is not cached yet and returns its path.
    pub fn proxy_picture(&self, card: &Card) -> ResolveResult<String> {
        let container = self.container(card)?;
        let key = card.image_key();
        let target = self.proxy_target(&container, &key);

        if self.cached_proxy(container.proxy_dir(), &key)?.is_none() {
            self.generate(&container, card, &target);
        }
        Ok(path_string(&target))
    }

    fn container(&self, card: &Card) -> ResolveResult<Arc<Container>> {
        self.index
            .resolve(card.container_id)
            .ok_or(ResolveError::UnknownContainer {
                container_id: card.container_id,
            })
    }

    /// Shortest `<key>.*` file name; ties keep listing order.
    fn packaged_image(&self, dir: &Path, key: &str) -> ResolveResult<Option<PathBuf>> {
        let prefix = format!("{key}.");
        let mut matches: Vec<String> = self
            .list(dir)?
            .into_iter()
            .filter(|name| starts_with_ignore_case(name, &prefix))
            .collect();
        matches.sort_by_key(|name| name.len());
        Ok(matches.first().map(|name| dir.join(name)))
    }

    fn cached_proxy(&self, dir: &Path, key: &str) -> ResolveResult<Option<PathBuf>> {
        let wanted = self.proxy_file_name(key);
        Ok(self
            .list(dir)?
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(&wanted))
            .map(|name| dir.join(name)))
    }

    fn list(&self, dir: &Path) -> ResolveResult<Vec<String>> {
        self.store.list_files(dir).map_err(|source| ResolveError::Io {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn proxy_file_name(&self, key: &str) -> String {
        format!("{key}.{}", self.config.proxy_extension)
    }

    fn proxy_target(&self, container: &Container, key: &str) -> PathBuf {
        container.proxy_dir().join(self.proxy_file_name(key))
    }

    fn generate(&self, container: &Container, card: &Card, target: &Path) {
        let fields = proxy_mappings(card);
        if !self.config.diagnostics {
            self.renderer.render_proxy(container, &fields, target);
            return;
        }

        let started = Instant::now();
        self.renderer.render_proxy(container, &fields, target);
        let elapsed = started.elapsed();

        let threshold = self.config.slow_render_threshold();
        if elapsed > threshold {
            warn!("Proxy gen lagged by {} ms", (elapsed - threshold).as_millis());
        } else {
            info!("Proxy gen took {} ms", elapsed.as_millis());
        }
    }
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
