//! Filter catalog.
//!
//! The registry is built once and never changes afterwards, so lookups and
//! listings need no locking and can run from any number of threads.
//!
//! # Architecture
//!
//! [`FilterRegistry::global()`] lazily builds the built-in catalog: the
//! color channel extractors followed by the built-in scalers. Custom
//! catalogs are assembled with [`FilterRegistry::from_descriptors`].
//!
//! Names are matched case-insensitively and must be unique under that
//! comparison.
//!
//! # Example
//!
//! ```rust
//! use imgscale_core::PixelBuffer;
//! use imgscale_ops::FilterRegistry;
//!
//! let registry = FilterRegistry::global();
//! assert!(registry.contains("scale 2x"));
//!
//! let out = registry.filter_image(&PixelBuffer::new(4, 4), "SCALE 2X").unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//!
//! assert!(registry.filter_image(&PixelBuffer::new(4, 4), "does-not-exist").is_none());
//! ```

use crate::channel::Channel;
use crate::descriptor::{FilterDescriptor, FilterInfo};
use crate::dispatch;
use crate::scalers;
use crate::{OpsError, OpsResult};
use imgscale_core::PixelBuffer;
use std::collections::HashMap;
use std::sync::OnceLock;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Immutable catalog of named filters.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: Vec<FilterDescriptor>,
    by_name: HashMap<String, usize>,
}

#[inline]
fn key(name: &str) -> String {
    name.to_lowercase()
}

impl FilterRegistry {
    /// Builds a registry from `descriptors`, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`OpsError::EmptyName`] if a name is empty
    /// - [`OpsError::InvalidScale`] if a scale factor is zero
    /// - [`OpsError::DuplicateFilter`] if two names match case-insensitively
    pub fn from_descriptors<I>(descriptors: I) -> OpsResult<Self>
    where
        I: IntoIterator<Item = FilterDescriptor>,
    {
        let mut filters = Vec::new();
        let mut by_name = HashMap::new();
        for desc in descriptors {
            if desc.name().trim().is_empty() {
                return Err(OpsError::EmptyName);
            }
            let (scale_x, scale_y) = desc.scale();
            if scale_x == 0 || scale_y == 0 {
                return Err(OpsError::InvalidScale {
                    name: desc.name().to_string(),
                    scale_x,
                    scale_y,
                });
            }
            let k = key(desc.name());
            if by_name.contains_key(&k) {
                return Err(OpsError::DuplicateFilter(desc.name().to_string()));
            }
            by_name.insert(k, filters.len());
            filters.push(desc);
        }
        debug!(count = filters.len(), "filter registry built");
        Ok(Self { filters, by_name })
    }

    /// Returns the global registry with the built-in filters.
    pub fn global() -> &'static FilterRegistry {
        static INSTANCE: OnceLock<FilterRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut registry = FilterRegistry {
                filters: Vec::new(),
                by_name: HashMap::new(),
            };
            registry.register_builtin_filters();
            debug!(count = registry.len(), "built-in filter registry ready");
            registry
        })
    }

    /// Built-in catalog: channel extractors, then scalers.
    fn builtin_descriptors() -> impl Iterator<Item = FilterDescriptor> {
        Channel::ALL
            .into_iter()
            .map(FilterDescriptor::channel)
            .chain(scalers::builtin())
    }

    fn register_builtin_filters(&mut self) {
        for desc in Self::builtin_descriptors() {
            // first registration of a name wins
            self.by_name.entry(key(desc.name())).or_insert(self.filters.len());
            self.filters.push(desc);
        }
    }

    /// Looks up a filter by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&FilterDescriptor> {
        self.by_name.get(&key(name)).map(|&i| &self.filters[i])
    }

    /// Returns `true` if a filter with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&key(name))
    }

    /// Snapshot of all filters in registration order.
    pub fn list(&self) -> Vec<FilterInfo> {
        self.filters.iter().map(FilterDescriptor::info).collect()
    }

    /// Filter names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.iter().map(FilterDescriptor::name)
    }

    /// All descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterDescriptor> + '_ {
        self.filters.iter()
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Applies the filter called `name` to `src`.
    ///
    /// Returns `None` if no such filter is registered; `src` is never
    /// modified either way.
    pub fn filter_image(&self, src: &PixelBuffer, name: &str) -> Option<PixelBuffer> {
        trace!(filter = name, "filter_image");
        let Some(filter) = self.get(name) else {
            debug!(filter = name, "filter not found");
            return None;
        };
        Some(dispatch::apply(filter, src))
    }
}
