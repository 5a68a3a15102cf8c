// SPDX-License-Identifier: MPL-2.0
//! In-memory store for downloaded gallery images.
//!
//! # Design
//!
//! - **URL-keyed**: Thumbnails and full-size renditions are indexed by their URL
//! - **Pinned thumbnails**: Thumbnails of the current results stay until [`ImageStore::clear`]
//! - **LRU full-size images**: Previews are count-bounded, capacity set from configuration
//! - **No duplicate downloads**: A URL already loading or loaded is not requested again
//!
//! Slots are created when a download starts and filled when it finishes.
//! A completion for a URL whose slot was cleared in between is dropped, so
//! downloads started for a previous query never reappear.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Default number of full-size images kept in memory.
pub const DEFAULT_CAPACITY: usize = 600;

/// Smallest accepted capacity.
pub const MIN_CAPACITY: usize = 16;

/// State of one stored image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Download in progress.
    Loading,
    /// Bytes downloaded; the handle decodes lazily when rendered.
    Ready(Handle),
    /// Download failed.
    Failed,
}

/// Which rendition of a result an image is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Grid thumbnail, kept for as long as its result is displayed.
    Thumbnail,
    /// Preview rendition, evicted least recently used first.
    FullSize,
}

/// Image handles keyed by URL.
pub struct ImageStore {
    thumbnails: HashMap<String, ImageSlot>,
    full_size: LruCache<String, ImageSlot>,
}

impl ImageStore {
    /// Creates a store holding at most `capacity` full-size images (at least [`MIN_CAPACITY`]).
    ///
    /// Thumbnails are not counted against the capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(MIN_CAPACITY)).unwrap_or(NonZeroUsize::MIN);
        Self {
            thumbnails: HashMap::new(),
            full_size: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading.
    ///
    /// Returns `true` if the caller should start a download, `false` if the
    /// image is already loading or available. Failed images are retried.
    pub fn request(&mut self, url: &str, kind: ImageKind) -> bool {
        let existing = match kind {
            ImageKind::Thumbnail => self.thumbnails.get(url),
            ImageKind::FullSize => self.full_size.get(url),
        };
        if matches!(existing, Some(ImageSlot::Loading | ImageSlot::Ready(_))) {
            return false;
        }

        match kind {
            ImageKind::Thumbnail => {
                self.thumbnails.insert(url.to_string(), ImageSlot::Loading);
            }
            ImageKind::FullSize => {
                self.full_size.put(url.to_string(), ImageSlot::Loading);
            }
        }
        true
    }

    /// Records the outcome of a download started by [`request`](Self::request).
    ///
    /// Returns `false` when no download for `url` was pending.
    pub fn complete<E>(&mut self, url: &str, result: Result<Handle, E>) -> bool {
        let slot = match self.thumbnails.get_mut(url) {
            Some(slot) => Some(slot),
            None => self.full_size.peek_mut(url),
        };
        match slot {
            Some(slot @ ImageSlot::Loading) => {
                *slot = match result {
                    Ok(handle) => ImageSlot::Ready(handle),
                    Err(_) => ImageSlot::Failed,
                };
                true
            }
            _ => false,
        }
    }

    /// Returns the slot for `url` without updating LRU order.
    #[must_use]
    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.thumbnails
            .get(url)
            .or_else(|| self.full_size.peek(url))
    }

    /// Returns the decoded handle for `url`, if available.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slot(url) {
            Some(ImageSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Removes every image, pinned thumbnails included.
    pub fn clear(&mut self) {
        self.thumbnails.clear();
        self.full_size.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.thumbnails.len() + self.full_size.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of full-size images kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.full_size.cap().get()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStore")
            .field("thumbnails", &self.thumbnails.len())
            .field("full_size", &self.full_size.len())
            .field("capacity", &self.full_size.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    #[test]
    fn new_store_is_empty() {
        let store = ImageStore::default();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_has_a_floor() {
        assert_eq!(ImageStore::new(0).capacity(), MIN_CAPACITY);
    }

    #[test]
    fn request_is_not_repeated_while_loading_or_ready() {
        let mut store = ImageStore::default();
        assert!(store.request("a", ImageKind::Thumbnail));
        assert!(!store.request("a", ImageKind::Thumbnail));

        assert!(store.complete::<()>("a", Ok(handle())));
        assert!(!store.request("a", ImageKind::Thumbnail));
        assert!(store.handle("a").is_some());
    }

    #[test]
    fn failed_download_can_be_retried() {
        let mut store = ImageStore::default();
        store.request("a", ImageKind::FullSize);
        assert!(store.complete("a", Err("timeout")));
        assert!(matches!(store.slot("a"), Some(ImageSlot::Failed)));
        assert!(store.handle("a").is_none());

        assert!(store.request("a", ImageKind::FullSize));
    }

    #[test]
    fn completion_without_request_is_dropped() {
        let mut store = ImageStore::default();
        assert!(!store.complete::<()>("a", Ok(handle())));
        assert!(store.slot("a").is_none());
    }

    #[test]
    fn completion_after_clear_is_dropped() {
        let mut store = ImageStore::default();
        store.request("a", ImageKind::Thumbnail);
        store.request("b", ImageKind::FullSize);
        store.clear();

        assert!(!store.complete::<()>("a", Ok(handle())));
        assert!(!store.complete::<()>("b", Ok(handle())));
        assert!(store.is_empty());
    }

    #[test]
    fn oldest_full_size_images_are_evicted() {
        let mut store = ImageStore::new(MIN_CAPACITY);
        for i in 0..=MIN_CAPACITY {
            store.request(&format!("img-{i}"), ImageKind::FullSize);
        }

        assert_eq!(store.len(), MIN_CAPACITY);
        assert!(store.slot("img-0").is_none());
        assert!(store.slot(&format!("img-{MIN_CAPACITY}")).is_some());
    }

    #[test]
    fn thumbnails_beyond_capacity_all_stay_available() {
        let mut store = ImageStore::new(MIN_CAPACITY);
        let urls: Vec<String> = (0..MIN_CAPACITY + 8)
            .map(|i| format!("thumb-{i}"))
            .collect();
        for url in &urls {
            assert!(store.request(url, ImageKind::Thumbnail));
            assert!(store.complete::<()>(url, Ok(handle())));
        }
        // Previews cycling through the LRU must not push thumbnails out.
        for i in 0..MIN_CAPACITY * 2 {
            store.request(&format!("full-{i}"), ImageKind::FullSize);
        }

        let missing = urls.iter().filter(|url| store.handle(url).is_none()).count();
        assert_eq!(missing, 0);
        assert_eq!(store.len(), urls.len() + MIN_CAPACITY);
    }
}
