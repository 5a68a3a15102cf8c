// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.
//!
//! # Categories
//!
//! - **Search API**: endpoint and page size
//! - **Notifications**: toast display duration
//! - **Gallery**: number of downloaded images kept in memory

// ==========================================================================
// Search API Defaults
// ==========================================================================

pub use crate::infrastructure::search_api::{
    DEFAULT_BASE_URL, DEFAULT_PER_PAGE, MAX_PER_PAGE, MIN_PER_PAGE,
};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast display duration (in seconds).
pub const DEFAULT_NOTIFICATION_DURATION_SECS: u64 = 4;

/// Minimum toast display duration (in seconds).
pub const MIN_NOTIFICATION_DURATION_SECS: u64 = 1;

/// Maximum toast display duration (in seconds).
pub const MAX_NOTIFICATION_DURATION_SECS: u64 = 30;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

pub use crate::media::store::{
    DEFAULT_CAPACITY as DEFAULT_IMAGE_CACHE_CAPACITY, MIN_CAPACITY as MIN_IMAGE_CACHE_CAPACITY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_bounds_are_valid() {
        assert!(MIN_NOTIFICATION_DURATION_SECS > 0);
        assert!(MIN_NOTIFICATION_DURATION_SECS <= DEFAULT_NOTIFICATION_DURATION_SECS);
        assert!(DEFAULT_NOTIFICATION_DURATION_SECS <= MAX_NOTIFICATION_DURATION_SECS);
    }

    #[test]
    fn per_page_bounds_are_valid() {
        assert!(MIN_PER_PAGE <= DEFAULT_PER_PAGE);
        assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    }

    #[test]
    fn image_cache_default_respects_floor() {
        assert!(DEFAULT_IMAGE_CACHE_CAPACITY >= MIN_IMAGE_CACHE_CAPACITY);
    }
}
