// SPDX-License-Identifier: MPL-2.0
//! Search result types.

use super::newtypes::TotalCount;

/// One image returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub id: u64,
    /// Small preview used in the gallery grid.
    pub thumbnail_url: String,
    /// Large rendition shown in the preview overlay.
    pub full_size_url: String,
    /// Comma-separated tags, used as the image's description.
    pub tags: String,
}

/// One page of search results together with the server-reported total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub results: Vec<ImageResult>,
    pub total: TotalCount,
}
