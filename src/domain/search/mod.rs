// SPDX-License-Identifier: MPL-2.0
//! Search domain types.
//!
//! Value objects for queries, pagination and the images returned by the
//! search service. They carry no knowledge of HTTP or of the GUI.

pub mod newtypes;
pub mod types;

pub use newtypes::{Page, SearchQuery, TotalCount};
pub use types::{ImageResult, SearchPage};
