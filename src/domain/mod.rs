// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to keep it testable.
//!
//! # Modules
//!
//! - [`search`]: Search types ([`SearchQuery`](search::SearchQuery),
//!   [`Page`](search::Page), [`TotalCount`](search::TotalCount),
//!   [`ImageResult`](search::ImageResult))

pub mod search;
