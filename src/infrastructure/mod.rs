// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations wrapping external services and I/O.
//!
//! # Available Adapters
//!
//! - [`search_api`]: HTTP client for the Pixabay-compatible image-search API

pub mod search_api;

pub use search_api::{ApiSettings, SearchClient};
