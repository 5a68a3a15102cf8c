// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` type mapped into the application message, and stateful
//! ones turn their messages into `Event`s for the parent.
//!
//! # Components
//!
//! - [`searchbar`] - Header with the query input and Search button
//! - [`gallery`] - Responsive thumbnail grid
//! - [`load_more`] - Next-page button
//! - [`loader`] - Spinner shown while a search is in flight
//! - [`preview`] - Full-window overlay for the selected image
//! - [`notifications`] - Toasts for search feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom canvas widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod load_more;
pub mod loader;
pub mod notifications;
pub mod preview;
pub mod searchbar;
pub mod styles;
pub mod theming;
pub mod widgets;
