// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`search`]: The search/pagination state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - It performs no I/O; the presentation layer executes the effects it returns
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::search::{Controller, Effect, Event};
//!
//! let mut controller = Controller::new();
//! let effects = controller.handle(Event::Submit("cats".into()));
//! assert!(effects.iter().any(|e| matches!(e, Effect::Fetch(_))));
//! ```

pub mod search;
