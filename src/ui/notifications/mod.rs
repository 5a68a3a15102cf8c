// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for search feedback.
//!
//! Toasts report how many images a query matched, request failures and
//! startup warnings without blocking interaction.
//!
//! # Components
//!
//! - [`Notification`]: message, severity and display duration
//! - [`Manager`]: queuing and expiry, at most three toasts on screen
//! - [`Toast`]: rendering in the top-right corner
//!
//! # Usage
//!
//! ```
//! use iced_gallery::ui::notifications::{Manager, Notification};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("We found 500 images").auto_dismiss(Duration::from_secs(4)));
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity, DEFAULT_DURATION};
pub use toast::Toast;
