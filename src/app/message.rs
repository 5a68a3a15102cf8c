// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::search::FetchTicket;
use crate::domain::search::SearchPage;
use crate::error::SearchRequestError;
use crate::ui::{gallery, load_more, notifications, preview, searchbar};
use iced::widget::image::Handle;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; async completions and native events arrive directly.
#[derive(Debug, Clone)]
pub enum Message {
    Searchbar(searchbar::Message),
    Gallery(gallery::Message),
    LoadMore(load_more::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    /// A search request finished.
    SearchFinished {
        ticket: FetchTicket,
        outcome: Result<SearchPage, SearchRequestError>,
    },
    /// An image download finished.
    ImageFetched {
        url: String,
        result: Result<Handle, SearchRequestError>,
    },
    WindowResized(Size),
    EscapePressed,
    /// Periodic tick for the spinner and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Query submitted as soon as the window opens.
    pub query: Option<String>,
    /// API key override; takes precedence over `ICED_GALLERY_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
