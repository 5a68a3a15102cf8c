// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! gallery and the preview overlay.
//!
//! The `App` struct owns the search controller, the downloaded images and the
//! toast queue, and translates messages into HTTP requests through
//! [`SearchClient`]. Startup policy (config loading, API key resolution,
//! initial query) lives here so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::search::{Controller, Event};
use crate::infrastructure::{ApiSettings, SearchClient};
use crate::media::ImageStore;
use crate::ui::notifications::{self, Notification};
use crate::ui::{loader, searchbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

const APP_TITLE: &str = "Iced Gallery";

/// Root Iced application state.
pub struct App {
    controller: Controller,
    searchbar: searchbar::State,
    images: ImageStore,
    client: SearchClient,
    notifications: notifications::Manager,
    loader: loader::State,
    /// Last known window width, drives the gallery column count.
    window_width: f32,
    theme: Theme,
    notification_duration: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.controller.phase())
            .field("results", &self.controller.results().len())
            .field("images", &self.images)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            controller: Controller::new(),
            searchbar: searchbar::State::default(),
            images: ImageStore::default(),
            client: SearchClient::new(ApiSettings::default()),
            notifications: notifications::Manager::new(),
            loader: loader::State::default(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            theme: Theme::Light,
            notification_duration: notifications::DEFAULT_DURATION,
        }
    }
}

impl App {
    /// Loads the configuration, resolves the API key, focuses the search
    /// input and submits the initial query from `Flags` if one was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let settings = config.api_settings(flags.api_key);
        let has_key = settings.has_key();
        tracing::info!(settings = ?settings, "starting");

        let mut app = App {
            client: SearchClient::new(settings),
            images: ImageStore::new(config.gallery.image_cache_capacity()),
            theme: config.display.theme_mode.resolve(),
            notification_duration: config.notifications.duration(),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }
        if !has_key {
            app.notifications.push(Notification::warning(format!(
                "No API key configured. Set {} or [api] key in settings.toml",
                config::ENV_API_KEY
            )));
        }

        let search = match flags.query {
            Some(query) => {
                app.searchbar = searchbar::State::with_value(query.clone());
                update::dispatch(&mut app.update_context(), Event::Submit(query))
            }
            None => Task::none(),
        };

        (app, Task::batch([searchbar::focus(), search]))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            controller: &mut self.controller,
            searchbar: &mut self.searchbar,
            images: &mut self.images,
            client: &self.client,
            notifications: &mut self.notifications,
            notification_duration: self.notification_duration,
        }
    }

    fn title(&self) -> String {
        match self.controller.query() {
            Some(query) => format!("{} - {APP_TITLE}", query.as_str()),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.controller.is_loading(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Searchbar(message) => {
                update::handle_searchbar_message(&mut self.update_context(), message)
            }
            Message::Gallery(message) => {
                update::handle_gallery_message(&mut self.update_context(), message)
            }
            Message::LoadMore(_) => update::handle_load_more(&mut self.update_context()),
            Message::Preview(_) => update::handle_dismiss_overlay(&mut self.update_context()),
            Message::EscapePressed => {
                if self.controller.overlay_visible() {
                    update::handle_dismiss_overlay(&mut self.update_context())
                } else {
                    Task::none()
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::SearchFinished { ticket, outcome } => {
                update::handle_search_finished(&mut self.update_context(), ticket, outcome)
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut self.update_context(), &url, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Tick(now) => {
                if self.controller.is_loading() {
                    self.loader.tick();
                }
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            searchbar: &self.searchbar,
            images: &self.images,
            notifications: &self.notifications,
            loader: &self.loader,
            window_width: self.window_width,
        })
    }
}
