// SPDX-License-Identifier: MPL-2.0
//! Message handlers and effect execution.
//!
//! Handlers feed events to the search controller and turn the returned
//! effects into image store updates, notifications and async tasks.

use super::Message;
use crate::application::search::{Controller, Effect, Event, FetchRequest, FetchTicket};
use crate::domain::search::{ImageResult, SearchPage};
use crate::error::SearchRequestError;
use crate::infrastructure::SearchClient;
use crate::media::{ImageKind, ImageStore};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::searchbar::{self, Event as SearchbarEvent};
use iced::widget::image::Handle;
use iced::Task;
use std::time::Duration;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller,
    pub searchbar: &'a mut searchbar::State,
    pub images: &'a mut ImageStore,
    pub client: &'a SearchClient,
    pub notifications: &'a mut notifications::Manager,
    pub notification_duration: Duration,
}

pub fn handle_searchbar_message(ctx: &mut UpdateContext<'_>, message: searchbar::Message) -> Task<Message> {
    match ctx.searchbar.update(message) {
        SearchbarEvent::None => Task::none(),
        SearchbarEvent::QuerySubmitted(text) => dispatch(ctx, Event::Submit(text)),
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::Selected(result) => dispatch(ctx, Event::SelectImage(result)),
    }
}

pub fn handle_load_more(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    dispatch(ctx, Event::LoadMore)
}

pub fn handle_dismiss_overlay(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    dispatch(ctx, Event::DismissOverlay)
}

pub fn handle_search_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: FetchTicket,
    outcome: Result<SearchPage, SearchRequestError>,
) -> Task<Message> {
    dispatch(ctx, Event::FetchCompleted { ticket, outcome })
}

/// Stores a finished image download.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Handle, SearchRequestError>,
) {
    if let Err(err) = &result {
        tracing::warn!(error = %err, "image download failed");
    }
    if !ctx.images.complete(url, result) {
        tracing::debug!("dropping image download for a cleared slot");
    }
}

/// Runs one controller transition and executes its effects.
pub fn dispatch(ctx: &mut UpdateContext<'_>, event: Event) -> Task<Message> {
    let effects = ctx.controller.handle(event);
    run_effects(ctx, effects)
}

fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();

    for effect in effects {
        match effect {
            Effect::Fetch(request) => tasks.push(fetch_page(ctx.client, request)),
            Effect::ResultsCleared => ctx.images.clear(),
            Effect::ResultsAppended(results) => {
                tracing::info!(count = results.len(), "search results received");
                tasks.extend(results.iter().filter_map(|result| {
                    fetch_image(ctx, &result.thumbnail_url, ImageKind::Thumbnail)
                }));
            }
            Effect::Announce(total) => {
                ctx.notifications.push(
                    Notification::success(format!("We found {total} images"))
                        .auto_dismiss(ctx.notification_duration),
                );
            }
            Effect::ReportError(err) => {
                tracing::error!(error = %err, "search request failed");
                ctx.notifications
                    .push(Notification::error(err.message()).auto_dismiss(ctx.notification_duration));
            }
            Effect::ShowPreview(result) => {
                tasks.extend(preview_downloads(ctx, &result));
            }
        }
    }

    Task::batch(tasks)
}

/// Starts the full-size download, and retries the thumbnail if it failed.
fn preview_downloads(ctx: &mut UpdateContext<'_>, result: &ImageResult) -> Vec<Task<Message>> {
    [
        (&result.full_size_url, ImageKind::FullSize),
        (&result.thumbnail_url, ImageKind::Thumbnail),
    ]
    .into_iter()
    .filter_map(|(url, kind)| fetch_image(ctx, url, kind))
    .collect()
}

fn fetch_page(client: &SearchClient, request: FetchRequest) -> Task<Message> {
    tracing::info!(query = %request.query, page = request.page.value(), "searching");

    let client = client.clone();
    let FetchRequest { ticket, query, page } = request;
    Task::perform(
        async move { client.fetch_images(&query, page).await },
        move |outcome| Message::SearchFinished { ticket, outcome },
    )
}

/// Downloads `url` unless it is already loading or loaded.
fn fetch_image(ctx: &mut UpdateContext<'_>, url: &str, kind: ImageKind) -> Option<Task<Message>> {
    if !ctx.images.request(url, kind) {
        return None;
    }
    tracing::debug!("downloading image");

    let client = ctx.client.clone();
    let url = url.to_string();
    let target = url.clone();
    Some(Task::perform(
        async move {
            client
                .fetch_image_bytes(&target)
                .await
                .map(Handle::from_bytes)
        },
        move |result| Message::ImageFetched { url, result },
    ))
}
