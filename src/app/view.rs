// SPDX-License-Identifier: MPL-2.0
//! View composition for the application window.
//!
//! The window is a header with the search bar above a scrollable body
//! (gallery, spinner, load-more button). The preview overlay and the toasts
//! are stacked on top.

use super::Message;
use crate::application::search::Controller;
use crate::media::ImageStore;
use crate::ui::notifications::{self, Toast};
use crate::ui::{gallery, load_more, loader, preview, searchbar};
use iced::widget::{Column, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub controller: &'a Controller,
    pub searchbar: &'a searchbar::State,
    pub images: &'a ImageStore,
    pub notifications: &'a notifications::Manager,
    pub loader: &'a loader::State,
    pub window_width: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;

    let mut body = Column::new().width(Length::Fill).push(
        gallery::view(gallery::ViewContext {
            results: controller.results(),
            images: ctx.images,
            window_width: ctx.window_width,
        })
        .map(Message::Gallery),
    );

    if controller.is_loading() {
        body = body.push(ctx.loader.view());
    }
    if controller.load_more_visible() {
        body = body.push(load_more::view().map(Message::LoadMore));
    }

    let content = Column::new()
        .push(ctx.searchbar.view().map(Message::Searchbar))
        .push(Scrollable::new(body).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    if let Some(selected) = controller.selected() {
        stack = stack.push(preview::view(selected, ctx.images).map(Message::Preview));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}
