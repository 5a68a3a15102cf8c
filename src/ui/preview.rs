// SPDX-License-Identifier: MPL-2.0
//! Full-window preview of the selected image.
//!
//! The overlay sits on top of the gallery and swallows all input below it.
//! A click anywhere on it dismisses it, as does Escape (handled by the app
//! subscription).

use crate::domain::search::ImageResult;
use crate::media::ImageStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, mouse_area, opaque, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss,
}

/// Renders the overlay for `selected`.
///
/// Shows the full-size image once downloaded and the thumbnail meanwhile.
pub fn view<'a>(selected: &'a ImageResult, images: &'a ImageStore) -> Element<'a, Message> {
    let handle = images
        .handle(&selected.full_size_url)
        .or_else(|| images.handle(&selected.thumbnail_url));

    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new("").into(),
    };

    let mut content = Column::new()
        .push(Container::new(picture).height(Length::Fill).width(Length::Fill))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);
    if !selected.tags.is_empty() {
        content = content.push(Text::new(selected.tags.as_str()).size(typography::BODY));
    }

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Dismiss))
}
