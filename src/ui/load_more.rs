// SPDX-License-Identifier: MPL-2.0
//! "Load more" button below the gallery.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Text};
use iced::{alignment, Element, Length};

pub const LABEL: &str = "Load more";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
}

/// Renders the button centered in a full-width row.
///
/// Callers decide visibility; the button is always enabled when shown.
pub fn view<'a>() -> Element<'a, Message> {
    let label = Text::new(LABEL)
        .size(typography::BODY_LG)
        .align_x(alignment::Horizontal::Center);

    let load_more = button(label)
        .on_press(Message::Pressed)
        .width(Length::Fixed(sizing::LOAD_MORE_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Container::new(load_more)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .into()
}
