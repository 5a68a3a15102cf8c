// SPDX-License-Identifier: MPL-2.0
//! Search bar shown in the window header.
//!
//! Typing only updates the local text. A query is emitted on explicit
//! submission (Enter or the Search button), trimmed; blank text is still
//! reported and left for the search controller to ignore.
//!
//! The input takes keyboard focus when the window opens.

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, operation, text_input, Container, Id, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Task, Theme};

pub const PLACEHOLDER: &str = "Search images and photos";

/// Widget id of the query input.
pub const INPUT_ID: &str = "searchbar-input";

/// Moves keyboard focus to the query input.
pub fn focus<Message: Send + 'static>() -> Task<Message> {
    operation::focus(Id::new(INPUT_ID))
}

/// Local text of the search input.
#[derive(Debug, Clone, Default)]
pub struct State {
    value: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    QuerySubmitted(String),
}

impl State {
    /// Creates a search bar pre-filled with `value` (initial query from the command line).
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.value = value;
                Event::None
            }
            Message::Submitted => Event::QuerySubmitted(self.value.trim().to_string()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let submit = button(
            Container::new(Text::new("Search").size(typography::BODY))
                .center_y(Length::Fill)
                .padding([0.0, spacing::SM]),
        )
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .on_press(Message::Submitted)
        .style(styles::button::search_submit);

        let input = text_input(PLACEHOLDER, &self.value)
            .id(Id::new(INPUT_ID))
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(typography::BODY_LG)
            .padding([spacing::XS, spacing::XS])
            .width(Length::Fill)
            .style(search_input);

        let form = Row::new()
            .push(submit)
            .push(input)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill);

        Container::new(Container::new(form).max_width(sizing::SEARCH_FORM_WIDTH))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
            .padding([spacing::SM, spacing::LG])
            .style(styles::container::header)
            .into()
    }
}

/// Flat white input inside the indigo header, whatever the theme.
fn search_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => palette::INDIGO_700,
        _ => palette::WHITE,
    };

    text_input::Style {
        background: Background::Color(palette::WHITE),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        icon: palette::GRAY_400,
        placeholder: palette::GRAY_400,
        value: palette::GRAY_900,
        selection: palette::GRAY_200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_only_updates_local_text() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::InputChanged("ca".into())),
            Event::None
        );
        assert_eq!(
            state.update(Message::InputChanged("cats".into())),
            Event::None
        );
        assert_eq!(state.value(), "cats");
    }

    #[test]
    fn submit_emits_trimmed_text() {
        let mut state = State::with_value("  red fox  ");
        assert_eq!(
            state.update(Message::Submitted),
            Event::QuerySubmitted("red fox".into())
        );
        assert_eq!(state.value(), "  red fox  ");
    }

    #[test]
    fn blank_submit_is_still_reported() {
        let mut state = State::with_value("   ");
        assert_eq!(
            state.update(Message::Submitted),
            Event::QuerySubmitted(String::new())
        );
    }

    #[test]
    fn view_and_focus_target_the_same_input() {
        let state = State::with_value("cats");
        let _ = state.view();
        let _ = focus::<Message>();
    }

    #[test]
    fn focused_input_gets_accent_border() {
        let idle = search_input(&Theme::Light, text_input::Status::Active);
        let focused = search_input(
            &Theme::Light,
            text_input::Status::Focused { is_hovered: false },
        );
        assert_ne!(idle.border.color, focused.border.color);
    }
}
