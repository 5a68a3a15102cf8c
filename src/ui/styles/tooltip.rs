// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Thumbnails show their tags in a tooltip whose colors contrast with the
//! active theme.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Tooltip surface, dark on light themes and light on dark themes.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a themed tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &container::Style) -> Color {
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        bg
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        assert!(background(&tooltip_container(&Theme::Light)).r < 0.5);
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        assert!(background(&tooltip_container(&Theme::Dark)).r > 0.5);
    }

    #[test]
    fn tooltip_has_text_color_and_shadow() {
        let style = tooltip_container(&Theme::Light);
        assert!(style.text_color.is_some());
        assert!(style.shadow.blur_radius > 0.0);
    }
}
