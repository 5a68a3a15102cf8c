// SPDX-License-Identifier: MPL-2.0
//! One gallery cell.

use crate::domain::search::ImageResult;
use crate::media::ImageSlot;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{image, mouse_area, tooltip, Container, Text};
use iced::{mouse, ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// The cell was clicked; carries the whole result so the preview needs no lookup.
    Selected(ImageResult),
}

/// Caption shown when the thumbnail could not be downloaded.
pub const UNAVAILABLE: &str = "Image unavailable";

/// Renders `result` using its thumbnail slot from the image store.
///
/// A missing or loading slot renders an empty card of the same size.
pub fn view<'a>(result: &'a ImageResult, slot: Option<&'a ImageSlot>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(ImageSlot::Failed) => Text::new(UNAVAILABLE).size(typography::CAPTION).into(),
        Some(ImageSlot::Loading) | None => Text::new("").into(),
    };

    let card = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .clip(true)
        .style(styles::container::thumbnail);

    let clickable = mouse_area(card)
        .on_press(Message::Selected(result.clone()))
        .interaction(mouse::Interaction::Pointer);

    if result.tags.is_empty() {
        clickable.into()
    } else {
        styles::tooltip::styled(clickable, result.tags.as_str(), tooltip::Position::Bottom).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn result(tags: &str) -> ImageResult {
        ImageResult {
            id: 7,
            thumbnail_url: "https://cdn.example/7_640.jpg".into(),
            full_size_url: "https://cdn.example/7_1280.jpg".into(),
            tags: tags.into(),
        }
    }

    #[test]
    fn renders_every_slot_state() {
        let item = result("cat, pet");
        let ready = ImageSlot::Ready(Handle::from_rgba(1, 1, vec![0, 0, 0, 255]));

        let _ = view(&item, None);
        let _ = view(&item, Some(&ImageSlot::Loading));
        let _ = view(&item, Some(&ImageSlot::Failed));
        let _ = view(&item, Some(&ready));
    }

    #[test]
    fn renders_without_tags() {
        let item = result("");
        let _ = view(&item, None);
    }
}
