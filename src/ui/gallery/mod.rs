// SPDX-License-Identifier: MPL-2.0
//! Responsive grid of search results.
//!
//! Results keep their arrival order, laid out left to right in rows whose
//! length follows the window width.

pub mod item;

use crate::domain::search::ImageResult;
use crate::media::ImageStore;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{Column, Container, Row, Space};
use iced::{Element, Length};

pub use item::Message;

/// Data needed to render the grid.
pub struct ViewContext<'a> {
    pub results: &'a [ImageResult],
    pub images: &'a ImageStore,
    pub window_width: f32,
}

/// Number of columns that fit in a window `width` pixels wide (at least one).
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let cell = sizing::THUMBNAIL_MIN_WIDTH + spacing::MD;
    // The grid has MD padding on both sides and MD gaps between cells.
    let available = width - spacing::MD;
    if !available.is_finite() || available < cell {
        return 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = (available / cell).floor() as usize;
    columns.max(1)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        results,
        images,
        window_width,
    } = ctx;
    let columns = columns_for_width(window_width);

    let rows = results.chunks(columns).map(|chunk| -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
        for result in chunk {
            let slot = images.slot(&result.thumbnail_url);
            row = row.push(
                Container::new(item::view(result, slot)).width(Length::FillPortion(1)),
            );
        }
        // Pad the last row so its cells keep the same width as the others.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        row.into()
    });

    Column::with_children(rows)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}
