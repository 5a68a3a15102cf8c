// SPDX-License-Identifier: MPL-2.0
//! Spinner shown under the gallery while a search is in flight.

use crate::ui::design_tokens::{palette, spacing};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::Container;
use iced::{Element, Length};
use std::f32::consts::TAU;

/// Radians advanced per animation tick.
const ROTATION_STEP: f32 = 0.25;

/// Rotation of the spinner arc, advanced by the app's tick subscription.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    rotation: f32,
}

impl State {
    pub fn tick(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP) % TAU;
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn view<Message: 'static>(&self) -> Element<'static, Message> {
        Container::new(AnimatedSpinner::new(palette::INDIGO_500, self.rotation).into_element())
            .center_x(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_rotation() {
        let mut state = State::default();
        state.tick();
        assert!(state.rotation() > 0.0);
    }

    #[test]
    fn rotation_wraps_around() {
        let mut state = State::default();
        for _ in 0..1000 {
            state.tick();
        }
        assert!(state.rotation() >= 0.0 && state.rotation() < TAU);
    }
}
