// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use iced::theme::Theme;
use iced::widget::{container, text_input};
use iced::{Border, Color};

const SWATCH_BORDER_WIDTH: f32 = 1.0;

pub fn swatch(color: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(color.into()),
        border: Border {
            color: Color::BLACK,
            width: SWATCH_BORDER_WIDTH,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

// text that will be rolled back if committed as is
pub fn invalid_channel_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let default_style = text_input::default(theme, status);
    let danger = theme.extended_palette().danger;

    let border_color = match status {
        text_input::Status::Active | text_input::Status::Hovered => danger.base.color,
        text_input::Status::Focused => danger.strong.color,
        text_input::Status::Disabled => return default_style,
    };

    text_input::Style {
        border: Border {
            color: border_color,
            ..default_style.border
        },
        ..default_style
    }
}
