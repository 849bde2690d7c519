// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

#![windows_subsystem = "windows"]

mod app_arguments;
mod picker_window;

use iced::window::{self, Level};
use iced::{Size, Task};

use rgb_picker::config::{self, PickerConfig};
use rgb_picker::logging;

const WINDOW_WIDTH: f32 = 420.0;
const WINDOW_HEIGHT: f32 = 320.0;

pub fn main() -> iced::Result {
    let app_arguments = app_arguments::get_app_arguments();
    if let Some(message) = &app_arguments.early_exit_message {
        println!("{}", message);
        return Ok(());
    }

    logging::init(app_arguments.verbosity);

    let config_path = config::get_config_path(app_arguments.custom_config_path.as_deref());
    let (picker_config, config_error) = match config::read_config(&config_path) {
        Ok(picker_config) => (picker_config, None),
        Err(err) => {
            tracing::warn!("Using default config: {}", err);
            (PickerConfig::default(), Some(err.to_string()))
        }
    };
    let preview_visible = picker_config.preview_visible && !app_arguments.hide_preview;

    let window_settings = window::Settings {
        size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        position: window::Position::Centered,
        level: if picker_config.always_on_top {
            Level::AlwaysOnTop
        } else {
            Level::Normal
        },
        ..Default::default()
    };

    iced::application(
        "RGB Picker",
        picker_window::PickerWindow::update,
        picker_window::PickerWindow::view,
    )
    .theme(picker_window::PickerWindow::theme)
    .subscription(picker_window::PickerWindow::subscription)
    .window(window_settings)
    .run_with(move || {
        (
            picker_window::PickerWindow::new(&picker_config, preview_visible, config_error),
            Task::none(),
        )
    })
}
