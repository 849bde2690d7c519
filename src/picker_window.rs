// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use iced::widget::{column, container, text};
use iced::{event, mouse, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::rc::Rc;

use rgb_picker::color_picker::{self, ColorPicker};
use rgb_picker::color_utils;
use rgb_picker::config::PickerConfig;

const WINDOW_PADDING: u16 = 20;
const CAPTION_TEXT_SIZE: u16 = 14;

pub struct PickerWindow {
    picker: ColorPicker,
    last_reported: Rc<Cell<Option<(u8, u8, u8)>>>,
    config_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum WindowMessage {
    Picker(color_picker::Message),
}

impl PickerWindow {
    pub fn new(config: &PickerConfig, preview_visible: bool, config_error: Option<String>) -> Self {
        let last_reported = Rc::new(Cell::new(None));
        let reported = last_reported.clone();

        let picker = ColorPicker::new(preview_visible)
            .layout(config.layout)
            .on_change(move |r, g, b| {
                tracing::info!("Color changed to {}", color_utils::rgb_to_hex(r, g, b));
                reported.set(Some((r, g, b)));
            });

        Self {
            picker,
            last_reported,
            config_error,
        }
    }

    pub fn update(&mut self, message: WindowMessage) -> Task<WindowMessage> {
        match message {
            WindowMessage::Picker(message) => self.picker.update(message),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, WindowMessage> {
        let reported_caption = match self.last_reported.get() {
            Some((r, g, b)) => format!("Reported color: {}", color_utils::rgb_to_hex(r, g, b)),
            None => "No color reported yet".to_string(),
        };

        let mut content = column![
            self.picker.view().map(WindowMessage::Picker),
            text(reported_caption).size(CAPTION_TEXT_SIZE),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        if let Some(config_error) = &self.config_error {
            content = content.push(
                text(config_error.as_str())
                    .size(CAPTION_TEXT_SIZE)
                    .style(text::danger),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .padding(WINDOW_PADDING)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<WindowMessage> {
        event::listen_with(focus_loss_from_event)
    }
}

// clicks that no widget captured and switching to another window take focus from text inputs
fn focus_loss_from_event(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<WindowMessage> {
    match (event, status) {
        (Event::Window(window::Event::Unfocused), _) => {}
        (Event::Mouse(mouse::Event::ButtonPressed(_)), event::Status::Ignored) => {}
        _ => return None,
    }
    Some(WindowMessage::Picker(color_picker::Message::FocusLost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb_picker::channel::Channel;

    #[test]
    fn test_accepted_changes_are_reported_to_the_window() {
        let mut window = PickerWindow::new(&PickerConfig::default(), true, None);
        assert_eq!(window.last_reported.get(), None);

        let _ = window.update(WindowMessage::Picker(color_picker::Message::SliderChanged(
            Channel::Blue,
            64.0,
        )));

        assert_eq!(window.last_reported.get(), Some((0, 0, 64)));
    }

    fn is_focus_loss(message: Option<WindowMessage>) -> bool {
        matches!(
            message,
            Some(WindowMessage::Picker(color_picker::Message::FocusLost))
        )
    }

    #[test]
    fn test_focus_loss_events_are_recognized() {
        let id = window::Id::unique();

        assert!(is_focus_loss(focus_loss_from_event(
            Event::Window(window::Event::Unfocused),
            event::Status::Ignored,
            id,
        )));
        assert!(is_focus_loss(focus_loss_from_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
            id,
        )));
    }

    #[test]
    fn test_clicks_captured_by_widgets_keep_focus() {
        let id = window::Id::unique();

        assert!(focus_loss_from_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Captured,
            id,
        )
        .is_none());
        assert!(focus_loss_from_event(
            Event::Mouse(mouse::Event::CursorLeft),
            event::Status::Ignored,
            id,
        )
        .is_none());
        assert!(focus_loss_from_event(
            Event::Window(window::Event::Focused),
            event::Status::Ignored,
            id,
        )
        .is_none());
    }

    #[test]
    fn test_background_click_rolls_back_invalid_edit() {
        let mut window = PickerWindow::new(&PickerConfig::default(), true, None);

        let _ = window.update(WindowMessage::Picker(color_picker::Message::TextEdited(
            Channel::Red,
            "999".to_string(),
        )));
        let message = focus_loss_from_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
            window::Id::unique(),
        );
        let _ = window.update(message.unwrap());

        assert_eq!(window.picker.channel(Channel::Red).text(), "0");
        assert_eq!(window.picker.rgb(), (0, 0, 0));
        assert_eq!(window.last_reported.get(), None);
    }

    #[test]
    fn test_rolled_back_text_is_not_reported() {
        let mut window = PickerWindow::new(&PickerConfig::default(), true, None);

        let _ = window.update(WindowMessage::Picker(color_picker::Message::TextEdited(
            Channel::Green,
            "-1".to_string(),
        )));
        let _ = window.update(WindowMessage::Picker(color_picker::Message::TextSubmitted(
            Channel::Green,
        )));

        assert_eq!(window.last_reported.get(), None);
        assert_eq!(window.picker.rgb(), (0, 0, 0));
    }
}
