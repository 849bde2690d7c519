// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use iced::widget::{container, row, slider, text, text_input, Column, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::channel::{Channel, ChannelState, SliderSource, TextSource};
use crate::color_utils;
use crate::config::PickerLayout;
use crate::error::InvalidChannelText;
use crate::style;

const ROW_SPACING: u16 = 10;
const INPUT_PADDING: u16 = 5;

pub type OnChange = Box<dyn FnMut(u8, u8, u8)>;

#[derive(Debug, Clone)]
pub enum Message {
    SliderChanged(Channel, f32),
    TextEdited(Channel, String),
    TextSubmitted(Channel),
    // focus went somewhere outside of the picker's inputs
    FocusLost,
}

/// Three channel sliders with text inputs and a swatch showing the resulting color.
///
/// `on_change` is called with the full triple after every accepted change,
/// text that doesn't validate is rolled back silently.
pub struct ColorPicker {
    channels: [ChannelState; 3],
    preview_visible: bool,
    layout: PickerLayout,
    on_change: Option<OnChange>,
}

impl ColorPicker {
    pub fn new(preview_visible: bool) -> Self {
        Self {
            channels: Default::default(),
            preview_visible,
            layout: PickerLayout::default(),
            on_change: None,
        }
    }

    pub fn on_change(mut self, on_change: impl FnMut(u8, u8, u8) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn layout(mut self, layout: PickerLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn channel(&self, channel: Channel) -> &ChannelState {
        &self.channels[channel_index(channel)]
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut ChannelState {
        &mut self.channels[channel_index(channel)]
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            self.channel(Channel::Red).value(),
            self.channel(Channel::Green).value(),
            self.channel(Channel::Blue).value(),
        )
    }

    pub fn swatch_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        color_utils::rgb_to_hex(r, g, b)
    }

    pub fn set_from_slider(&mut self, channel: Channel, source: impl SliderSource) {
        let value = self.channel_mut(channel).set_from_slider(&source);
        tracing::debug!("{} channel set from slider: {}", channel, value);
        self.notify_change();
    }

    pub fn commit_from_text<T: TextSource + ?Sized>(&mut self, channel: Channel, source: &T) {
        let result = self.channel_mut(channel).commit_from_text(source);
        self.finish_text_commit(channel, result);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SliderChanged(channel, value) => {
                // grabbing a slider takes focus away from any text field
                self.commit_pending_edits(None);
                self.set_from_slider(channel, value);
            }
            Message::TextEdited(channel, text) => {
                self.commit_pending_edits(Some(channel));
                self.channel_mut(channel).edit_text(text);
            }
            Message::TextSubmitted(channel) => {
                self.commit_pending_text(channel);
            }
            Message::FocusLost => {
                self.commit_pending_edits(None);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(ROW_SPACING)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if self.preview_visible {
            content = content.push(self.view_swatch());
        }

        for channel in Channel::ALL {
            content = content.push(self.view_channel_row(channel));
        }

        content.into()
    }

    fn view_swatch(&self) -> Element<'_, Message> {
        let radius = self.layout.preview_radius;
        let diameter = Length::Fixed(radius * 2.0);
        let color = color_utils::hex_to_color(&self.swatch_hex()).unwrap_or(Color::BLACK);

        container(Space::new(diameter, diameter))
            .width(diameter)
            .height(diameter)
            .style(move |_theme: &Theme| style::swatch(color, radius))
            .into()
    }

    fn view_channel_row(&self, channel: Channel) -> Element<'_, Message> {
        let state = self.channel(channel);

        let mut input = text_input("0", state.text())
            .on_input(move |text| Message::TextEdited(channel, text))
            .on_submit(Message::TextSubmitted(channel))
            .width(Length::Fixed(self.layout.input_width))
            .padding(INPUT_PADDING);
        if !state.is_text_valid() {
            input = input.style(style::invalid_channel_input);
        }

        row![
            text(channel.label()).width(Length::Fixed(self.layout.label_width)),
            slider(0.0..=255.0, state.slider_position(), move |value| {
                Message::SliderChanged(channel, value)
            })
            .width(Length::Fill),
            input,
        ]
        .spacing(ROW_SPACING)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    fn commit_pending_text(&mut self, channel: Channel) {
        let result = self.channel_mut(channel).commit_pending_text();
        self.finish_text_commit(channel, result);
    }

    fn commit_pending_edits(&mut self, except: Option<Channel>) {
        for channel in Channel::ALL {
            if Some(channel) != except && self.channel(channel).is_editing() {
                self.commit_pending_text(channel);
            }
        }
    }

    fn finish_text_commit(&mut self, channel: Channel, result: Result<u8, InvalidChannelText>) {
        // rollbacks are not reported anywhere
        if let Ok(value) = result {
            tracing::debug!("{} channel committed from text: {}", channel, value);
            self.notify_change();
        }
    }

    fn notify_change(&mut self) {
        let (r, g, b) = self.rgb();
        if let Some(on_change) = &mut self.on_change {
            on_change(r, g, b);
        }
    }
}

fn channel_index(channel: Channel) -> usize {
    match channel {
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
    }
}
