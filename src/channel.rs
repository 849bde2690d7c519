// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InvalidChannelText;

// whole numbers 0-255, a single "0" is fine but "007" is not
static CHANNEL_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anything that can report the position of a channel slider.
pub trait SliderSource {
    fn current_value(&self) -> f64;
}

impl SliderSource for f32 {
    fn current_value(&self) -> f64 {
        *self as f64
    }
}

impl SliderSource for f64 {
    fn current_value(&self) -> f64 {
        *self
    }
}

/// Anything that can report the contents of a channel text field.
pub trait TextSource {
    fn current_text(&self) -> &str;
}

impl TextSource for str {
    fn current_text(&self) -> &str {
        self
    }
}

impl TextSource for String {
    fn current_text(&self) -> &str {
        self.as_str()
    }
}

pub fn parse_channel_text(text: &str) -> Result<u8, InvalidChannelText> {
    if !CHANNEL_TEXT_REGEX.is_match(text) {
        return Err(InvalidChannelText {
            text: text.to_string(),
        });
    }

    // the pattern only lets through numbers that fit
    text.parse::<u8>().map_err(|_| InvalidChannelText {
        text: text.to_string(),
    })
}

pub fn slider_value_to_channel(raw_value: f64) -> u8 {
    // NaN saturates to 0
    raw_value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Committed value of one channel together with what its text field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelState {
    value: u8,
    previous_value: u8,
    // displayed text, can contain edits that are not committed yet
    text: String,
    is_editing: bool,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ChannelState {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            previous_value: value,
            text: value.to_string(),
            is_editing: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn previous_value(&self) -> u8 {
        self.previous_value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slider_position(&self) -> f32 {
        self.value as f32
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_text_valid(&self) -> bool {
        CHANNEL_TEXT_REGEX.is_match(&self.text)
    }

    pub fn edit_text(&mut self, text: String) {
        self.text = text;
        self.is_editing = true;
    }

    pub fn set_from_slider(&mut self, source: &impl SliderSource) -> u8 {
        let value = slider_value_to_channel(source.current_value());
        self.accept(value);
        value
    }

    /// On invalid text the channel is rolled back to the last accepted value.
    pub fn commit_from_text<T: TextSource + ?Sized>(
        &mut self,
        source: &T,
    ) -> Result<u8, InvalidChannelText> {
        match parse_channel_text(source.current_text()) {
            Ok(value) => {
                self.accept(value);
                Ok(value)
            }
            Err(error) => {
                self.rollback();
                Err(error)
            }
        }
    }

    pub fn commit_pending_text(&mut self) -> Result<u8, InvalidChannelText> {
        let text = std::mem::take(&mut self.text);
        self.commit_from_text(&text)
    }

    fn accept(&mut self, value: u8) {
        self.previous_value = value;
        self.value = value;
        self.sync_text();
    }

    fn rollback(&mut self) {
        self.value = self.previous_value;
        self.sync_text();
    }

    fn sync_text(&mut self) {
        self.text = self.value.to_string();
        self.is_editing = false;
    }
}
