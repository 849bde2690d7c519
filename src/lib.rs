// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

pub mod channel;
pub mod color_picker;
pub mod color_utils;
pub mod config;
pub mod error;
pub mod logging;
pub mod style;

pub use channel::{Channel, ChannelState, SliderSource, TextSource};
pub use color_picker::{ColorPicker, Message, OnChange};
pub use config::{PickerConfig, PickerLayout};
pub use error::{ConfigError, InvalidChannelText};
