// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_NAME: &str = "rgb_picker_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerLayout {
    pub preview_radius: f32,
    pub input_width: f32,
    pub label_width: f32,
}

impl Default for PickerLayout {
    fn default() -> Self {
        PickerLayout {
            preview_radius: 50.0,
            input_width: 60.0,
            label_width: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    pub preview_visible: bool,
    pub always_on_top: bool,
    pub layout: PickerLayout,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            preview_visible: true,
            always_on_top: false,
            layout: PickerLayout::default(),
        }
    }
}

pub fn get_config_path(custom_config_path: Option<&str>) -> PathBuf {
    if let Some(config_path) = custom_config_path {
        PathBuf::from(config_path)
    } else {
        std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or(Path::new(""))
            .join(DEFAULT_CONFIG_NAME)
    }
}

pub fn read_config(config_path: &Path) -> Result<PickerConfig, ConfigError> {
    // if config file doesn't exist, create it
    if !config_path.exists() {
        let default_config = PickerConfig::default();
        save_config_to_file(&default_config, config_path)?;
        tracing::info!("Created default config at '{}'", config_path.display());
        return Ok(default_config);
    }

    let data = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

pub fn save_config_to_file(config: &PickerConfig, config_path: &Path) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(config_path, data).map_err(|source| ConfigError::Write {
        path: config_path.to_path_buf(),
        source,
    })
}
