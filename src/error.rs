// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Error types for the picker and its configuration.

use std::path::PathBuf;

/// Committed channel text that is not a whole number from 0 to 255.
///
/// The picker recovers from it by rolling the channel back, it never reaches the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{text}' is not a whole number from 0 to 255")]
pub struct InvalidChannelText {
    pub text: String,
}

/// Errors that can occur while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file '{}' can't be read: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{}' is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write default config to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize default config: {0}")]
    Serialize(#[source] serde_json::Error),
}
