// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, which holds the
//! play mode given to newly created playlists.

use serde::{Deserialize, Serialize};

use crate::mode::ModeSetting;

const CONFIG_NAME: &str = "choolist";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    #[serde(default)]
    pub default_mode: ModeSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            default_mode: ModeSetting::Sequence,
        }
    }
}

/// Loads the configuration file, creating it with defaults if it is missing.
///
/// An unreadable file also falls back to the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
