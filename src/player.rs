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

//! Entry point for opening media files and creating playlists.

use std::rc::Rc;

use tracing::info;

use crate::{
    config::AppConfig,
    error::Result,
    factory::factory_for,
    file::MediaFile,
    mode::ModeSetting,
    model::Play,
    playlist::Playlist,
};

/// Wires record parsing, item construction and playlists together.
#[derive(Debug, Clone, Default)]
pub struct Player {
    default_mode: ModeSetting,
}

impl Player {
    /// Creates a player whose new playlists play in sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a player whose new playlists use the configured mode.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_mode: config.default_mode,
        }
    }

    /// Parses a raw media record and builds the matching playable item.
    ///
    /// # Errors
    ///
    /// Returns any parse error from [`MediaFile::parse`] or construction error
    /// from the item factory. No item is produced on failure.
    pub fn open_file(&self, raw: &str) -> Result<Rc<Play>> {
        let file = MediaFile::parse(raw)?;
        let play = factory_for(file.kind()).create_play(&file)?;
        Ok(Rc::new(play))
    }

    pub fn create_playlist(&self, name: &str) -> Playlist {
        info!(name, mode = ?self.default_mode, "creating playlist");
        Playlist::with_mode(name, self.default_mode.build())
    }
}
