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

//! Construction of playable items from parsed media files.

use tracing::debug;

use crate::{
    error::Result,
    file::{MediaFile, MediaKind},
    model::{Movie, Play, Song},
};

/// Builds a [`Play`] from a [`MediaFile`] of a particular kind.
pub trait PlayFactory {
    fn create_play(&self, file: &MediaFile) -> Result<Play>;
}

/// Builds songs from `audio` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioFactory;

impl PlayFactory for AudioFactory {
    fn create_play(&self, file: &MediaFile) -> Result<Play> {
        let song = Song::new(file.metadata(), file.lyrics())?;
        debug!(artist = song.artist(), title = song.title(), "created song");
        Ok(Play::Song(song))
    }
}

/// Builds movies from `video` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovieFactory;

impl PlayFactory for MovieFactory {
    fn create_play(&self, file: &MediaFile) -> Result<Play> {
        let movie = Movie::new(file.metadata(), file.lyrics())?;
        debug!(title = movie.title(), year = movie.year(), "created movie");
        Ok(Play::Movie(movie))
    }
}

/// Selects the factory for a media kind.
pub fn factory_for(kind: MediaKind) -> &'static dyn PlayFactory {
    match kind {
        MediaKind::Audio => &AudioFactory,
        MediaKind::Video => &MovieFactory,
    }
}
