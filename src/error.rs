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

//! Error types for parsing media files and editing playlists.

use thiserror::Error;

/// Failures raised while opening a media file or editing a playlist.
///
/// Every variant aborts the operation that raised it, nothing is partially
/// applied.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The leading type tag is missing or is neither `audio` nor `video`.
    #[error("unsupported type")]
    WrongType,

    /// The input has no `|` delimited structure at all.
    #[error("corrupt file")]
    CorruptFile,

    /// The trailing payload is empty or contains disallowed characters.
    #[error("corrupt content")]
    WrongLyrics,

    /// A field required by the media type is absent.
    #[error("no necessary data: {field}")]
    NoNecessaryData { field: &'static str },

    #[error("invalid year: {0:?}")]
    WrongYear(String),

    /// Adding the entry would make a playlist contain itself.
    #[error("cycles are not allowed")]
    NoCyclesAllowed,

    #[error("nothing to remove")]
    RemoveError,

    /// Insert position is past the end of the playlist.
    #[error("invalid position {position} for playlist of length {len}")]
    InvalidPosition { position: usize, len: usize },

    /// The output sink rejected a write during playback.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
