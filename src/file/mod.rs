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

//! Media file record parsing.
//!
//! A media file is a single line of text of the form
//!
//! ```text
//! <type>|<key>:<value>|<key>:<value>|...|<payload>
//! ```
//!
//! where `<type>` is `audio` or `video`. The parser only splits the record
//! into its parts; deciding which fields are required is left to the
//! factories in [`crate::factory`].

use std::{collections::HashMap, fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::error::{PlayerError, Result};

static TYPE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(audio|video)\|").expect("valid type tag pattern"));

static ANY_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^|]*\|").expect("valid field pattern"));

static METADATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9 ]+):([^|]*)\|").expect("valid metadata pattern")
});

static LYRICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9,.!?':; \-]+$").expect("valid lyrics pattern")
});

/// The kind of media a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// A parsed media record, consumed by a [`crate::factory::PlayFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    kind: MediaKind,
    metadata: HashMap<String, String>,
    lyrics: String,
}

impl MediaFile {
    /// Parses a raw record.
    ///
    /// # Errors
    ///
    /// * [`PlayerError::CorruptFile`] if the input has no `|` delimiter.
    /// * [`PlayerError::WrongType`] if the leading tag is not `audio` or
    ///   `video`.
    /// * [`PlayerError::WrongLyrics`] if the payload is empty or contains a
    ///   character outside letters, digits and `,.!?':;-` or space.
    pub fn parse(input: &str) -> Result<Self> {
        let Some(tag) = TYPE_TAG.captures(input) else {
            return Err(if ANY_FIELD.is_match(input) {
                PlayerError::WrongType
            } else {
                PlayerError::CorruptFile
            });
        };

        let kind = MediaKind::from_tag(&tag[1]).ok_or(PlayerError::WrongType)?;
        let mut rest = &input[tag.get(0).map_or(0, |m| m.end())..];

        let mut metadata = HashMap::new();
        while let Some(field) = METADATA.captures(rest) {
            metadata.insert(field[1].to_string(), field[2].to_string());
            rest = &rest[field.get(0).map_or(0, |m| m.end())..];
        }

        if !LYRICS.is_match(rest) {
            return Err(PlayerError::WrongLyrics);
        }

        debug!(%kind, fields = metadata.len(), "parsed media file");

        Ok(Self {
            kind,
            metadata,
            lyrics: rest.to_string(),
        })
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
}

impl std::str::FromStr for MediaFile {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
