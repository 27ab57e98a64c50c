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

//! Playable leaf items.
//!
//! A [`Play`] is a single song or movie. Leaves never contain other entries,
//! so they can never close a playlist cycle.

use std::{collections::HashMap, fmt, io::Write};

use crate::{
    error::{PlayerError, Result},
    util::rot13::rot13,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    artist: String,
    title: String,
    lyrics: String,
}

impl Song {
    /// Builds a song from record metadata.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoNecessaryData`] if `artist` or `title` is
    /// missing from `metadata`.
    pub fn new(metadata: &HashMap<String, String>, lyrics: &str) -> Result<Self> {
        Ok(Self {
            artist: required(metadata, "artist")?,
            title: required(metadata, "title")?,
            lyrics: lyrics.to_string(),
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Song [{} {}]: {}", self.artist, self.title, self.lyrics)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    year: String,
    title: String,
    lyrics: String,
}

impl Movie {
    /// Builds a movie from record metadata, decoding the ROT13 payload.
    ///
    /// # Errors
    ///
    /// * [`PlayerError::NoNecessaryData`] if `year` or `title` is missing.
    /// * [`PlayerError::WrongYear`] if `year` is empty or not all digits.
    pub fn new(metadata: &HashMap<String, String>, lyrics: &str) -> Result<Self> {
        let year = required(metadata, "year")?;
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlayerError::WrongYear(year));
        }

        Ok(Self {
            year,
            title: required(metadata, "title")?,
            lyrics: rot13(lyrics),
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The decoded lyrics.
    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie [{} {}]: {}", self.title, self.year, self.lyrics)
    }
}

/// A playable leaf item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Play {
    Song(Song),
    Movie(Movie),
}

impl Play {
    /// Writes the single output line for this item.
    pub fn play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Play::Song(song) => fmt::Display::fmt(song, f),
            Play::Movie(movie) => fmt::Display::fmt(movie, f),
        }
    }
}

impl From<Song> for Play {
    fn from(song: Song) -> Self {
        Play::Song(song)
    }
}

impl From<Movie> for Play {
    fn from(movie: Movie) -> Self {
        Play::Movie(movie)
    }
}

fn required(metadata: &HashMap<String, String>, field: &'static str) -> Result<String> {
    metadata
        .get(field)
        .cloned()
        .ok_or(PlayerError::NoNecessaryData { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn song_renders_artist_title_and_lyrics() {
        let song = Song::new(
            &metadata(&[("artist", "Dire Straits"), ("title", "Money for Nothing")]),
            "I want my MTV",
        )
        .unwrap();

        assert_eq!(
            song.to_string(),
            "Song [Dire Straits Money for Nothing]: I want my MTV"
        );
    }

    #[test]
    fn song_requires_artist_and_title() {
        let err = Song::new(&metadata(&[("title", "T")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::NoNecessaryData { field: "artist" }));

        let err = Song::new(&metadata(&[("artist", "A")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::NoNecessaryData { field: "title" }));
    }

    #[test]
    fn movie_decodes_lyrics() {
        let movie = Movie::new(
            &metadata(&[("title", "Psychoza"), ("year", "1960")]),
            "Cyrnfr fgbc",
        )
        .unwrap();

        assert_eq!(movie.lyrics(), "Please stop");
        assert_eq!(movie.to_string(), "Movie [Psychoza 1960]: Please stop");
    }

    #[test]
    fn movie_rejects_non_numeric_year() {
        let err = Movie::new(&metadata(&[("title", "T"), ("year", "19x0")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::WrongYear(ref y) if y == "19x0"));

        let err = Movie::new(&metadata(&[("title", "T"), ("year", "")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::WrongYear(_)));
    }

    #[test]
    fn movie_requires_year_and_title() {
        let err = Movie::new(&metadata(&[("title", "T")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::NoNecessaryData { field: "year" }));

        let err = Movie::new(&metadata(&[("year", "2000")]), "x").unwrap_err();
        assert!(matches!(err, PlayerError::NoNecessaryData { field: "title" }));
    }

    #[test]
    fn play_writes_one_line() {
        let play = Play::from(Song::new(&metadata(&[("artist", "A"), ("title", "T")]), "la").unwrap());
        let mut out = Vec::new();
        play.play(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Song [A T]: la\n");
    }
}
