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

//! # Media playlists.
//!
//! An in-memory media player model: text records describing songs and movies
//! are parsed into playable items, which are grouped into nested playlists
//! and played back to any [`std::io::Write`] sink.
//!
//! ## Architecture
//!
//! * [`file`] splits a raw `type|key:value|...|payload` record into a
//!   [`file::MediaFile`].
//! * [`factory`] turns a media file into a [`model::Play`] (a song or a
//!   movie).
//! * [`playlist`] holds shared, nestable [`playlist::Playlist`]s and rejects
//!   any insertion that would make a playlist contain itself.
//! * [`mode`] provides the play orders a playlist can use.
//! * [`player`] is the facade wiring these together.
//!
//! ```
//! use choolist::{player::Player, mode::create_odd_even_mode};
//!
//! let player = Player::new();
//! let song = player.open_file("audio|artist:Dire Straits|title:Money for Nothing|I want my MTV")?;
//!
//! let playlist = player.create_playlist("80s");
//! playlist.add(song)?;
//! playlist.set_mode(create_odd_even_mode());
//!
//! let mut out = Vec::new();
//! playlist.play(&mut out)?;
//! assert_eq!(
//!     String::from_utf8_lossy(&out),
//!     "Playlist [80s]\nSong [Dire Straits Money for Nothing]: I want my MTV\n"
//! );
//! # Ok::<(), choolist::error::PlayerError>(())
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod file;
pub mod mode;
pub mod model;
pub mod player;
pub mod playlist;
pub mod util;

pub use error::{PlayerError, Result};
pub use player::Player;
pub use playlist::{Entry, Playlist};
