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

//! # Playlist demo.
//!
//! Builds a small library from in-memory media records, arranges it into
//! nested playlists and plays them to standard output.
//!
//! The play mode given to new playlists comes from the application
//! configuration file. Diagnostics are written to standard error and can be
//! tuned with `RUST_LOG`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use choolist::{
    config::{self, AppConfig},
    mode::{create_odd_even_mode, create_shuffle_mode},
    model::Play,
    player::Player,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const RECORDS: &[&str] = &[
    "audio|artist:Dire Straits|title:Money for Nothing|Now look at them yo-yo's that's the way you do it...",
    "audio|artist:Queen|title:Bohemian Rhapsody|Is this the real life? Is this just fantasy?",
    "audio|artist:Kate Bush|title:Wuthering Heights|Out on the wiley, windy moors",
    "video|title:Psychoza|year:1960|Jr nyy tb n yvggyr znq fbzrgvzrf.",
    "video|title:Casablanca|year:1942|Urer'f ybbxvat ng lbh, xvq.",
    "Corrupt",
    "mp3|artist:Unknown|title:Unknown|la la",
    "video|title:Soon|year:TBA|Fbba",
];

/// The entry point of the application.
///
/// Loads configuration, initialises logging and runs the demo, returning an
/// error if playback to standard output fails.
fn main() -> Result<()> {
    let config = config::load_config();

    setup_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&config, &mut out).context("Playlist demo failed")?;
    out.flush().context("Failed to flush output")
}

/// Installs a `tracing` subscriber writing to standard error.
///
/// Defaults to `warn` when `RUST_LOG` is not set.
fn setup_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Opens every demo record, builds the playlists and plays them.
///
/// Records that fail to open are logged and skipped.
fn run(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let player = Player::from_config(config);

    let mut plays = Vec::new();
    for record in RECORDS {
        match player.open_file(record) {
            Ok(play) => plays.push(play),
            Err(e) => error!(record, "Failed to open file: {}", e),
        }
    }
    info!(opened = plays.len(), total = RECORDS.len(), "library loaded");

    let songs = player.create_playlist("Songs");
    let movies = player.create_playlist("Movies");
    for play in &plays {
        match play.as_ref() {
            Play::Song(_) => songs.add(play.clone())?,
            Play::Movie(_) => movies.add(play.clone())?,
        }
    }

    let everything = player.create_playlist("Everything");
    everything.add(&songs)?;
    everything.add(&movies)?;
    if let Some(first) = plays.first() {
        everything.add_at(first.clone(), 0)?;
    }

    // A playlist can never be nested inside one of its own children.
    if let Err(e) = songs.add(&everything) {
        info!("Rejected nesting Everything in Songs: {}", e);
    }

    everything.play(out)?;

    songs.set_mode(create_odd_even_mode());
    songs.play(out)?;

    everything.set_mode(create_shuffle_mode(2024));
    everything.play(out)?;

    Ok(())
}
