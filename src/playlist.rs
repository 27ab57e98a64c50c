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

//! Composite playlists.
//!
//! A [`Playlist`] is an ordered list of [`Entry`] values, each either a leaf
//! [`Play`] or another playlist. Entries are reference counted, so the same
//! song or sub-playlist may appear in several playlists at once (and more
//! than once in the same playlist). The only structural rule is that a
//! playlist may never contain itself, directly or through nested playlists;
//! every insertion is checked before it happens.
//!
//! [`Playlist`] is a cheap handle: cloning it yields another reference to the
//! same playlist, and edits through either handle are visible to both.

use std::{
    cell::RefCell,
    fmt,
    io::Write,
    rc::Rc,
};

use tracing::{trace, warn};

use crate::{
    error::{PlayerError, Result},
    mode::{PlayMode, create_sequence_mode},
    model::Play,
};

/// A single item in a playlist.
#[derive(Debug, Clone)]
pub enum Entry {
    Play(Rc<Play>),
    Playlist(Playlist),
}

impl Entry {
    pub fn play(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            Entry::Play(play) => play.play(out),
            Entry::Playlist(playlist) => playlist.play(out),
        }
    }

    /// Whether this entry is a container that could take part in a cycle.
    pub fn can_cause_collision(&self) -> bool {
        matches!(self, Entry::Playlist(_))
    }

    /// Whether `root` is reachable from this entry, including the entry
    /// itself.
    pub fn is_collision(&self, root: &Playlist) -> bool {
        match self {
            Entry::Play(_) => false,
            Entry::Playlist(playlist) => playlist.is_collision(root),
        }
    }
}

impl From<Rc<Play>> for Entry {
    fn from(play: Rc<Play>) -> Self {
        Entry::Play(play)
    }
}

impl From<Play> for Entry {
    fn from(play: Play) -> Self {
        Entry::Play(Rc::new(play))
    }
}

impl From<Playlist> for Entry {
    fn from(playlist: Playlist) -> Self {
        Entry::Playlist(playlist)
    }
}

impl From<&Playlist> for Entry {
    fn from(playlist: &Playlist) -> Self {
        Entry::Playlist(playlist.clone())
    }
}

struct PlaylistState {
    name: String,
    entries: Vec<Entry>,
    mode: Rc<dyn PlayMode>,
}

/// A shared, mutable, named list of entries with a play mode.
#[derive(Clone)]
pub struct Playlist(Rc<RefCell<PlaylistState>>);

impl Playlist {
    /// Creates an empty playlist that plays in sequence.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mode(name, create_sequence_mode())
    }

    pub fn with_mode(name: impl Into<String>, mode: Rc<dyn PlayMode>) -> Self {
        Self(Rc::new(RefCell::new(PlaylistState {
            name: name.into(),
            entries: Vec::new(),
            mode,
        })))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Returns a snapshot of the current entries in stored order.
    pub fn entries(&self) -> Vec<Entry> {
        self.0.borrow().entries.clone()
    }

    /// Whether both handles refer to the same playlist.
    pub fn ptr_eq(&self, other: &Playlist) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoCyclesAllowed`] if the entry is this playlist
    /// or contains it. The playlist is left unchanged.
    pub fn add(&self, entry: impl Into<Entry>) -> Result<()> {
        let entry = entry.into();
        self.check_cycle(&entry)?;

        let mut state = self.0.borrow_mut();
        state.entries.push(entry);
        trace!(playlist = %state.name, len = state.entries.len(), "added entry");
        Ok(())
    }

    /// Inserts an entry before `position`.
    ///
    /// # Errors
    ///
    /// * [`PlayerError::NoCyclesAllowed`] as for [`Playlist::add`].
    /// * [`PlayerError::InvalidPosition`] if `position` is past the end.
    pub fn add_at(&self, entry: impl Into<Entry>, position: usize) -> Result<()> {
        let entry = entry.into();
        self.check_cycle(&entry)?;

        let mut state = self.0.borrow_mut();
        let len = state.entries.len();
        if position > len {
            return Err(PlayerError::InvalidPosition { position, len });
        }
        state.entries.insert(position, entry);
        trace!(playlist = %state.name, position, "inserted entry");
        Ok(())
    }

    /// Removes the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::RemoveError`] if the playlist is empty.
    pub fn remove(&self) -> Result<Entry> {
        let mut state = self.0.borrow_mut();
        let entry = state.entries.pop().ok_or(PlayerError::RemoveError)?;
        trace!(playlist = %state.name, len = state.entries.len(), "removed last entry");
        Ok(entry)
    }

    /// Removes the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::RemoveError`] if `position` is out of bounds.
    pub fn remove_at(&self, position: usize) -> Result<Entry> {
        let mut state = self.0.borrow_mut();
        if position >= state.entries.len() {
            return Err(PlayerError::RemoveError);
        }
        let entry = state.entries.remove(position);
        trace!(playlist = %state.name, position, "removed entry");
        Ok(entry)
    }

    /// Replaces the play mode, used from the next call to [`Playlist::play`].
    pub fn set_mode(&self, mode: Rc<dyn PlayMode>) {
        let mut state = self.0.borrow_mut();
        trace!(playlist = %state.name, ?mode, "set mode");
        state.mode = mode;
    }

    /// Writes the playlist heading, then plays the entries in mode order.
    pub fn play(&self, out: &mut dyn Write) -> Result<()> {
        let state = self.0.borrow();
        writeln!(out, "Playlist [{}]", state.name)?;
        state.mode.play_with_mode(&state.entries, out)
    }

    pub fn can_cause_collision(&self) -> bool {
        true
    }

    /// Whether `root` is this playlist or is nested anywhere inside it.
    pub fn is_collision(&self, root: &Playlist) -> bool {
        // Identity first, so the walk never borrows `root` itself.
        if self.ptr_eq(root) {
            return true;
        }

        self.0
            .borrow()
            .entries
            .iter()
            .any(|entry| entry.can_cause_collision() && entry.is_collision(root))
    }

    fn check_cycle(&self, entry: &Entry) -> Result<()> {
        if entry.is_collision(self) {
            warn!(playlist = %self.name(), "rejected entry that would create a cycle");
            return Err(PlayerError::NoCyclesAllowed);
        }
        Ok(())
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("Playlist")
            .field("name", &state.name)
            .field("entries", &state.entries)
            .field("mode", &state.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        mode::{create_odd_even_mode, create_shuffle_mode},
        model::Song,
    };

    fn song(title: &str) -> Rc<Play> {
        let metadata: HashMap<String, String> = [("artist", "A"), ("title", title)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Rc::new(Play::Song(Song::new(&metadata, "la").unwrap()))
    }

    fn played(playlist: &Playlist) -> String {
        let mut out = Vec::new();
        playlist.play(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn titles(playlist: &Playlist) -> Vec<String> {
        playlist
            .entries()
            .iter()
            .map(|entry| match entry {
                Entry::Play(play) => match play.as_ref() {
                    Play::Song(song) => song.title().to_string(),
                    Play::Movie(movie) => movie.title().to_string(),
                },
                Entry::Playlist(playlist) => playlist.name(),
            })
            .collect()
    }

    #[test]
    fn add_appends_and_add_at_inserts() {
        let playlist = Playlist::new("mix");
        playlist.add(song("b")).unwrap();
        playlist.add(song("d")).unwrap();
        playlist.add_at(song("a"), 0).unwrap();
        playlist.add_at(song("c"), 2).unwrap();
        playlist.add_at(song("e"), 4).unwrap();

        assert_eq!(titles(&playlist), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn add_at_past_end_fails() {
        let playlist = Playlist::new("mix");
        playlist.add(song("a")).unwrap();

        assert!(matches!(
            playlist.add_at(song("b"), 2),
            Err(PlayerError::InvalidPosition { position: 2, len: 1 })
        ));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn remove_takes_last_entry() {
        let playlist = Playlist::new("mix");
        playlist.add(song("a")).unwrap();
        playlist.add(song("b")).unwrap();

        playlist.remove().unwrap();
        assert_eq!(titles(&playlist), vec!["a"]);
    }

    #[test]
    fn remove_from_empty_fails() {
        let playlist = Playlist::new("mix");
        assert!(matches!(playlist.remove(), Err(PlayerError::RemoveError)));
    }

    #[test]
    fn remove_at_checks_bounds() {
        let playlist = Playlist::new("mix");
        playlist.add(song("a")).unwrap();
        playlist.add(song("b")).unwrap();
        playlist.add(song("c")).unwrap();

        assert!(matches!(playlist.remove_at(3), Err(PlayerError::RemoveError)));
        playlist.remove_at(1).unwrap();
        assert_eq!(titles(&playlist), vec!["a", "c"]);
    }

    #[test]
    fn play_prints_heading_then_entries() {
        let playlist = Playlist::new("mix");
        playlist.add(song("a")).unwrap();
        playlist.add(song("b")).unwrap();

        assert_eq!(
            played(&playlist),
            "Playlist [mix]\nSong [A a]: la\nSong [A b]: la\n"
        );
    }

    #[test]
    fn set_mode_changes_play_order_only() {
        let playlist = Playlist::new("mix");
        for title in ["a", "b", "c", "d", "e"] {
            playlist.add(song(title)).unwrap();
        }

        playlist.set_mode(create_odd_even_mode());
        assert_eq!(
            played(&playlist),
            "Playlist [mix]\nSong [A b]: la\nSong [A d]: la\nSong [A a]: la\nSong [A c]: la\nSong [A e]: la\n"
        );
        assert_eq!(titles(&playlist), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn shuffle_does_not_reorder_stored_entries() {
        let playlist = Playlist::new("mix");
        for title in ["a", "b", "c", "d", "e", "f"] {
            playlist.add(song(title)).unwrap();
        }
        playlist.set_mode(create_shuffle_mode(9));

        let first = played(&playlist);
        assert_eq!(first, played(&playlist));
        assert_eq!(titles(&playlist), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn adding_playlist_to_itself_fails() {
        let playlist = Playlist::new("loop");
        assert!(matches!(
            playlist.add(&playlist),
            Err(PlayerError::NoCyclesAllowed)
        ));
        assert!(playlist.is_empty());
    }

    #[test]
    fn transitive_cycle_is_rejected() {
        let a = Playlist::new("a");
        let b = Playlist::new("b");
        let c = Playlist::new("c");

        a.add(&b).unwrap();
        b.add(&c).unwrap();

        assert!(matches!(c.add(&a), Err(PlayerError::NoCyclesAllowed)));
        assert!(matches!(c.add_at(&b, 0), Err(PlayerError::NoCyclesAllowed)));
        assert!(c.is_empty());
    }

    #[test]
    fn shared_children_are_allowed() {
        let root = Playlist::new("root");
        let left = Playlist::new("left");
        let right = Playlist::new("right");
        let shared = Playlist::new("shared");
        let track = song("t");

        left.add(&shared).unwrap();
        right.add(&shared).unwrap();
        root.add(&left).unwrap();
        root.add(&right).unwrap();
        shared.add(Rc::clone(&track)).unwrap();
        shared.add(Rc::clone(&track)).unwrap();

        assert_eq!(Rc::strong_count(&track), 3);
        assert_eq!(played(&root).matches("Playlist [shared]").count(), 2);
    }

    #[test]
    fn leaves_never_collide() {
        let playlist = Playlist::new("mix");
        let entry = Entry::from(song("a"));
        assert!(!entry.can_cause_collision());
        assert!(!entry.is_collision(&playlist));
        assert!(Entry::from(&playlist).can_cause_collision());
    }

    #[test]
    fn dropping_last_parent_frees_children() {
        let child = Playlist::new("child");
        let weak = Rc::downgrade(&child.0);

        let parent = Playlist::new("parent");
        parent.add(child).unwrap();
        assert!(weak.upgrade().is_some());

        drop(parent);
        assert!(weak.upgrade().is_none());
    }
}
