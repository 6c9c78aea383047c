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

//! The music library.
//!
//! This module holds the canonical, append-only song catalog together with
//! the derived lookup indexes used by the playback engine: id, title, artist
//! and album.
//!
//! The canonical store is a plain vector; every index maps into it by
//! position rather than by reference, so appends never invalidate an index
//! entry. Indexes are rebuilt in full by [`Library::rebuild_indexes`], which
//! callers invoke once after a bulk load — lookups are not guaranteed to see
//! songs appended since the last rebuild.

pub(crate) mod csv;

use std::collections::HashMap;

use crate::error::EngineError;
use crate::model::{Song, SongId};

#[derive(Debug)]
pub(crate) struct Library {
    /// Canonical song store, in insertion order. Append-only.
    songs: Vec<Song>,

    by_id: HashMap<SongId, usize>,
    by_title: HashMap<String, usize>,
    by_artist: HashMap<String, Vec<usize>>,
    by_album: HashMap<String, Vec<usize>>,
}

impl Library {
    pub(crate) fn new() -> Self {
        Self {
            songs: Vec::new(),
            by_id: HashMap::new(),
            by_title: HashMap::new(),
            by_artist: HashMap::new(),
            by_album: HashMap::new(),
        }
    }

    /// Appends a song to the canonical store.
    ///
    /// The lookup indexes are not touched; call [`Library::rebuild_indexes`]
    /// after the batch of appends is complete.
    pub(crate) fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Rebuilds all derived indexes from the canonical store.
    ///
    /// Title collisions resolve last-write-wins; artist and album lists keep
    /// catalog insertion order.
    pub(crate) fn rebuild_indexes(&mut self) {
        self.by_id.clear();
        self.by_title.clear();
        self.by_artist.clear();
        self.by_album.clear();

        for (position, song) in self.songs.iter().enumerate() {
            self.by_id.insert(song.id, position);
            self.by_title.insert(song.title.clone(), position);
            self.by_artist
                .entry(song.artist.clone())
                .or_default()
                .push(position);
            self.by_album
                .entry(song.album.clone())
                .or_default()
                .push(position);
        }
    }

    /// Returns the song at the given catalog position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `index` is beyond the end of
    /// the catalog.
    pub(crate) fn song_by_index(&self, index: usize) -> Result<&Song, EngineError> {
        self.songs.get(index).ok_or(EngineError::OutOfRange {
            index,
            len: self.songs.len(),
        })
    }

    pub(crate) fn find_by_id(&self, id: SongId) -> Option<&Song> {
        self.by_id.get(&id).map(|&position| &self.songs[position])
    }

    pub(crate) fn find_by_title(&self, title: &str) -> Option<&Song> {
        self.by_title
            .get(title)
            .map(|&position| &self.songs[position])
    }

    /// Returns all songs by the given artist, in catalog order. An unknown
    /// artist yields an empty list.
    pub(crate) fn songs_by_artist(&self, artist: &str) -> Vec<&Song> {
        self.keyed_songs(&self.by_artist, artist)
    }

    /// Returns all songs on the given album, in catalog order. An unknown
    /// album yields an empty list.
    pub(crate) fn songs_by_album(&self, album: &str) -> Vec<&Song> {
        self.keyed_songs(&self.by_album, album)
    }

    fn keyed_songs(&self, index: &HashMap<String, Vec<usize>>, key: &str) -> Vec<&Song> {
        index
            .get(key)
            .map(|positions| positions.iter().map(|&p| &self.songs[p]).collect())
            .unwrap_or_default()
    }

    /// All songs in catalog order.
    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn len(&self) -> usize {
        self.songs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
