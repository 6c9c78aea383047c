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

//! The cyclic playback queue.
//!
//! An ordered, id-deduplicated list of songs with a movable cursor marking
//! the current entry. Advancing past the last song wraps to the first, so a
//! finite queue plays forever.
//!
//! The cursor is a position into the backing vector, never a reference, so
//! mutation cannot invalidate it — removal repairs the position explicitly.

use crate::error::EngineError;
use crate::model::{Song, SongId};

pub(crate) struct PlaybackQueue {
    songs: Vec<Song>,
    /// Position of the current song, or `None` when the queue is empty.
    cursor: Option<usize>,
}

impl PlaybackQueue {
    pub(crate) fn new() -> Self {
        Self {
            songs: Vec::new(),
            cursor: None,
        }
    }

    /// Appends a song to the end of the queue.
    ///
    /// Adding an id already present is a no-op. The first song added becomes
    /// the current one.
    pub(crate) fn add_song(&mut self, song: Song) {
        if self.songs.iter().any(|s| s.id == song.id) {
            return;
        }

        self.songs.push(song);

        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    /// Removes the first entry with the given id, if any.
    ///
    /// Removing the current song moves the cursor to its successor, wrapping
    /// to the front when the removed song was last. Removing any other song
    /// leaves the current song unchanged.
    pub(crate) fn remove_by_id(&mut self, id: SongId) {
        let Some(removed) = self.songs.iter().position(|s| s.id == id) else {
            return;
        };

        self.songs.remove(removed);

        if self.songs.is_empty() {
            self.cursor = None;
            return;
        }

        if let Some(cursor) = self.cursor {
            if removed < cursor {
                // An earlier entry shifted out; keep pointing at the same song.
                self.cursor = Some(cursor - 1);
            } else if removed == cursor && cursor >= self.songs.len() {
                // The current song was the last entry; wrap to the front.
                self.cursor = Some(0);
            }
            // removed == cursor within bounds: the successor shifted into
            // place, so the position is already correct. removed > cursor:
            // nothing moved below the cursor.
        }
    }

    /// Returns the current song.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyState`] when the queue is empty.
    pub(crate) fn current(&self) -> Result<&Song, EngineError> {
        self.cursor
            .map(|c| &self.songs[c])
            .ok_or(EngineError::EmptyState("playback queue"))
    }

    /// Moves the cursor to the next song, wrapping past the end. A no-op on
    /// an empty queue.
    pub(crate) fn advance(&mut self) {
        if let Some(cursor) = self.cursor {
            self.cursor = Some((cursor + 1) % self.songs.len());
        }
    }

    /// Replaces the queue contents wholesale.
    ///
    /// The new songs are appended through [`PlaybackQueue::add_song`], so
    /// duplicates collapse and the cursor resets to the first entry.
    pub(crate) fn replace_with(&mut self, songs: Vec<Song>) {
        self.songs.clear();
        self.cursor = None;

        for song in songs {
            self.add_song(song);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.songs.len()
    }

    /// Snapshot of the queued songs in order, for display.
    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Position of the current song within [`PlaybackQueue::songs`].
    pub(crate) fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: SongId) -> Song {
        Song {
            id,
            title: format!("song {id}"),
            artist: "artist".to_string(),
            album: "album".to_string(),
            duration: 60,
            filename: format!("/music/{id}.mp3"),
        }
    }

    fn queue_of(ids: &[SongId]) -> PlaybackQueue {
        let mut queue = PlaybackQueue::new();
        for &id in ids {
            queue.add_song(song(id));
        }
        queue
    }

    fn ids(queue: &PlaybackQueue) -> Vec<SongId> {
        queue.songs().iter().map(|s| s.id).collect()
    }

    #[test]
    fn first_song_becomes_current() {
        let queue = queue_of(&[5]);

        assert_eq!(queue.current().map(|s| s.id), Ok(5));
    }

    #[test]
    fn duplicate_ids_are_ignored() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.add_song(song(2));

        assert_eq!(queue.len(), 3);
        assert_eq!(ids(&queue), vec![1, 2, 3]);
    }

    #[test]
    fn advancing_wraps_to_the_front() {
        let mut queue = queue_of(&[1, 2, 3]);

        for expected in [1, 2, 3, 1, 2] {
            assert_eq!(queue.current().map(|s| s.id), Ok(expected));
            queue.advance();
        }
    }

    #[test]
    fn advancing_size_times_returns_to_start() {
        let mut queue = queue_of(&[1, 2, 3, 4]);
        queue.advance();
        let start = queue.current().map(|s| s.id);

        for _ in 0..queue.len() {
            queue.advance();
        }

        assert_eq!(queue.current().map(|s| s.id), start);
    }

    #[test]
    fn removing_a_non_cursor_entry_keeps_the_current_song() {
        let mut queue = queue_of(&[1, 2, 3]);

        queue.remove_by_id(2);

        assert_eq!(ids(&queue), vec![1, 3]);
        assert_eq!(queue.current().map(|s| s.id), Ok(1));
    }

    #[test]
    fn removing_an_entry_before_the_cursor_keeps_the_current_song() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.advance();

        queue.remove_by_id(1);

        assert_eq!(queue.current().map(|s| s.id), Ok(2));
    }

    #[test]
    fn removing_the_current_song_moves_to_its_successor() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.advance();

        queue.remove_by_id(2);

        assert_eq!(queue.current().map(|s| s.id), Ok(3));
    }

    #[test]
    fn removing_the_current_last_song_wraps_to_the_front() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.advance();
        queue.advance();

        queue.remove_by_id(3);

        assert_eq!(queue.current().map(|s| s.id), Ok(1));
    }

    #[test]
    fn removing_the_only_song_empties_the_queue() {
        let mut queue = queue_of(&[1]);

        queue.remove_by_id(1);

        assert!(queue.is_empty());
        assert_eq!(
            queue.current().map(|s| s.id),
            Err(EngineError::EmptyState("playback queue"))
        );
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let mut queue = queue_of(&[1, 2]);

        queue.remove_by_id(9);

        assert_eq!(ids(&queue), vec![1, 2]);
        assert_eq!(queue.current().map(|s| s.id), Ok(1));
    }

    #[test]
    fn replacement_resets_the_cursor() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.advance();

        queue.replace_with(vec![song(7), song(8), song(7)]);

        assert_eq!(ids(&queue), vec![7, 8]);
        assert_eq!(queue.current().map(|s| s.id), Ok(7));
    }
}
