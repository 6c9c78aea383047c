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

//! Playback history.
//!
//! A bounded, duplicate-free stack of recently played songs backing the
//! "previous" action. Pushing a song that is already in the history moves it
//! to the top instead of storing it twice, so stepping back never replays a
//! stale duplicate. When the history is full the oldest entries are evicted.

use crate::error::EngineError;
use crate::model::Song;

/// Default bound on history growth during long sessions.
pub(crate) const DEFAULT_HISTORY_LIMIT: usize = 50;

pub(crate) struct PlaybackHistory {
    /// Most recent entry last.
    entries: Vec<Song>,
    limit: usize,
}

impl PlaybackHistory {
    pub(crate) fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records a song as the most recently played.
    ///
    /// Any earlier entry with the same id is removed first; if the history is
    /// full, the oldest entries are evicted to make room.
    pub(crate) fn push(&mut self, song: Song) {
        self.entries.retain(|s| s.id != song.id);

        while self.entries.len() >= self.limit {
            self.entries.remove(0);
        }

        self.entries.push(song);
    }

    /// Removes and returns the most recently played song.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyState`] when the history is empty.
    pub(crate) fn pop(&mut self) -> Result<Song, EngineError> {
        self.entries
            .pop()
            .ok_or(EngineError::EmptyState("playback history"))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Snapshot of the history, most recent first, for display.
    pub(crate) fn songs(&self) -> Vec<Song> {
        self.entries.iter().rev().cloned().collect()
    }
}
