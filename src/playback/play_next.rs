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

//! The "play next" override queue.
//!
//! A strict FIFO of user-requested overrides, drained before the playback
//! queue. Unlike the playback queue this one permits duplicate ids: queueing
//! the same song twice is an explicit request to hear it twice.

use std::collections::VecDeque;

use crate::error::EngineError;
use crate::model::Song;

pub(crate) struct PlayNextQueue {
    queue: VecDeque<Song>,
}

impl PlayNextQueue {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends a song to the end of the queue.
    pub(crate) fn add_song(&mut self, song: Song) {
        self.queue.push_back(song);
    }

    /// Removes and returns the song at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyState`] when the queue is empty.
    pub(crate) fn take_next(&mut self) -> Result<Song, EngineError> {
        self.queue
            .pop_front()
            .ok_or(EngineError::EmptyState("play-next queue"))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Snapshot of the queued songs in play order, for display.
    pub(crate) fn songs(&self) -> Vec<Song> {
        self.queue.iter().cloned().collect()
    }
}
