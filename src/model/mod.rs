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

//! Domain models and core data structures.
//!
//! This module defines the central entity of the application — the [`Song`] —
//! the metadata value handed between the library, the playback containers,
//! and the audio engine.

/// Unique identifier of a song within the library.
pub(crate) type SongId = i32;

/// Metadata for a single audio track.
///
/// Songs are plain values: they are copied freely between the library, the
/// playback queue, the play-next queue, and the history, and no container
/// owns a song exclusively. The `filename` is only meaningful to the audio
/// engine, which hands it to the decoder as-is.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    /// Track length in seconds.
    pub(crate) duration: i64,
    /// Path of the audio file on disk.
    pub(crate) filename: String,
}
