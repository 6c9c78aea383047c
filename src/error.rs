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

//! Error types for the playback engine.
//!
//! Lookup-style operations (find by id, songs by artist, and so on) never
//! produce these errors — absence is an ordinary outcome during interactive
//! use and is modelled with `Option` or an empty list. The errors here are
//! reserved for calls whose preconditions the caller is expected to check,
//! plus seed lookups that name a specific id.
//!
//! A failed call never leaves a container partially mutated.

use thiserror::Error;

use crate::model::SongId;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum EngineError {
    /// A song id named by the caller does not exist in the library.
    #[error("song {0} not found in the library")]
    NotFound(SongId),

    /// A state-dependent operation was called on an empty container. The
    /// string names the container for display.
    #[error("{0} is empty")]
    EmptyState(&'static str),

    /// A positional library lookup was beyond the end of the catalog.
    #[error("index {index} is out of range ({len} songs)")]
    OutOfRange { index: usize, len: usize },
}
