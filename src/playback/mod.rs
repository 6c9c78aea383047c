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

//! Playback sequencing containers.
//!
//! These are the ordered containers that decide what plays next:
//!
//! * [`queue`]: the cyclic playback queue with a movable cursor.
//! * [`play_next`]: the FIFO of explicit "play next" overrides, drained
//!   before the playback queue.
//! * [`history`]: the bounded stack of recently played songs.
//! * [`shuffle`]: the without-replacement shuffle cycle.
//!
//! None of these containers talk to the audio engine; the
//! [`Player`](crate::player::Player) composes them and forwards the chosen
//! song.

pub(crate) mod history;
pub(crate) mod play_next;
pub(crate) mod queue;
pub(crate) mod shuffle;
