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

//! Smart playlist generation.
//!
//! A smart playlist is a breadth-first expansion over an implicit similarity
//! graph: two songs are adjacent when they share an artist or share an
//! album. Starting from a seed song, the traversal visits artist neighbours
//! before album neighbours, each in catalog order, so the result is fully
//! deterministic for a given library.

use std::collections::{HashSet, VecDeque};

use crate::error::EngineError;
use crate::library::Library;
use crate::model::{Song, SongId};

/// Expands a seed song into an ordered playlist of at most `max_size` songs.
///
/// The seed is always first and no song appears twice. Expansion stops the
/// instant the playlist reaches `max_size`, even mid-way through a
/// neighbour list.
///
/// # Errors
///
/// Returns [`EngineError::NotFound`] if `seed_id` is not in the library.
pub(crate) fn generate_smart_playlist(
    library: &Library,
    seed_id: SongId,
    max_size: usize,
) -> Result<Vec<Song>, EngineError> {
    let seed = library
        .find_by_id(seed_id)
        .ok_or(EngineError::NotFound(seed_id))?;

    if max_size == 0 {
        return Ok(Vec::new());
    }

    let mut visited: HashSet<SongId> = HashSet::from([seed.id]);
    let mut playlist = vec![seed.clone()];
    let mut frontier = VecDeque::from([seed.clone()]);

    'expand: while let Some(node) = frontier.pop_front() {
        if playlist.len() >= max_size {
            break;
        }

        let artist_neighbours = library.songs_by_artist(&node.artist);
        let album_neighbours = library.songs_by_album(&node.album);

        for neighbour in artist_neighbours.into_iter().chain(album_neighbours) {
            if !visited.insert(neighbour.id) {
                continue;
            }

            playlist.push(neighbour.clone());
            frontier.push_back(neighbour.clone());

            if playlist.len() >= max_size {
                break 'expand;
            }
        }
    }

    log::debug!(
        "Smart playlist from seed {seed_id}: {} of at most {max_size} songs",
        playlist.len()
    );

    Ok(playlist)
}
