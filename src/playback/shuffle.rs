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

//! Without-replacement shuffle cycles.
//!
//! A [`ShuffleCycle`] permutes its domain once up front and then deals the
//! songs out in that fixed order. Every song in the domain is returned
//! exactly once per cycle; the cycle ends when the permutation is exhausted.
//! A fresh cycle is created per shuffle request and discarded afterwards.

use rand::{rng, seq::SliceRandom};

use crate::model::Song;

pub(crate) struct ShuffleCycle {
    order: Vec<Song>,
    next: usize,
}

impl ShuffleCycle {
    /// Creates a new cycle over the given domain.
    ///
    /// An empty domain produces a cycle that is already ended; no random
    /// draw is made for it.
    pub(crate) fn new(domain: &[Song]) -> Self {
        let mut order: Vec<Song> = domain.to_vec();

        if !order.is_empty() {
            let mut rng = rng();
            order.shuffle(&mut rng);
        }

        Self { order, next: 0 }
    }

    /// Returns the next song of the cycle, or `None` once every song in the
    /// domain has been returned.
    pub(crate) fn next_song(&mut self) -> Option<Song> {
        let song = self.order.get(self.next)?.clone();
        self.next += 1;
        Some(song)
    }

    /// Drains the remainder of the cycle in order.
    pub(crate) fn drain(mut self) -> Vec<Song> {
        let mut songs = Vec::with_capacity(self.order.len() - self.next);

        while let Some(song) = self.next_song() {
            songs.push(song);
        }

        songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SongId;
    use std::collections::HashSet;

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

    #[test]
    fn cycle_returns_each_song_exactly_once() {
        let domain: Vec<Song> = (1..=40).map(song).collect();
        let mut cycle = ShuffleCycle::new(&domain);

        let mut seen = HashSet::new();
        while let Some(song) = cycle.next_song() {
            assert!(seen.insert(song.id), "song {} repeated", song.id);
        }

        assert_eq!(seen.len(), domain.len());
    }

    #[test]
    fn exhausted_cycle_stays_ended() {
        let domain = vec![song(1)];
        let mut cycle = ShuffleCycle::new(&domain);

        assert_eq!(cycle.next_song().map(|s| s.id), Some(1));
        assert!(cycle.next_song().is_none());
        assert!(cycle.next_song().is_none());
    }

    #[test]
    fn empty_domain_is_immediately_ended() {
        let mut cycle = ShuffleCycle::new(&[]);

        assert!(cycle.next_song().is_none());
    }

    #[test]
    fn drain_covers_the_whole_domain() {
        let domain: Vec<Song> = (1..=10).map(song).collect();
        let drained = ShuffleCycle::new(&domain).drain();

        let expected: HashSet<SongId> = domain.iter().map(|s| s.id).collect();
        let produced: HashSet<SongId> = drained.iter().map(|s| s.id).collect();

        assert_eq!(drained.len(), domain.len());
        assert_eq!(produced, expected);
    }
}
