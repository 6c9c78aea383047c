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

//! Playback control and state management.
//!
//! This module provides two things:
//!
//! * [`Player`] — the sequencing engine. It composes the library, the
//!   playback queue, the play-next queue, and the history, and decides which
//!   song plays next. It is synchronous and single-threaded; every mutating
//!   call runs on the event-loop thread.
//! * [`AudioPlayer`] — the handle to the audio engine. It performs no audio
//!   work itself but sends instructions to a background worker thread that
//!   interfaces with the underlying audio library (MPV).
//!
//! The engine never touches the audio worker: it returns the chosen
//! [`Song`] to the event loop, which forwards the file path to the
//! [`AudioPlayer`].

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{
    actions::events::AppEvent,
    error::EngineError,
    library::Library,
    model::{Song, SongId},
    playback::{
        history::PlaybackHistory, play_next::PlayNextQueue, queue::PlaybackQueue,
        shuffle::ShuffleCycle,
    },
    player::commands::AudioPlayerCommand,
    playlist::generate_smart_playlist,
};

/// Playback session state of the sequencing engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    /// No current song has been selected yet.
    Idle,
    /// A current song is set and has been handed to the audio engine.
    Playing,
}

/// Transport state reported by the audio worker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum AudioState {
    Playing,
    Paused,
    Stopped,
}

/// The playback sequencing engine.
pub(crate) struct Player {
    library: Library,
    queue: PlaybackQueue,
    play_next: PlayNextQueue,
    history: PlaybackHistory,
    current: Option<Song>,
}

impl Player {
    pub(crate) fn new(library: Library, history_limit: usize) -> Self {
        Self {
            library,
            queue: PlaybackQueue::new(),
            play_next: PlayNextQueue::new(),
            history: PlaybackHistory::with_limit(history_limit),
            current: None,
        }
    }

    pub(crate) fn state(&self) -> PlayerState {
        if self.current.is_some() {
            PlayerState::Playing
        } else {
            PlayerState::Idle
        }
    }

    pub(crate) fn current(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    pub(crate) fn library(&self) -> &Library {
        &self.library
    }

    pub(crate) fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    pub(crate) fn play_next_queue(&self) -> &PlayNextQueue {
        &self.play_next
    }

    pub(crate) fn history(&self) -> &PlaybackHistory {
        &self.history
    }

    /// Selects a specific song by id and makes it the current one.
    ///
    /// The song playing until now, if any, is recorded in the history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the id is not in the library; the
    /// session is left untouched in that case.
    pub(crate) fn select_and_play(&mut self, id: SongId) -> Result<Song, EngineError> {
        let song = self
            .library
            .find_by_id(id)
            .ok_or(EngineError::NotFound(id))?
            .clone();

        self.begin_playing(song.clone());

        Ok(song)
    }

    /// Chooses the next song to play.
    ///
    /// Play-next overrides are drained first; otherwise the playback queue
    /// supplies its current song and advances. Returns `None` when every
    /// source is empty — the end of the library is an expected steady state,
    /// not an error, and the session is left untouched.
    pub(crate) fn play_next(&mut self) -> Option<Song> {
        let next = if !self.play_next.is_empty() {
            log::debug!("Playing from the play-next queue");
            self.play_next.take_next().ok()?
        } else if !self.queue.is_empty() {
            log::debug!("Playing from the playback queue");
            let song = self.queue.current().ok()?.clone();
            self.queue.advance();
            song
        } else {
            log::debug!("All playback sources are empty");
            return None;
        };

        self.begin_playing(next.clone());

        Some(next)
    }

    /// Steps back to the most recently played song.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyState`] when the history is empty.
    pub(crate) fn play_previous(&mut self) -> Result<Song, EngineError> {
        let song = self.history.pop()?;
        self.current = Some(song.clone());

        Ok(song)
    }

    /// Replaces the playback queue with a shuffled pass over the active
    /// domain.
    ///
    /// The domain is whatever is currently being played through: the
    /// playback queue's contents when it is non-empty (a plain queue or a
    /// smart playlist alike), otherwise the whole library. Returns the
    /// number of songs in the new queue.
    pub(crate) fn enable_shuffle(&mut self) -> usize {
        let domain: Vec<Song> = if self.queue.is_empty() {
            self.library.songs().to_vec()
        } else {
            self.queue.songs().to_vec()
        };

        if domain.is_empty() {
            log::warn!("Nothing to shuffle: the library is empty");
            return 0;
        }

        let shuffled = ShuffleCycle::new(&domain).drain();
        self.queue.replace_with(shuffled);

        self.queue.len()
    }

    /// Replaces the playback queue with a smart playlist expanded from the
    /// given seed. Returns the playlist length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the seed is not in the library;
    /// the existing queue is kept in that case.
    pub(crate) fn apply_smart_playlist(
        &mut self,
        seed_id: SongId,
        max_size: usize,
    ) -> Result<usize, EngineError> {
        let playlist = generate_smart_playlist(&self.library, seed_id, max_size)?;
        self.queue.replace_with(playlist);

        Ok(self.queue.len())
    }

    /// Queues a play-next override.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the id is not in the library.
    pub(crate) fn add_to_play_next(&mut self, id: SongId) -> Result<Song, EngineError> {
        let song = self
            .library
            .find_by_id(id)
            .ok_or(EngineError::NotFound(id))?
            .clone();

        self.play_next.add_song(song.clone());

        Ok(song)
    }

    /// Appends a single library song to the playback queue.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the id is not in the library.
    pub(crate) fn add_track_to_queue(&mut self, id: SongId) -> Result<Song, EngineError> {
        let song = self
            .library
            .find_by_id(id)
            .ok_or(EngineError::NotFound(id))?
            .clone();

        self.queue.add_song(song.clone());

        Ok(song)
    }

    /// Appends every library song on the given album to the playback queue,
    /// in catalog order. Returns the number of matching songs.
    pub(crate) fn add_album_to_queue(&mut self, album: &str) -> usize {
        let songs: Vec<Song> = self
            .library
            .songs_by_album(album)
            .into_iter()
            .cloned()
            .collect();
        self.append_to_queue(songs)
    }

    /// Appends every library song by the given artist to the playback queue,
    /// in catalog order. Returns the number of matching songs.
    pub(crate) fn add_artist_to_queue(&mut self, artist: &str) -> usize {
        let songs: Vec<Song> = self
            .library
            .songs_by_artist(artist)
            .into_iter()
            .cloned()
            .collect();
        self.append_to_queue(songs)
    }

    pub(crate) fn remove_from_queue(&mut self, id: SongId) {
        self.queue.remove_by_id(id);
    }

    fn append_to_queue(&mut self, songs: Vec<Song>) -> usize {
        let count = songs.len();

        for song in songs {
            self.queue.add_song(song);
        }

        count
    }

    fn begin_playing(&mut self, song: Song) {
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }

        self.current = Some(song);
    }
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (state
    ///   changes, errors, end-of-track notifications) back to the main event
    ///   loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal audio backend flags to a simplified [`AudioState`].
    fn audio_state(is_paused: bool, is_idle: bool) -> AudioState {
        if is_idle {
            AudioState::Stopped
        } else if is_paused {
            AudioState::Paused
        } else {
            AudioState::Playing
        }
    }

    /// Instructs the worker to load and play a specific audio file.
    pub(crate) fn play_file(&self, filename: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::PlayFile(filename.to_string()))?;
        Ok(())
    }

    /// Toggles the playback state between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::TogglePause)?;
        Ok(())
    }

    /// Stop playback.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    /// Toggles the audio output between muted and unmuted.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Adjusts the playback position forward or backwards relative to the
    /// current position.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Seek(delta))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: SongId, artist: &str, album: &str) -> Song {
        Song {
            id,
            title: format!("song {id}"),
            artist: artist.to_string(),
            album: album.to_string(),
            duration: 60,
            filename: format!("/music/{id}.mp3"),
        }
    }

    fn player() -> Player {
        let mut library = Library::new();
        library.add_song(song(1, "X", "M"));
        library.add_song(song(2, "X", "N"));
        library.add_song(song(3, "Y", "M"));
        library.add_song(song(5, "Y", "N"));
        library.add_song(song(7, "Z", "O"));
        library.rebuild_indexes();

        Player::new(library, 50)
    }

    fn queue_ids(player: &Player) -> Vec<SongId> {
        player.queue().songs().iter().map(|s| s.id).collect()
    }

    #[test]
    fn starts_idle() {
        let player = player();

        assert_eq!(player.state(), PlayerState::Idle);
        assert!(player.current().is_none());
    }

    #[test]
    fn select_and_play_sets_the_current_song() {
        let mut player = player();

        let song = player.select_and_play(3).expect("song 3 exists");

        assert_eq!(song.id, 3);
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.current().map(|s| s.id), Some(3));
        assert!(player.history().is_empty());
    }

    #[test]
    fn selecting_again_records_the_previous_song() {
        let mut player = player();
        player.select_and_play(1).unwrap();

        player.select_and_play(2).unwrap();

        assert_eq!(player.current().map(|s| s.id), Some(2));
        assert_eq!(player.history().songs().first().map(|s| s.id), Some(1));
    }

    #[test]
    fn selecting_an_unknown_id_changes_nothing() {
        let mut player = player();
        player.select_and_play(1).unwrap();

        assert_eq!(player.select_and_play(99), Err(EngineError::NotFound(99)));

        assert_eq!(player.current().map(|s| s.id), Some(1));
        assert!(player.history().is_empty());
    }

    #[test]
    fn play_next_prefers_the_play_next_queue() {
        let mut player = player();
        player.add_track_to_queue(5).unwrap();
        player.add_to_play_next(7).unwrap();

        // The override plays first and the playback queue is untouched.
        assert_eq!(player.play_next().map(|s| s.id), Some(7));
        assert_eq!(player.queue().current().map(|s| s.id), Ok(5));

        // The following call falls through to the playback queue.
        assert_eq!(player.play_next().map(|s| s.id), Some(5));
    }

    #[test]
    fn play_next_cycles_the_playback_queue() {
        let mut player = player();
        player.add_track_to_queue(1).unwrap();
        player.add_track_to_queue(2).unwrap();

        let played: Vec<SongId> = (0..4).filter_map(|_| player.play_next().map(|s| s.id)).collect();

        assert_eq!(played, vec![1, 2, 1, 2]);
    }

    #[test]
    fn play_next_with_no_sources_reports_nothing_to_play() {
        let mut player = player();
        player.select_and_play(1).unwrap();

        assert!(player.play_next().is_none());

        // Nothing to play is not a state change: the current song stays and
        // the history was not touched.
        assert_eq!(player.current().map(|s| s.id), Some(1));
        assert!(player.history().is_empty());
    }

    #[test]
    fn play_next_records_history() {
        let mut player = player();
        player.add_track_to_queue(1).unwrap();
        player.add_track_to_queue(2).unwrap();

        player.play_next();
        player.play_next();

        let history: Vec<SongId> = player.history().songs().iter().map(|s| s.id).collect();
        assert_eq!(history, vec![1]);
    }

    #[test]
    fn play_previous_steps_back_through_history() {
        let mut player = player();
        player.select_and_play(1).unwrap();
        player.select_and_play(2).unwrap();

        let song = player.play_previous().expect("history has an entry");

        assert_eq!(song.id, 1);
        assert_eq!(player.current().map(|s| s.id), Some(1));
    }

    #[test]
    fn play_previous_with_no_history_fails() {
        let mut player = player();

        assert_eq!(
            player.play_previous(),
            Err(EngineError::EmptyState("playback history"))
        );
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn shuffle_over_an_empty_queue_uses_the_library() {
        let mut player = player();

        assert_eq!(player.enable_shuffle(), 5);
        assert_eq!(player.queue().len(), 5);
    }

    #[test]
    fn shuffle_permutes_the_active_queue_domain() {
        let mut player = player();
        player.add_track_to_queue(1).unwrap();
        player.add_track_to_queue(2).unwrap();
        player.add_track_to_queue(3).unwrap();

        assert_eq!(player.enable_shuffle(), 3);

        let mut shuffled = queue_ids(&player);
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec![1, 2, 3]);
        // The cursor resets to the head of the new content.
        assert_eq!(player.queue().cursor(), Some(0));
    }

    #[test]
    fn smart_playlist_replaces_the_queue() {
        let mut player = player();
        player.add_track_to_queue(7).unwrap();

        let len = player.apply_smart_playlist(1, 3).expect("seed 1 exists");

        assert_eq!(len, 3);
        // Seed 1 shares artist X with 2 and album M with 3.
        assert_eq!(queue_ids(&player), vec![1, 2, 3]);
    }

    #[test]
    fn smart_playlist_with_unknown_seed_keeps_the_queue() {
        let mut player = player();
        player.add_track_to_queue(7).unwrap();

        assert_eq!(
            player.apply_smart_playlist(42, 3),
            Err(EngineError::NotFound(42))
        );
        assert_eq!(queue_ids(&player), vec![7]);
    }

    #[test]
    fn album_and_artist_enqueue_follow_catalog_order() {
        let mut player = player();

        assert_eq!(player.add_album_to_queue("M"), 2);
        assert_eq!(queue_ids(&player), vec![1, 3]);

        // Song 3 is already queued; the queue deduplicates it.
        assert_eq!(player.add_artist_to_queue("Y"), 2);
        assert_eq!(queue_ids(&player), vec![1, 3, 5]);
    }

    #[test]
    fn unknown_album_enqueues_nothing() {
        let mut player = player();

        assert_eq!(player.add_album_to_queue("missing"), 0);
        assert!(player.queue().is_empty());
    }
}
