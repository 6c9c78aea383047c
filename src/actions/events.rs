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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic of the application,
//! bridging console input, the sequencing engine, and the audio worker.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: [`AppEvent`]s arrive on a single channel from the stdin
//!    reader thread and the audio worker.
//! 2. **Process**: [`process_events`] parses input into
//!    [`AppCommand`](crate::actions::commands::AppCommand)s, drives the
//!    [`Player`](crate::player::Player) engine, and forwards chosen songs to
//!    the audio worker.
//!
//! Every engine mutation happens here, on the event-loop thread. The audio
//! worker's end-of-track notification arrives as an ordinary event and is
//! serialized with everything else, so the engine itself never sees
//! concurrent calls.

use anyhow::{Result, bail};

use crate::{
    App,
    actions::commands::{AppCommand, parse_command},
    model::Song,
    player::AudioState,
    util::format::format_time,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    /// A line of console input.
    Input(String),

    /// The audio worker reached the natural end of the current track.
    TrackFinished,

    AudioStateChanged(AudioState),
    VolumeChanged(u32),

    FatalError(String),

    ExitApplication,
}

/// Runs the main application loop.
///
/// This function loops until a 'quit' command is received, the input channel
/// closes, or the audio worker reports a fatal error.
pub(crate) fn process_events(app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::Input(line) => process_input(app, &line)?,

            AppEvent::TrackFinished => play_following(app)?,

            AppEvent::AudioStateChanged(state) => app.audio_state = state,
            AppEvent::VolumeChanged(volume) => println!("Volume: {volume}%"),

            AppEvent::FatalError(message) => bail!(message),

            AppEvent::ExitApplication => break,
        }
    }

    Ok(())
}

fn process_input(app: &mut App, line: &str) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    match parse_command(line) {
        Ok(command) => dispatch_command(app, command),
        Err(message) => {
            println!("{message}");
            Ok(())
        }
    }
}

fn dispatch_command(app: &mut App, command: AppCommand) -> Result<()> {
    match command {
        AppCommand::Play(id) => match app.player.select_and_play(id) {
            Ok(song) => play(app, &song)?,
            Err(e) => println!("{e}"),
        },

        AppCommand::PlayNext => play_following(app)?,

        AppCommand::PlayPrevious => match app.player.play_previous() {
            Ok(song) => play(app, &song)?,
            Err(e) => println!("{e}"),
        },

        // Transport commands go straight to the audio worker and never
        // touch the engine.
        AppCommand::TogglePause => app.audio.toggle_pause()?,
        AppCommand::Stop => app.audio.stop()?,
        AppCommand::Seek(delta) => app.audio.seek(delta)?,
        AppCommand::AdjustVolume(delta) => app.audio.adjust_volume(delta)?,
        AppCommand::ToggleMute => app.audio.toggle_mute()?,

        AppCommand::AddToPlayNext(id) => match app.player.add_to_play_next(id) {
            Ok(song) => println!("Playing next: {}", song.title),
            Err(e) => println!("{e}"),
        },

        AppCommand::AddTrackToQueue(id) => match app.player.add_track_to_queue(id) {
            Ok(song) => println!("Queued: {}", song.title),
            Err(e) => println!("{e}"),
        },

        AppCommand::AddAlbumToQueue(album) => {
            let count = app.player.add_album_to_queue(&album);
            println!("Queued {count} songs from '{album}'");
        }

        AppCommand::AddArtistToQueue(artist) => {
            let count = app.player.add_artist_to_queue(&artist);
            println!("Queued {count} songs by '{artist}'");
        }

        AppCommand::RemoveFromQueue(id) => {
            app.player.remove_from_queue(id);
            println!("Removed song {id} from the queue");
        }

        AppCommand::EnableShuffle => {
            let count = app.player.enable_shuffle();
            println!("Shuffled {count} songs into the queue");
        }

        AppCommand::SmartPlaylist(seed, size) => {
            let size = size.unwrap_or(app.config.smart_playlist_size);
            match app.player.apply_smart_playlist(seed, size) {
                Ok(count) => println!("Smart playlist of {count} songs queued from seed {seed}"),
                Err(e) => println!("{e}"),
            }
        }

        AppCommand::ShowQueue => show_queue(app),
        AppCommand::ShowUpNext => show_songs("Playing next", &app.player.play_next_queue().songs()),
        AppCommand::ShowHistory => show_songs("Recently played", &app.player.history().songs()),
        AppCommand::ShowLibrary => show_songs("Library", app.player.library().songs()),
        AppCommand::ShowStatus => show_status(app),

        AppCommand::Help => show_help(),

        AppCommand::Exit => {
            app.audio.stop().ok();
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

/// Hands a chosen song to the audio worker and announces it.
fn play(app: &mut App, song: &Song) -> Result<()> {
    app.audio.play_file(&song.filename)?;

    println!(
        "Now playing: {} by {} [{}]",
        song.title,
        song.artist,
        format_time(song.duration.max(0) as u64)
    );

    Ok(())
}

/// Advances playback to whatever the engine decides comes next.
fn play_following(app: &mut App) -> Result<()> {
    match app.player.play_next() {
        Some(song) => play(app, &song),
        None => {
            println!("End of playlist. No more songs to play.");
            Ok(())
        }
    }
}

fn show_queue(app: &App) {
    let queue = app.player.queue();

    if queue.is_empty() {
        println!("The playback queue is empty.");
        return;
    }

    println!("Playback queue:");
    for (position, song) in queue.songs().iter().enumerate() {
        let marker = if queue.cursor() == Some(position) {
            '>'
        } else {
            ' '
        };
        println!("{marker} {}", describe(song));
    }
}

fn show_songs(heading: &str, songs: &[Song]) {
    if songs.is_empty() {
        println!("{heading}: nothing to show.");
        return;
    }

    println!("{heading}:");
    for song in songs {
        println!("  {}", describe(song));
    }
}

fn describe(song: &Song) -> String {
    format!(
        "{:>4}  {} by {} ({}) [{}]",
        song.id,
        song.title,
        song.artist,
        song.album,
        format_time(song.duration.max(0) as u64)
    )
}

fn show_status(app: &App) {
    match app.player.current() {
        Some(song) => println!("Current song: {}", describe(song)),
        None => println!("Nothing has been played yet."),
    }

    println!(
        "Engine: {:?} | Audio: {:?}",
        app.player.state(),
        app.audio_state
    );
}

fn show_help() {
    println!("Commands:");
    println!("  play <id>             play a library song now");
    println!("  next / prev           move through the playback sources");
    println!("  pause / stop / mute   transport controls");
    println!("  seek <seconds>        seek relative to the current position");
    println!("  volume <delta>        adjust the volume");
    println!("  play-next <id>        queue a song to play next");
    println!("  queue-track <id>      append a song to the playback queue");
    println!("  queue-album <name>    append a whole album");
    println!("  queue-artist <name>   append everything by an artist");
    println!("  queue-remove <id>     remove a song from the playback queue");
    println!("  shuffle               shuffle the active queue (or library)");
    println!("  smart <seed> [size]   build a smart playlist from a seed song");
    println!("  queue / upnext / history / library / status");
    println!("  quit");
}
