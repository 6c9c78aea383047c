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

//! # Quaver.
//!
//! A console music playback controller.
//!
//! Quaver loads a song library from CSV, maintains the ordered containers
//! that decide what plays next (a cyclic playback queue, a play-next
//! override queue, and a bounded history), and derives new queues from the
//! library by shuffling or by smart-playlist graph expansion.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the sequencing engine and processes every
//!   event, so all engine mutation is serialized on one thread.
//! * An **Input Thread** forwards console lines as application events.
//! * An **Audio Worker** wraps libmpv and reports transport state and
//!   end-of-track notifications back through the same event channel.

mod actions;
mod config;
mod error;
mod library;
mod model;
mod playback;
mod player;
mod playlist;
mod util;

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};

use crate::{
    actions::events::{AppEvent, process_events},
    config::AppConfig,
    library::Library,
    player::{AudioPlayer, AudioState, Player},
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub audio: AudioPlayer,
    pub player: Player,

    pub audio_state: AudioState,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, library: Library) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_event_tx = event_tx.clone();

        let history_limit = config.history_limit;

        Ok(Self {
            config,
            event_tx,
            event_rx,
            audio: AudioPlayer::new(audio_event_tx)?,
            player: Player::new(library, history_limit),
            audio_state: AudioState::Stopped,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the song library, wires up the communication
/// channels, spawns the input thread, and hands control to the event loop.
fn main() -> Result<()> {
    env_logger::init();

    let config = config::load_config();
    if let Err(e) = config::save_config(&config) {
        log::warn!("Failed to write configuration: {e}");
    }

    let library = library::csv::load_library(&config.library_file)
        .context("Failed to load the music library")?;

    let mut app = App::new(config, library).context("Failed to initialise application")?;

    // Forward console lines to the event loop; a closed stdin ends the
    // application.
    let input_tx = app.event_tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(AppEvent::Input(line)).is_err() {
                break;
            }
        }

        let _ = input_tx.send(AppEvent::ExitApplication);
    });

    println!(
        "Loaded {} songs. Type 'help' for commands.",
        app.player.library().len()
    );

    process_events(&mut app).context("Application error occurred")
}
