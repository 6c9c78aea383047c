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

//! Application commands and console parsing.
//!
//! Each line read from the console becomes one [`AppCommand`]. Parsing is
//! deliberately forgiving about whitespace but strict about arguments: a
//! command with a bad or missing argument reports its usage string instead
//! of guessing.

use crate::model::SongId;

#[derive(Debug, PartialEq)]
pub(crate) enum AppCommand {
    Play(SongId),
    PlayNext,
    PlayPrevious,

    TogglePause,
    Stop,
    Seek(i32),
    AdjustVolume(i32),
    ToggleMute,

    AddToPlayNext(SongId),
    AddTrackToQueue(SongId),
    AddAlbumToQueue(String),
    AddArtistToQueue(String),
    RemoveFromQueue(SongId),

    EnableShuffle,
    SmartPlaylist(SongId, Option<usize>),

    ShowQueue,
    ShowUpNext,
    ShowHistory,
    ShowLibrary,
    ShowStatus,

    Help,
    Exit,
}

/// Parses one console line into an [`AppCommand`].
///
/// # Errors
///
/// Returns a user-facing message for an unknown command or a malformed
/// argument.
pub(crate) fn parse_command(line: &str) -> Result<AppCommand, String> {
    let line = line.trim();

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "play" => Ok(AppCommand::Play(parse_id(rest, "play <id>")?)),
        "next" => Ok(AppCommand::PlayNext),
        "prev" | "previous" => Ok(AppCommand::PlayPrevious),

        "pause" => Ok(AppCommand::TogglePause),
        "stop" => Ok(AppCommand::Stop),
        "seek" => Ok(AppCommand::Seek(parse_delta(rest, "seek <seconds>")?)),
        "volume" | "vol" => Ok(AppCommand::AdjustVolume(parse_delta(
            rest,
            "volume <delta>",
        )?)),
        "mute" => Ok(AppCommand::ToggleMute),

        "play-next" => Ok(AppCommand::AddToPlayNext(parse_id(
            rest,
            "play-next <id>",
        )?)),
        "queue-track" => Ok(AppCommand::AddTrackToQueue(parse_id(
            rest,
            "queue-track <id>",
        )?)),
        "queue-album" => Ok(AppCommand::AddAlbumToQueue(parse_name(
            rest,
            "queue-album <name>",
        )?)),
        "queue-artist" => Ok(AppCommand::AddArtistToQueue(parse_name(
            rest,
            "queue-artist <name>",
        )?)),
        "queue-remove" => Ok(AppCommand::RemoveFromQueue(parse_id(
            rest,
            "queue-remove <id>",
        )?)),

        "shuffle" => Ok(AppCommand::EnableShuffle),
        "smart" => parse_smart(rest),

        "queue" => Ok(AppCommand::ShowQueue),
        "upnext" => Ok(AppCommand::ShowUpNext),
        "history" => Ok(AppCommand::ShowHistory),
        "library" => Ok(AppCommand::ShowLibrary),
        "status" => Ok(AppCommand::ShowStatus),

        "help" => Ok(AppCommand::Help),
        "quit" | "exit" => Ok(AppCommand::Exit),

        other => Err(format!("Unknown command '{other}'; try 'help'")),
    }
}

fn parse_smart(rest: &str) -> Result<AppCommand, String> {
    const USAGE: &str = "smart <seed-id> [size]";

    let mut args = rest.split_whitespace();

    let seed = parse_id(args.next().unwrap_or(""), USAGE)?;

    let size = match args.next() {
        Some(arg) => Some(arg.parse().map_err(|_| format!("Usage: {USAGE}"))?),
        None => None,
    };

    Ok(AppCommand::SmartPlaylist(seed, size))
}

fn parse_id(arg: &str, usage: &str) -> Result<SongId, String> {
    arg.parse().map_err(|_| format!("Usage: {usage}"))
}

fn parse_delta(arg: &str, usage: &str) -> Result<i32, String> {
    arg.parse().map_err(|_| format!("Usage: {usage}"))
}

fn parse_name(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        return Err(format!("Usage: {usage}"));
    }

    Ok(arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_playback_commands() {
        assert_eq!(parse_command("play 12"), Ok(AppCommand::Play(12)));
        assert_eq!(parse_command("next"), Ok(AppCommand::PlayNext));
        assert_eq!(parse_command("prev"), Ok(AppCommand::PlayPrevious));
        assert_eq!(parse_command("  shuffle  "), Ok(AppCommand::EnableShuffle));
    }

    #[test]
    fn parses_transport_commands() {
        assert_eq!(parse_command("seek -20"), Ok(AppCommand::Seek(-20)));
        assert_eq!(parse_command("volume 5"), Ok(AppCommand::AdjustVolume(5)));
        assert_eq!(parse_command("mute"), Ok(AppCommand::ToggleMute));
    }

    #[test]
    fn names_keep_embedded_spaces() {
        assert_eq!(
            parse_command("queue-album Kind of Blue"),
            Ok(AppCommand::AddAlbumToQueue("Kind of Blue".to_string()))
        );
        assert_eq!(
            parse_command("queue-artist Miles Davis"),
            Ok(AppCommand::AddArtistToQueue("Miles Davis".to_string()))
        );
    }

    #[test]
    fn smart_size_is_optional() {
        assert_eq!(
            parse_command("smart 3"),
            Ok(AppCommand::SmartPlaylist(3, None))
        );
        assert_eq!(
            parse_command("smart 3 15"),
            Ok(AppCommand::SmartPlaylist(3, Some(15)))
        );
    }

    #[test]
    fn bad_arguments_report_usage() {
        assert_eq!(
            parse_command("play abc"),
            Err("Usage: play <id>".to_string())
        );
        assert_eq!(
            parse_command("queue-album"),
            Err("Usage: queue-album <name>".to_string())
        );
        assert_eq!(
            parse_command("smart"),
            Err("Usage: smart <seed-id> [size]".to_string())
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(parse_command("warble").is_err());
    }
}
