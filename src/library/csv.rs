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

//! Library ingestion from CSV.
//!
//! The library file is a plain CSV with a header row and one song per line:
//!
//! ```text
//! id,title,artist,album,duration,path
//! ```
//!
//! The path is the final column and may itself contain commas, so rows are
//! split into at most six fields. Blank lines are skipped; any other
//! malformed row aborts the load with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};

use crate::library::Library;
use crate::model::Song;

/// Loads a library from the CSV file at `path` and rebuilds its indexes.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if a row fails
/// to parse. Parse errors name the 1-based line number.
pub(crate) fn load_library(path: &str) -> Result<Library> {
    let file = File::open(path).with_context(|| format!("Failed to open library file {path}"))?;
    let reader = BufReader::new(file);

    let mut library = Library::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {path}"))?;

        // The first row is the column header.
        if index == 0 || line.trim().is_empty() {
            continue;
        }

        let song = parse_row(&line)
            .with_context(|| format!("Malformed row in {path} at line {}", index + 1))?;
        library.add_song(song);
    }

    library.rebuild_indexes();

    if library.is_empty() {
        log::warn!("The library file {path} contains no songs");
    } else {
        log::info!("Loaded {} songs from {}", library.len(), path);
    }

    Ok(library)
}

fn parse_row(line: &str) -> Result<Song> {
    let mut fields = line.splitn(6, ',');

    let id = fields.next().context("missing id column")?;
    let id = id.trim().parse().with_context(|| format!("bad id '{id}'"))?;

    let title = fields.next().context("missing title column")?.to_string();
    let artist = fields.next().context("missing artist column")?.to_string();
    let album = fields.next().context("missing album column")?.to_string();

    let duration = fields.next().context("missing duration column")?;
    let duration = duration
        .trim()
        .parse()
        .with_context(|| format!("bad duration '{duration}'"))?;

    let filename = fields.next().context("missing path column")?.to_string();

    Ok(Song {
        id,
        title,
        artist,
        album,
        duration,
        filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_row() {
        let song = parse_row("7,Blue in Green,Miles Davis,Kind of Blue,337,/music/blue.flac")
            .expect("row should parse");

        assert_eq!(song.id, 7);
        assert_eq!(song.title, "Blue in Green");
        assert_eq!(song.artist, "Miles Davis");
        assert_eq!(song.album, "Kind of Blue");
        assert_eq!(song.duration, 337);
        assert_eq!(song.filename, "/music/blue.flac");
    }

    #[test]
    fn path_keeps_trailing_commas() {
        let song = parse_row("1,T,A,B,10,/odd,path,with,commas.mp3").expect("row should parse");

        assert_eq!(song.filename, "/odd,path,with,commas.mp3");
    }

    #[test]
    fn rejects_non_numeric_columns() {
        assert!(parse_row("x,T,A,B,10,/p.mp3").is_err());
        assert!(parse_row("1,T,A,B,long,/p.mp3").is_err());
    }

    #[test]
    fn rejects_short_rows() {
        assert!(parse_row("1,T,A").is_err());
    }

    #[test]
    fn loads_file_skipping_header_and_blank_lines() {
        use std::io::Write;

        let path = std::env::temp_dir().join(format!("quaver-csv-test-{}.csv", std::process::id()));
        let mut file = File::create(&path).expect("create temp csv");
        writeln!(file, "id,title,artist,album,duration,path").unwrap();
        writeln!(file, "1,A,X,M,100,/a.mp3").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2,B,X,N,200,/b.mp3").unwrap();
        drop(file);

        let library = load_library(path.to_str().unwrap()).expect("load should succeed");
        std::fs::remove_file(&path).ok();

        assert_eq!(library.len(), 2);
        assert_eq!(library.find_by_id(2).map(|s| s.title.as_str()), Some("B"));
    }

    #[test]
    fn load_error_names_the_line() {
        use std::io::Write;

        let path = std::env::temp_dir().join(format!("quaver-csv-bad-{}.csv", std::process::id()));
        let mut file = File::create(&path).expect("create temp csv");
        writeln!(file, "id,title,artist,album,duration,path").unwrap();
        writeln!(file, "1,A,X,M,100,/a.mp3").unwrap();
        writeln!(file, "oops").unwrap();
        drop(file);

        let err = load_library(path.to_str().unwrap()).expect_err("load should fail");
        std::fs::remove_file(&path).ok();

        assert!(format!("{err:#}").contains("line 3"));
    }
}
