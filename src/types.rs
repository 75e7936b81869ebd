//! Global type definitions.

use std::io;
use std::str::Utf8Error;
use std::path::PathBuf;

use csv::ByteRecord;
use thiserror::Error;

/// Position of a cell within a record.
pub type ColumnPos = usize;

pub static ARTIST_HEADER: &str = "Artist";
pub static TITLE_HEADER: &str = "Title";

/// Where the artist and title live in each data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
	pub artist: ColumnPos,
	pub title: ColumnPos,
}

/// Layout of a two-column export without a recognisable header.
impl Default for ColumnIndex {
	fn default() -> Self {
		Self {
			artist: 1,
			title: 0,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
	/// Decorated `/me` announcement for 3DX chat, written to a file.
	#[default]
	Formatted,
	/// `Artist - Title` listing printed to the console.
	Plain,
}

/// A loaded playlist: resolved columns plus the data rows in file order.
#[derive(Debug)]
pub struct Playlist {
	pub columns: ColumnIndex,
	pub rows: Vec<ByteRecord>,
}

#[derive(Debug, Error)]
pub enum FormatterError {
	#[error("Missing playlist input. Please enter a valid format e.g.\nvdj-playlist-formatter ~/Documents/my-vdj-playlist.csv")]
	MissingArgument,

	#[error("Expected exactly one playlist path, e.g.\nvdj-playlist-formatter ~/Documents/my-vdj-playlist.csv")]
	UnexpectedArguments,

	#[error("Invalid playlist input '{0}'. Filepath must end with csv e.g.\nvdj-playlist-formatter ~/Documents/my-vdj-playlist.csv")]
	InvalidExtension(String),

	#[error("reading {row} row of CSV: no such row")]
	MissingRow { row: &'static str },

	#[error("malformed row on line {line}: no {column} at column {index} (row has {len} cells)")]
	MalformedRow {
		line: u64,
		column: &'static str,
		index: ColumnPos,
		len: usize,
	},

	#[error("invalid UTF-8 on line {line} in the {column} column")]
	InvalidUtf8 {
		line: u64,
		column: &'static str,
		#[source]
		source: Utf8Error,
	},

	#[error("Input error: {0}")]
	Input(#[source] io::Error),

	#[error("writing to {}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
