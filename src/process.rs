//! Playlist loading, column resolution and formatting.

use std::io::{BufReader, Read};
use std::str;

use anyhow::{Context, Result};
use csv::ByteRecord;

use crate::types::{
	ColumnIndex, ColumnPos, FormatterError, OutputMode, Playlist, ARTIST_HEADER, TITLE_HEADER,
};

/// Load Playlist
///
/// Read a VirtualDJ export from `input` (trait bound `std::io::Read`). The first record is
/// discarded, the second is the header used to resolve columns, and every remaining record is
/// kept as a data row. Records may have differing numbers of cells. Cells are kept as raw bytes
/// so that text in another encoding only matters if it ends up in the output.
pub fn load_playlist<R: Read>(input: &mut R) -> Result<Playlist> {
	let buffered = BufReader::new(input);
	let mut rdr = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(buffered);
	let mut records = rdr.byte_records();

	let first = records
		.next()
		.ok_or(FormatterError::MissingRow { row: "first" })?
		.context("reading first row of CSV")?;
	log::debug!("Skipping first row {:?}", first);

	let header = records
		.next()
		.ok_or(FormatterError::MissingRow { row: "second" })?
		.context("reading second row of CSV")?;
	let columns = resolve_columns(&header);

	let rows = records
		.collect::<Result<Vec<ByteRecord>, csv::Error>>()
		.context("reading playlist rows")?;
	log::debug!("Loaded {} tracks", rows.len());

	Ok(Playlist { columns, rows })
}

/// Resolve Columns
///
/// Find the `Artist` and `Title` cells in the header row. Matching is exact and case sensitive;
/// a name that isn't present falls back to its position in the default two-column layout.
pub fn resolve_columns(header: &ByteRecord) -> ColumnIndex {
	let defaults = ColumnIndex::default();
	let columns = ColumnIndex {
		artist: find_column(header, ARTIST_HEADER).unwrap_or(defaults.artist),
		title: find_column(header, TITLE_HEADER).unwrap_or(defaults.title),
	};
	log::debug!("Resolved {:?} from header {:?}", columns, header);
	columns
}

fn find_column(header: &ByteRecord, name: &str) -> Option<ColumnPos> {
	let pos = header.iter().position(|cell| cell == name.as_bytes());
	if pos.is_none() {
		log::debug!("No '{}' column in header, using default", name);
	}
	pos
}

/// Format Track
///
/// Render a single artist/title pair in the given mode, without a trailing newline.
pub fn format_track(mode: OutputMode, artist: &str, title: &str) -> String {
	match mode {
		OutputMode::Plain => format!("{} - {}", artist, title),
		OutputMode::Formatted => format!("/me ♬♪♫ now playing... ★★┊{} - {} ┊★★", artist, title),
	}
}

/// Format Playlist
///
/// Render every row of the playlist, one `\n` terminated line per row in file order. Fails on
/// the first row that is too short to hold the resolved artist or title column, or whose artist
/// or title isn't valid UTF-8.
pub fn format_playlist(playlist: &Playlist, mode: OutputMode) -> Result<String> {
	let mut output = String::new();
	for row in playlist.rows.iter() {
		let artist = cell(row, playlist.columns.artist, ARTIST_HEADER)?;
		let title = cell(row, playlist.columns.title, TITLE_HEADER)?;
		let line = format_track(mode, artist, title);
		log::debug!("{}", line);
		output.push_str(&line);
		output.push('\n');
	}
	Ok(output)
}

fn cell<'a>(
	row: &'a ByteRecord,
	index: ColumnPos,
	column: &'static str,
) -> Result<&'a str, FormatterError> {
	let line = row.position().map_or(0, |pos| pos.line());
	let bytes = row.get(index).ok_or(FormatterError::MalformedRow {
		line,
		column,
		index,
		len: row.len(),
	})?;
	str::from_utf8(bytes).map_err(|source| FormatterError::InvalidUtf8 {
		line,
		column,
		source,
	})
}
