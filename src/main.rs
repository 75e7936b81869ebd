//! Program entrypoint and argument parsing.

use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vdj_playlist_formatter::sink::{SystemLauncher, OUTPUT_FILENAME};
use vdj_playlist_formatter::types::FormatterError;
use vdj_playlist_formatter::{process, prompt, sink};

/// Parse Arg
///
/// Parse a single positional argument naming a `.csv` file, returning an error if anything other
/// than that is present. The extension is checked, case sensitively, before the file is touched.
/// Paths don't need to be valid Unicode.
fn parse_arg() -> Result<PathBuf, FormatterError> {
	let mut args = env::args_os();
	if args.len() > 2 {
		return Err(FormatterError::UnexpectedArguments);
	}
	let path = PathBuf::from(args.nth(1).ok_or(FormatterError::MissingArgument)?);
	if path.extension().map_or(true, |ext| ext != "csv") {
		return Err(FormatterError::InvalidExtension(path.display().to_string()));
	}
	Ok(path)
}

fn main() -> Result<()> {
	env_logger::init();
	let filepath = parse_arg()?;
	let mut input =
		File::open(&filepath).with_context(|| format!("opening {}", filepath.display()))?;
	let playlist = process::load_playlist(&mut input)?;
	drop(input);

	let mut stdout = io::stdout();
	let mode = prompt::choose_mode(&mut io::stdin().lock(), &mut stdout)?;
	let text = process::format_playlist(&playlist, mode)?;
	sink::extract(
		mode,
		&text,
		Path::new(OUTPUT_FILENAME),
		&SystemLauncher,
		&mut stdout,
	)
}
