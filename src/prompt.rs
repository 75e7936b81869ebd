//! Interactive choice of output mode.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::types::{FormatterError, OutputMode};

static BANNER: &str = "\
#####################################################
###   WELCOME TO MULAN'S 3DX PLAYLIST FORMATTER   ###
#####################################################";

/// Choose Mode
///
/// Print the welcome banner to `output` and read choices from `input` until a valid one is
/// given. Running out of input before that is an error.
pub fn choose_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<OutputMode> {
	writeln!(output)?;
	writeln!(output, "{}", BANNER)?;
	writeln!(output)?;
	writeln!(
		output,
		"Would you like your playlist formatted for 3DX or a plain list (e.g. sharing on Discord)?"
	)?;
	writeln!(output, "1 - Formatted for 3DX (default)")?;
	writeln!(output, "2 - Plain list")?;
	writeln!(output)?;

	loop {
		let choice = read_choice(input, output, "Your choice")?;
		match parse_choice(&choice) {
			Some(mode) => {
				log::debug!("Chose {:?}", mode);
				writeln!(output)?;
				return Ok(mode);
			}
			None => writeln!(output, "WARNING: Invalid input. Try again with 1 or 2...")?,
		}
	}
}

fn read_choice<R: BufRead, W: Write>(
	input: &mut R,
	output: &mut W,
	prompt: &str,
) -> Result<String> {
	write!(output, "{}: ", prompt)?;
	output.flush()?;

	let mut line = String::new();
	let n = input.read_line(&mut line).map_err(FormatterError::Input)?;
	if n == 0 {
		return Err(FormatterError::Input(std::io::ErrorKind::UnexpectedEof.into()).into());
	}
	Ok(clean_input(&line))
}

/// Clean Input
///
/// Strip line endings and surrounding whitespace, and lowercase what remains.
pub fn clean_input(line: &str) -> String {
	line.replace('\n', "").to_lowercase().trim().to_string()
}

/// Parse Choice
///
/// `1` or nothing at all picks the formatted output, `2` the plain listing.
pub fn parse_choice(choice: &str) -> Option<OutputMode> {
	match choice {
		"1" | "" => Some(OutputMode::Formatted),
		"2" => Some(OutputMode::Plain),
		_ => None,
	}
}
