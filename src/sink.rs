//! Delivering the formatted playlist to the user.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::types::{FormatterError, OutputMode};

pub static OUTPUT_FILENAME: &str = "output.txt";

/// Overrides the program used to open the output file.
pub static OPENER_ENV: &str = "VDJ_FORMATTER_OPENER";

/// Opens a file with whatever the user has associated with it.
pub trait Launcher {
	fn open(&self, path: &Path) -> io::Result<()>;
}

/// Launcher backed by the platform's default file associations.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
	fn open(&self, path: &Path) -> io::Result<()> {
		match env::var(OPENER_ENV) {
			Ok(program) if !program.is_empty() => {
				log::debug!("Opening {} with {}", path.display(), program);
				open::with(path, program)
			}
			_ => {
				log::debug!("Opening {} with the default handler", path.display());
				open::that(path)
			}
		}
	}
}

/// Extract Output
///
/// Print plain listings to `out`; write formatted output to `path` and try to open it.
pub fn extract<L: Launcher, W: Write>(
	mode: OutputMode,
	text: &str,
	path: &Path,
	launcher: &L,
	out: &mut W,
) -> Result<()> {
	match mode {
		OutputMode::Plain => print_plain(text, out),
		OutputMode::Formatted => write_and_open(text, path, launcher, out),
	}
}

/// Print Plain
///
/// Write the listing between a banner and a success message.
pub fn print_plain<W: Write>(text: &str, out: &mut W) -> Result<()> {
	writeln!(out, "###########################################")?;
	writeln!(out, "###   Unformatted output for playlist   ###")?;
	writeln!(out, "###########################################")?;
	writeln!(out, "{}", text)?;
	writeln!(out, "Successfully listed!!")?;
	writeln!(out)?;
	Ok(())
}

/// Write And Open
///
/// Write `text` to `path`, failing if that isn't possible, then hand the file to `launcher`. Not
/// being able to open the file only changes what is reported to the user.
pub fn write_and_open<L: Launcher, W: Write>(
	text: &str,
	path: &Path,
	launcher: &L,
	out: &mut W,
) -> Result<()> {
	fs::write(path, text).map_err(|source| FormatterError::Write {
		path: path.to_path_buf(),
		source,
	})?;

	if let Err(err) = launcher.open(path) {
		log::debug!("Failed to open {}: {}", path.display(), err);
		writeln!(
			out,
			"Success, but could not open file automatically. Open '{}' in this directory manually.",
			path.display()
		)?;
		return Ok(());
	}

	let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
	writeln!(out, "Opening... {}", shown.display())?;
	writeln!(out)?;
	writeln!(out, "Successfully formatted!!")?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;
	use std::cell::RefCell;
	use std::path::PathBuf;
	use tempfile::TempDir;

	/// Records what it was asked to open.
	struct FakeLauncher {
		fail: bool,
		opened: RefCell<Vec<PathBuf>>,
	}

	impl FakeLauncher {
		fn new(fail: bool) -> Self {
			Self {
				fail,
				opened: RefCell::new(Vec::new()),
			}
		}
	}

	impl Launcher for FakeLauncher {
		fn open(&self, path: &Path) -> io::Result<()> {
			self.opened.borrow_mut().push(path.to_path_buf());
			if self.fail {
				Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
			} else {
				Ok(())
			}
		}
	}

	#[fixture]
	fn dir() -> TempDir {
		tempfile::tempdir().unwrap()
	}

	#[rstest]
	fn plain_mode_prints_and_writes_nothing(dir: TempDir) {
		let path = dir.path().join(OUTPUT_FILENAME);
		let launcher = FakeLauncher::new(false);
		let mut out = Vec::new();
		extract(OutputMode::Plain, "A - T\n", &path, &launcher, &mut out).unwrap();

		let printed = String::from_utf8(out).unwrap();
		assert!(printed.contains("Unformatted output for playlist"));
		assert!(printed.contains("A - T\n"));
		assert!(printed.contains("Successfully listed!!"));
		assert!(!path.exists());
		assert!(launcher.opened.borrow().is_empty());
	}

	#[rstest]
	fn formatted_mode_writes_and_opens(dir: TempDir) {
		let path = dir.path().join(OUTPUT_FILENAME);
		let launcher = FakeLauncher::new(false);
		let mut out = Vec::new();
		extract(OutputMode::Formatted, "line\n", &path, &launcher, &mut out).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "line\n");
		assert_eq!(*launcher.opened.borrow(), vec![path.clone()]);
		let printed = String::from_utf8(out).unwrap();
		assert!(printed.contains("Opening... "));
		assert!(printed.contains("Successfully formatted!!"));
	}

	#[rstest]
	fn open_failure_is_not_fatal(dir: TempDir) {
		let path = dir.path().join(OUTPUT_FILENAME);
		let launcher = FakeLauncher::new(true);
		let mut out = Vec::new();
		write_and_open("line\n", &path, &launcher, &mut out).unwrap();

		assert!(path.exists());
		let printed = String::from_utf8(out).unwrap();
		assert!(printed.contains("could not open file automatically"));
		assert!(!printed.contains("Successfully formatted!!"));
	}

	#[rstest]
	fn write_failure_is_fatal(dir: TempDir) {
		let path = dir.path().join("missing").join(OUTPUT_FILENAME);
		let launcher = FakeLauncher::new(false);
		let mut out = Vec::new();
		let err = write_and_open("line\n", &path, &launcher, &mut out).unwrap_err();

		assert!(matches!(
			err.downcast_ref::<FormatterError>(),
			Some(FormatterError::Write { .. })
		));
		assert!(launcher.opened.borrow().is_empty());
	}

	#[rstest]
	#[cfg(unix)]
	fn system_launcher_uses_configured_program(dir: TempDir) {
		let path = dir.path().join(OUTPUT_FILENAME);
		fs::write(&path, "line\n").unwrap();

		env::set_var(OPENER_ENV, "vdj-formatter-test-no-such-opener");
		assert!(SystemLauncher.open(&path).is_err());
		env::set_var(OPENER_ENV, "false");
		assert!(SystemLauncher.open(&path).is_err());
		env::set_var(OPENER_ENV, "true");
		assert!(SystemLauncher.open(&path).is_ok());
		env::remove_var(OPENER_ENV);
	}
}
