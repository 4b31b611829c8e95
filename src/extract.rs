// ══════════════════════════════════════════════════════════════════════════════
// EXTRACT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Walks the candidates in listing order and stops at the first one whose cover
// decodes and saves. Each candidate is handled on its own. A parse or decode
// error becomes a warning and the scan moves on. A candidate whose picture fails
// to decode is abandoned as a whole, and its other strategies are not retried.
// The outcome goes back to the caller as a Report.

use std::fmt;
use std::path::{Path, PathBuf};
use crate::container::Container;
use crate::error::Result;
use crate::logger::{log, LogLevel};
use crate::scan::find_candidates;
use crate::strategy::find_picture;
use crate::writer::{save_png, SavedImage};

/// Something that can pull raw cover bytes out of a candidate file.
pub trait CoverSource {
	/// `Ok(None)` means the file was readable but carries no cover.
	fn read_cover(&self, path: &Path) -> Result<Option<Vec<u8>>>;
}

/// Lofty-backed source: opens the container and runs the strategies.
pub struct TagReader;

impl CoverSource for TagReader {
	fn read_cover(&self, path: &Path) -> Result<Option<Vec<u8>>> {
		let Some(container) = Container::open(path)? else {
			return Ok(None);
		};
		Ok(find_picture(&container.view()).map(|(strategy, data)| {
			log(LogLevel::Info, &format!("Found {} in {} ({:?})", strategy, display_name(path), container.file_type()));
			data.to_vec()
		}))
	}
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
	NoCandidates,
	Saved { source: PathBuf, image: SavedImage },
	NoCover,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Skipped {
	pub path: PathBuf,
	pub reason: String,
}

impl fmt::Display for Skipped {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Skipping {}: {}", display_name(&self.path), self.reason)
	}
}

#[derive(Debug)]
pub struct Report {
	pub outcome: Outcome,
	pub visited: Vec<PathBuf>,
	pub skipped: Vec<Skipped>,
}

/// Scans `dir` and extracts the first cover found into `output`.
pub fn run<S: CoverSource>(dir: &Path, output: &Path, source: &S) -> Result<Report> {
	let candidates = find_candidates(dir)?;
	if candidates.is_empty() {
		return Ok(Report { outcome: Outcome::NoCandidates, visited: Vec::new(), skipped: Vec::new() });
	}

	log(LogLevel::Info, &format!("Scanning {} music file(s) in {}", candidates.len(), dir.display()));
	Ok(extract_first(&candidates, output, source))
}

/// Tries `candidates` in order until one yields a cover that saves.
pub fn extract_first<S: CoverSource>(candidates: &[PathBuf], output: &Path, source: &S) -> Report {
	let mut visited = Vec::new();
	let mut skipped = Vec::new();

	for path in candidates {
		visited.push(path.clone());

		match try_candidate(path, output, source) {
			Ok(Some(image)) => {
				return Report {
					outcome: Outcome::Saved { source: path.clone(), image },
					visited,
					skipped,
				};
			}
			Ok(None) => {}
			Err(e) => {
				let skip = Skipped { path: path.clone(), reason: e.to_string() };
				log(LogLevel::Warning, &skip.to_string());
				skipped.push(skip);
			}
		}
	}

	Report { outcome: Outcome::NoCover, visited, skipped }
}

fn try_candidate<S: CoverSource>(path: &Path, output: &Path, source: &S) -> Result<Option<SavedImage>> {
	let Some(blob) = source.read_cover(path)? else {
		return Ok(None);
	};
	Ok(Some(save_png(&blob, output)?))
}

pub fn display_name(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}
