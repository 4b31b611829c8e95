// ══════════════════════════════════════════════════════════════════════════════
// SCAN MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Lists a directory and keeps the entries whose name ends in one of the
// supported audio extensions (case-insensitive). Listing order is preserved as
// the OS returns it. No sorting.

use std::fs;
use std::path::{Path, PathBuf};
use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::Result;

/// Returns true if the file name, lower-cased, ends with a supported extension.
pub fn is_supported(name: &str) -> bool {
	let lower = name.to_lowercase();
	SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Lists `dir` and returns the candidate paths in listing order.
pub fn find_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut candidates = Vec::new();
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		if is_supported(&entry.file_name().to_string_lossy()) {
			candidates.push(entry.path());
		}
	}
	Ok(candidates)
}
