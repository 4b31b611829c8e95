// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Shared I/O utilities. Creates the output file inside a scope so the handle is
// closed on every path, and fingerprints what was written with CRC32.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use crate::error::Result;

/// Writes `bytes` to `path`, truncating any existing file. Returns the CRC32 of the bytes.
pub fn write_sealed(path: &Path, bytes: &[u8]) -> Result<u32> {
	let crc = crc32fast::hash(bytes);
	let mut writer = BufWriter::new(File::create(path)?);
	writer.write_all(bytes)?;
	writer.flush()?;
	Ok(crc)
}
