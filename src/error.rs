// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Everything that can go wrong while pulling a cover out of one candidate file.
// The Display text is what ends up in the "Skipping <file>: <reason>" warning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
	/// Listing the directory or touching the output file failed
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The file could not be parsed as an audio container
	#[error("{0}")]
	Metadata(#[from] lofty::error::LoftyError),

	/// The embedded picture could not be decoded or re-encoded
	#[error("Image error: {0}")]
	Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CoverError>;
