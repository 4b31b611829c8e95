// ══════════════════════════════════════════════════════════════════════════════
// WRITER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Decodes an embedded picture (whatever format the image crate can sniff) and
// re-encodes it as PNG. Encoding happens in memory first, so a picture that
// fails to decode never touches the output file.

use std::io::Cursor;
use std::path::Path;
use image::ImageFormat;
use crate::error::Result;
use crate::io::write_sealed;

#[derive(Debug, PartialEq, Eq)]
pub struct SavedImage {
	pub width: u32,
	pub height: u32,
	pub bytes: usize,
	pub crc: u32,
}

/// Decodes `blob` and saves it as PNG at `output`, overwriting any existing file.
pub fn save_png(blob: &[u8], output: &Path) -> Result<SavedImage> {
	let image = image::load_from_memory(blob)?;

	let mut png = Cursor::new(Vec::new());
	image.write_to(&mut png, ImageFormat::Png)?;
	let png = png.into_inner();

	let crc = write_sealed(output, &png)?;

	Ok(SavedImage {
		width: image.width(),
		height: image.height(),
		bytes: png.len(),
		crc,
	})
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use image::{DynamicImage, Rgb, RgbImage};

	pub fn encoded(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
		let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 120]));
		let mut out = Cursor::new(Vec::new());
		DynamicImage::ImageRgb8(img).write_to(&mut out, format).unwrap();
		out.into_inner()
	}

	#[test]
	fn jpeg_is_reencoded_as_png() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("icon.png");

		let saved = save_png(&encoded(ImageFormat::Jpeg, 6, 4), &output).unwrap();

		assert_eq!((saved.width, saved.height), (6, 4));
		let written = std::fs::read(&output).unwrap();
		assert_eq!(written.len(), saved.bytes);
		assert_eq!(image::guess_format(&written).unwrap(), ImageFormat::Png);
		assert_eq!(crc32fast::hash(&written), saved.crc);
	}

	#[test]
	fn same_input_gives_same_bytes() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("icon.png");
		let blob = encoded(ImageFormat::Png, 5, 5);

		let first = save_png(&blob, &output).unwrap();
		let first_bytes = std::fs::read(&output).unwrap();
		let second = save_png(&blob, &output).unwrap();

		assert_eq!(first.crc, second.crc);
		assert_eq!(first_bytes, std::fs::read(&output).unwrap());
	}

	#[test]
	fn garbage_fails_without_touching_output() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("icon.png");
		std::fs::write(&output, b"previous").unwrap();

		assert!(save_png(b"not an image at all", &output).is_err());
		assert_eq!(std::fs::read(&output).unwrap(), b"previous");
	}
}
