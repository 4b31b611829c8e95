// ══════════════════════════════════════════════════════════════════════════════
// CONTAINER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Opens a candidate with Lofty and keeps the concrete file type around, so the
// strategies can look at ID3v2 frames, picture blocks, and MP4 atoms directly
// instead of the lossy generic tag. The reader lives only inside `open`, so the
// file handle is released on every path, success or not.

use std::io::Seek;
use std::path::Path;
use lofty::config::ParseOptions;
use lofty::file::{AudioFile, FileType};
use lofty::flac::FlacFile;
use lofty::iff::wav::WavFile;
use lofty::mp4::Mp4File;
use lofty::mpeg::MpegFile;
use lofty::ogg::{OggPictureStorage, OpusFile, SpeexFile, VorbisFile};
use lofty::probe::Probe;
use crate::error::Result;
use crate::strategy::TagView;

pub enum Container {
	Mpeg(MpegFile),
	Flac(FlacFile),
	Mp4(Mp4File),
	Vorbis(VorbisFile),
	Opus(OpusFile),
	Speex(SpeexFile),
	Wav(WavFile),
}

impl Container {
	/// Parses the file at `path`.
	///
	/// Returns `Ok(None)` when Lofty can't tell what the file is, or when it is a
	/// format we don't look for covers in. Parse failures are errors.
	pub fn open(path: &Path) -> Result<Option<Self>> {
		let probe = Probe::open(path)?.guess_file_type()?;
		let Some(file_type) = probe.file_type() else {
			return Ok(None);
		};

		let mut reader = probe.into_inner();
		reader.rewind()?;
		let options = ParseOptions::new().read_properties(false);

		let container = match file_type {
			FileType::Mpeg => Container::Mpeg(MpegFile::read_from(&mut reader, options)?),
			FileType::Flac => Container::Flac(FlacFile::read_from(&mut reader, options)?),
			FileType::Mp4 => Container::Mp4(Mp4File::read_from(&mut reader, options)?),
			FileType::Vorbis => Container::Vorbis(VorbisFile::read_from(&mut reader, options)?),
			FileType::Opus => Container::Opus(OpusFile::read_from(&mut reader, options)?),
			FileType::Speex => Container::Speex(SpeexFile::read_from(&mut reader, options)?),
			FileType::Wav => Container::Wav(WavFile::read_from(&mut reader, options)?),
			_ => return Ok(None),
		};

		Ok(Some(container))
	}

	pub fn file_type(&self) -> FileType {
		match self {
			Container::Mpeg(_) => FileType::Mpeg,
			Container::Flac(_) => FileType::Flac,
			Container::Mp4(_) => FileType::Mp4,
			Container::Vorbis(_) => FileType::Vorbis,
			Container::Opus(_) => FileType::Opus,
			Container::Speex(_) => FileType::Speex,
			Container::Wav(_) => FileType::Wav,
		}
	}

	/// The tag structures this container exposes to the strategies.
	pub fn view(&self) -> TagView<'_> {
		match self {
			Container::Mpeg(file) => TagView { frames: file.id3v2(), ..TagView::default() },
			Container::Flac(file) => TagView { frames: file.id3v2(), pictures: file.pictures(), atoms: None },
			Container::Mp4(file) => TagView { atoms: file.ilst(), ..TagView::default() },
			Container::Vorbis(file) => TagView { pictures: file.vorbis_comments().pictures(), ..TagView::default() },
			Container::Opus(file) => TagView { pictures: file.vorbis_comments().pictures(), ..TagView::default() },
			Container::Speex(file) => TagView { pictures: file.vorbis_comments().pictures(), ..TagView::default() },
			Container::Wav(file) => TagView { frames: file.id3v2(), ..TagView::default() },
		}
	}
}
