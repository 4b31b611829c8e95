// ══════════════════════════════════════════════════════════════════════════════
// STRATEGY MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The three ways a cover can be stored, tried in a fixed order:
//   1. Tag map:      ID3v2 frames, first attached picture (APIC)
//   2. Picture list: FLAC PICTURE blocks / Vorbis comment pictures, first entry
//   3. Atom lookup:  MP4 `covr` atom, first data element
// The first strategy that yields non-empty bytes wins. The rest are not tried.

use std::fmt;
use lofty::id3::v2::{Frame, Id3v2Tag};
use lofty::mp4::{AtomData, AtomIdent, Ilst};
use lofty::picture::{Picture, PictureInformation};
use crate::constants::COVR_ATOM;

/// Borrowed view over the tag structures a container exposes.
#[derive(Default, Clone, Copy)]
pub struct TagView<'a> {
	pub frames: Option<&'a Id3v2Tag>,
	pub pictures: &'a [(Picture, PictureInformation)],
	pub atoms: Option<&'a Ilst>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	TagMap,
	PictureList,
	AtomLookup,
}

impl Strategy {
	/// Priority order.
	pub const ORDER: [Strategy; 3] = [Strategy::TagMap, Strategy::PictureList, Strategy::AtomLookup];

	pub fn apply<'a>(self, view: &TagView<'a>) -> Option<&'a [u8]> {
		let data = match self {
			Strategy::TagMap => view.frames.and_then(from_tag_map),
			Strategy::PictureList => from_picture_list(view.pictures),
			Strategy::AtomLookup => view.atoms.and_then(from_atoms),
		};
		data.filter(|d| !d.is_empty())
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Strategy::TagMap => "attached picture frame",
			Strategy::PictureList => "picture block",
			Strategy::AtomLookup => "covr atom",
		};
		f.write_str(name)
	}
}

/// First APIC frame in tag order. Other frame kinds are passed over.
pub fn from_tag_map(tag: &Id3v2Tag) -> Option<&[u8]> {
	tag.into_iter().find_map(|frame| match frame {
		Frame::Picture(apic) => Some(apic.picture.data()),
		_ => None,
	})
}

pub fn from_picture_list(pictures: &[(Picture, PictureInformation)]) -> Option<&[u8]> {
	pictures.first().map(|(picture, _)| picture.data())
}

/// Only the first element of the `covr` atom counts, and only if it holds a picture.
pub fn from_atoms(ilst: &Ilst) -> Option<&[u8]> {
	let atom = ilst.get(&AtomIdent::Fourcc(COVR_ATOM))?;
	match atom.data().next()? {
		AtomData::Picture(picture) => Some(picture.data()),
		_ => None,
	}
}

/// Runs the strategies in priority order and returns the first hit.
pub fn find_picture<'a>(view: &TagView<'a>) -> Option<(Strategy, &'a [u8])> {
	Strategy::ORDER
		.into_iter()
		.find_map(|strategy| strategy.apply(view).map(|data| (strategy, data)))
}
