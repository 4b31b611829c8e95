// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines application-wide constants used throughout the codebase.
// - SUPPORTED_EXTENSIONS: lowercase suffixes that make a file a scan candidate
// - OUTPUT_FILE: default name of the extracted cover
// - COVR_ATOM: MP4 ilst atom holding cover art

pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".mp3", ".flac", ".m4a", ".ogg", ".wav"];

pub const OUTPUT_FILE: &str = "icon.png";

pub const COVR_ATOM: [u8; 4] = *b"covr";
