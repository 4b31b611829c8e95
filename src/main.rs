// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                COVERPULL                                     ║
// ║                    Album Art → icon.png in One Step                          ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Drop into a folder of music, run `coverpull`, get an `icon.png`. The tool
// looks through the folder's audio files and takes the cover art embedded in
// the first one that has any. It writes that cover out as a PNG.
//
// 📦 HOW IT WORKS
// ---------------
//   [list folder] → [.mp3 .flac .m4a .ogg .wav] → [open with Lofty]
//       → [ID3v2 APIC | picture block | MP4 covr] → [decode] → [icon.png]
//
// The first file that yields a cover ends the scan. A file that can't be read
// gets a warning and is passed over.
//
// 🛡️ GUARANTEES
// -------------
// - The output is only written once a picture has fully decoded.
// - The same input always gives the same PNG bytes (CRC32 is printed to compare).
// - Nothing else in the folder is touched.
//
// ══════════════════════════════════════════════════════════════════════════════

mod logger;
mod constants;
mod error;
mod io;
mod scan;
mod strategy;
mod container;
mod writer;
mod extract;

use std::path::{Path, PathBuf};
use clap::Parser;
use colored::*;
use crate::constants::OUTPUT_FILE;
use crate::extract::{display_name, run, Outcome, Report, TagReader};
use crate::logger::{log, LogLevel};

/// Pull the embedded cover art out of a folder of music
#[derive(Parser)]
#[command(name = "coverpull")]
#[command(version)]
#[command(about = "Extract embedded album art from the first music file that has one", long_about = None)]
struct Cli {
	/// Folder to scan for music files
	#[arg(default_value = ".")]
	dir: PathBuf,

	/// Output file name, relative to the scanned folder
	#[arg(short, long, default_value = OUTPUT_FILE)]
	output: PathBuf,
}

fn main() {
	let cli = Cli::parse();

	log(LogLevel::Info, &format!("Welcome to {}! {}", "coverpull".cyan(), "[♪ → ▣]".bold()));

	let output = cli.dir.join(&cli.output);
	match run(&cli.dir, &output, &TagReader) {
		Ok(report) => announce(&report, &cli.dir, &cli.output),
		Err(e) => {
			log(LogLevel::Error, &format!("Cannot read {}: {}", cli.dir.display(), e));
			std::process::exit(1);
		}
	}
}

fn announce(report: &Report, dir: &Path, output: &Path) {
	match &report.outcome {
		Outcome::NoCandidates => {
			log(LogLevel::Error, &format!("No music files found in {}", dir.display()));
		}
		Outcome::Saved { source, image } => {
			log(LogLevel::Success, &format!("Extracted cover from {} → {}", display_name(source), output.display()));
			log(LogLevel::Info, &format!("{}x{}, {} bytes, CRC32: {:08X}", image.width, image.height, image.bytes, image.crc));
		}
		Outcome::NoCover => {
			log(LogLevel::Error, "None of the music files has an embedded cover");
		}
	}

	if !report.skipped.is_empty() {
		log(LogLevel::Info, &format!("Checked {} file(s), skipped {} unreadable", report.visited.len(), report.skipped.len()));
	}
}
