// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped console logging with different severity levels.
// Every user-facing message of a run (no files, skipped file, cover saved, no
// cover) goes through here.

use colored::*;
use chrono::Local;

pub enum LogLevel {
	Info,
	Success,
	Warning,
	Error,
}

pub fn log(level: LogLevel, message: &str) {
	let timestamp = Local::now().format("%H:%M:%S").to_string();
	let prefix = match level {
		LogLevel::Info => "𝒊 ".blue().bold(),
		LogLevel::Success => "✔ ".green().bold(),
		LogLevel::Warning => "⚠ ".yellow().bold(),
		LogLevel::Error => "✘ ".red().bold(),
	};

	println!("[{}] {} {}", timestamp.dimmed(), prefix, message);
}
