// ══════════════════════════════════════════════════════════════════════════════
// RECORD MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The record builder: accumulates exactly one log line and emits it when it
// goes out of scope. The header (timestamp, colored level label, optional
// category) is pre-rendered at construction; the caller appends any number of
// renderable values after it. Dropping the record appends a color reset and
// hands the whole line to the sink in one piece — partial lines are never
// written, and emission cannot fail the calling code path.

use std::fmt::{Display, Write};

use chrono::Local;
use colored::control::SHOULD_COLORIZE;

use crate::level::Level;
use crate::sink;

/// End-of-line color reset, matching the resets `colored` emits.
const RESET: &str = "\x1b[0m";

/// Written in place of a value whose `Display` impl reports an error.
const RENDER_FALLBACK: &str = "<unrenderable>";

/// One log line under construction. Emits itself on drop.
pub struct Record {
	line: String,
}

impl Record {
	/// Starts a record with no category segment.
	pub fn new(level: Level) -> Self {
		Self::with_category(level, "")
	}

	/// Starts a record; a non-empty category adds a `[category]` segment
	/// after the level bracket.
	pub fn with_category(level: Level, category: &str) -> Self {
		let mut line = String::with_capacity(96);
		let _ = write!(line, "[{}][{}]", timestamp(), level.paint());
		if !category.is_empty() {
			let _ = write!(line, "[{}]", category);
		}
		line.push(' ');
		Record { line }
	}

	/// Appends any renderable value to the line. No separator is inserted
	/// between appends; spacing within one statement is the caller's job.
	pub fn append<T: Display>(mut self, value: T) -> Self {
		if write!(self.line, "{}", value).is_err() {
			self.line.push_str(RENDER_FALLBACK);
		}
		self
	}
}

impl Drop for Record {
	fn drop(&mut self) {
		if SHOULD_COLORIZE.should_colorize() {
			self.line.push_str(RESET);
		}
		self.line.push('\n');
		sink::emit(&self.line);
	}
}

/// Local wall-clock time as `HH:MM:SS.mmm`, milliseconds zero-padded to
/// exactly 3 digits.
fn timestamp() -> String {
	Local::now().format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timestamp_millis_are_three_digits() {
		let ts = timestamp();
		// HH:MM:SS.mmm
		assert_eq!(ts.len(), 12);
		assert_eq!(&ts[8..9], ".");
		assert!(ts[9..12].chars().all(|c| c.is_ascii_digit()));
	}
}
