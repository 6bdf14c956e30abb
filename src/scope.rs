// ══════════════════════════════════════════════════════════════════════════════
// SCOPE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The scope timer: a guard that brackets a lexical block with a pair of
// Profile-level records. Construction logs START with the call-site location
// and takes a monotonic start instant; dropping the guard logs FINISH (or
// EXCEPTION! when the scope is exiting through an active panic) with the
// elapsed time in milliseconds. The guard is movable but not copyable, so
// each instance emits its pair exactly once.

use std::panic::Location;
use std::time::Instant;

use crate::level::Level;
use crate::record::Record;

/// Times a scope and logs its entry and exit. Create it at the top of a
/// block (usually via `log_profile!`) and let it drop with the block.
pub struct ScopeTimer {
	tag: String,
	file: &'static str,
	line: u32,
	start: Instant,
}

impl ScopeTimer {
	/// Starts the timer and logs `START <tag> @ <file>:<line>`. The location
	/// is the caller's, even through a wrapping macro or factory.
	#[track_caller]
	pub fn new(tag: impl Into<String>) -> Self {
		let location = Location::caller();
		let timer = ScopeTimer {
			tag: tag.into(),
			file: location.file(),
			line: location.line(),
			start: Instant::now(),
		};
		let _ = Record::new(Level::Profile).append(format_args!(
			"START {} @ {}:{}",
			timer.tag, timer.file, timer.line
		));
		timer
	}
}

impl Drop for ScopeTimer {
	// Runs on every exit path, including unwinding, and must not panic
	// itself — a secondary panic here would abort and mask the original.
	fn drop(&mut self) {
		let elapsed_us = self.start.elapsed().as_micros();
		let duration_ms = elapsed_us as f64 / 1000.0;
		let leave = if std::thread::panicking() {
			"EXCEPTION!"
		} else {
			"FINISH"
		};
		let _ = Record::new(Level::Profile).append(format_args!(
			"{} {} ({:.3}ms) @ {}:{}",
			leave, self.tag, duration_ms, self.file, self.line
		));
	}
}
