// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The severity model: a closed, ordered set of log levels, each with a fixed
// 9-character display label and a fixed terminal color. The mapping is total
// and immutable — the exhaustive matches below are checked by the compiler,
// so an unmapped variant cannot exist.

use colored::*;

/// Severity of a log record, in ascending order. `Profile` is the dedicated
/// channel for scope-timing records and sorts after everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	Trace,
	Debug,
	Info,
	Notice,
	Warning,
	Error,
	Critical,
	Alert,
	Emergency,
	Profile,
}

impl Level {
	/// Every variant, in severity order. Handy for exhaustive iteration.
	pub const ALL: [Level; 10] = [
		Level::Trace,
		Level::Debug,
		Level::Info,
		Level::Notice,
		Level::Warning,
		Level::Error,
		Level::Critical,
		Level::Alert,
		Level::Emergency,
		Level::Profile,
	];

	/// Fixed-width display label, always exactly 9 characters so log columns
	/// line up.
	pub const fn label(self) -> &'static str {
		match self {
			Level::Trace => "  TRACE  ",
			Level::Debug => "  DEBUG  ",
			Level::Info => "  INFO   ",
			Level::Notice => " NOTICE  ",
			Level::Warning => " WARNING ",
			Level::Error => "  ERROR  ",
			Level::Critical => "CRITICAL ",
			Level::Alert => "  ALERT  ",
			Level::Emergency => "EMERGENCY",
			Level::Profile => "PROFILING",
		}
	}

	/// The label wrapped in this level's fixed color style.
	pub fn paint(self) -> ColoredString {
		let label = self.label();
		match self {
			Level::Trace => label.bright_white().bold(),
			Level::Debug => label.bright_blue().bold(),
			Level::Info => label.bright_green().bold(),
			Level::Notice => label.bright_cyan().bold(),
			Level::Warning => label.bright_yellow().bold(),
			Level::Error => label.bright_red().bold(),
			Level::Critical => label.bright_magenta().bold(),
			Level::Alert => label.on_red().bold(),
			Level::Emergency => label.bright_white().on_red().bold(),
			Level::Profile => label.bright_cyan().bold(),
		}
	}
}
