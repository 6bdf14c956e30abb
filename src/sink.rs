// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The diagnostic output stream. All record emission funnels through one
// process-wide mutex-guarded sink, so a fully assembled line is always written
// as a single unit — concurrent threads can never interleave partial lines.
// The default sink is stderr; `set_sink` swaps in another destination (used by
// the test suite to capture output).

use std::io::Write;
use std::sync::{LazyLock, Mutex};

/// Destination for finished log lines.
///
/// `line` arrives fully assembled, including the trailing newline, and must be
/// written as one unit. Write failures are the sink's to swallow — logging is
/// best-effort and emission may run during unwinding, so implementations must
/// not panic.
pub trait Sink: Send {
	fn write(&mut self, line: &str);
}

/// Writes each line to stderr with a single `write_all` call.
struct StderrSink;

impl Sink for StderrSink {
	fn write(&mut self, line: &str) {
		let mut stderr = std::io::stderr().lock();
		let _ = stderr.write_all(line.as_bytes());
	}
}

static SINK: LazyLock<Mutex<Box<dyn Sink>>> =
	LazyLock::new(|| Mutex::new(Box::new(StderrSink)));

/// Replaces the process-wide sink. One sink is active at a time.
pub fn set_sink(sink: Box<dyn Sink>) {
	*lock() = sink;
}

/// Restores the default stderr sink.
pub fn reset_sink() {
	*lock() = Box::new(StderrSink);
}

/// Hands one finished line to the current sink while holding the global lock.
pub(crate) fn emit(line: &str) {
	lock().write(line);
}

// A sink poisoned by a panicking writer is still usable; recover the guard
// rather than propagate, since emit() runs from destructors during unwinding.
fn lock() -> std::sync::MutexGuard<'static, Box<dyn Sink>> {
	match SINK.lock() {
		Ok(guard) => guard,
		Err(poisoned) => poisoned.into_inner(),
	}
}
