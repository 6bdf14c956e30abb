// Shared test plumbing: a capturing sink plus a lock that serializes tests
// around the process-wide sink and the global color override.

use std::sync::{Arc, Mutex, MutexGuard};

use quill::Sink;

static SINK_ACCESS: Mutex<()> = Mutex::new(());

/// Collects emitted lines into a shared string buffer.
pub struct Capture(Arc<Mutex<String>>);

impl Sink for Capture {
	fn write(&mut self, line: &str) {
		self.0.lock().unwrap().push_str(line);
	}
}

/// Installs a capturing sink and returns its buffer together with the guard
/// that keeps other tests away from the global sink. Hold the guard for the
/// whole test; call `quill::reset_sink()` before it drops.
pub fn capture() -> (Arc<Mutex<String>>, MutexGuard<'static, ()>) {
	let guard = match SINK_ACCESS.lock() {
		Ok(guard) => guard,
		Err(poisoned) => poisoned.into_inner(),
	};
	let buffer = Arc::new(Mutex::new(String::new()));
	quill::set_sink(Box::new(Capture(buffer.clone())));
	(buffer, guard)
}

/// Snapshot of everything captured so far.
pub fn drain(buffer: &Arc<Mutex<String>>) -> String {
	buffer.lock().unwrap().clone()
}
