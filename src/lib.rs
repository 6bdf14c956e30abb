// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                  QUILL                                       ║
// ║                  Colorized Console Logging & Scope Timing                    ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Quill is a minimal structured console logger. Every statement produces one
// timestamped, severity-tagged, colorized line on stderr, written atomically
// so multi-threaded programs never tear a line. A scope timer brackets any
// block with START/FINISH (or EXCEPTION!) profiling records.
//
// 📦 HOW IT WORKS
// ---------------
// A log statement builds a `Record`: the header `[HH:MM:SS.mmm][ LEVEL ]` is
// pre-rendered at construction, values are appended to its buffer, and the
// finished line is flushed to the shared sink when the record drops. The
// `ScopeTimer` guard reuses the same mechanism twice — once on entry, once on
// every exit path of its scope, panic included.
//
// 🔇 INERT BUILDS
// ---------------
// Enabling the `inert` cargo feature compiles every `log!`/`log_profile!`
// statement away entirely: no output, no formatting, and no evaluation of
// arguments. Typical setups enable it for release builds.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

mod level;
mod record;
mod scope;
mod sink;

mod macros;

pub use level::Level;
pub use record::Record;
pub use scope::ScopeTimer;
pub use sink::{Sink, reset_sink, set_sink};
