// ══════════════════════════════════════════════════════════════════════════════
// MACROS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Statement macros: one per level, a general `log!`, and `log_profile!` for
// scope timing. With the `inert` cargo feature enabled, `log!` and
// `log_profile!` expand to nothing at all — no record, no formatting, and no
// evaluation of their arguments. The per-level macros forward their raw
// tokens to `log!`, so disabling the two base macros silences everything.

/// Logs one line at the given level. An optional `category: expr,` prefix
/// adds a `[category]` segment to the header.
///
/// ```
/// # use quill::{log, Level};
/// log!(Level::Info, "listening on port {}", 8080);
/// log!(Level::Debug, category: "net", "handshake took {}ms", 12);
/// ```
#[cfg(not(feature = "inert"))]
#[macro_export]
macro_rules! log {
	($level:expr, category: $category:expr, $($arg:tt)+) => {{
		let _ = $crate::Record::with_category($level, $category)
			.append(::core::format_args!($($arg)+));
	}};
	($level:expr, $($arg:tt)+) => {{
		let _ = $crate::Record::new($level).append(::core::format_args!($($arg)+));
	}};
}

#[cfg(feature = "inert")]
#[macro_export]
macro_rules! log {
	($($arg:tt)*) => {};
}

/// Times the enclosing scope: logs `START` here and `FINISH`/`EXCEPTION!`
/// when the scope exits. The guard it binds lives until the end of the
/// enclosing block.
#[cfg(not(feature = "inert"))]
#[macro_export]
macro_rules! log_profile {
	() => {
		let _scope_timer = $crate::ScopeTimer::new("");
	};
	($tag:expr) => {
		let _scope_timer = $crate::ScopeTimer::new($tag);
	};
}

#[cfg(feature = "inert")]
#[macro_export]
macro_rules! log_profile {
	($($arg:tt)*) => {};
}

/// Logs one line at Trace level.
#[macro_export]
macro_rules! log_trace {
	($($arg:tt)+) => { $crate::log!($crate::Level::Trace, $($arg)+) };
}

/// Logs one line at Debug level.
#[macro_export]
macro_rules! log_debug {
	($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

/// Logs one line at Info level.
#[macro_export]
macro_rules! log_info {
	($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

/// Logs one line at Notice level.
#[macro_export]
macro_rules! log_notice {
	($($arg:tt)+) => { $crate::log!($crate::Level::Notice, $($arg)+) };
}

/// Logs one line at Warning level.
#[macro_export]
macro_rules! log_warning {
	($($arg:tt)+) => { $crate::log!($crate::Level::Warning, $($arg)+) };
}

/// Logs one line at Error level.
#[macro_export]
macro_rules! log_error {
	($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}

/// Logs one line at Critical level.
#[macro_export]
macro_rules! log_critical {
	($($arg:tt)+) => { $crate::log!($crate::Level::Critical, $($arg)+) };
}

/// Logs one line at Alert level.
#[macro_export]
macro_rules! log_alert {
	($($arg:tt)+) => { $crate::log!($crate::Level::Alert, $($arg)+) };
}

/// Logs one line at Emergency level.
#[macro_export]
macro_rules! log_emergency {
	($($arg:tt)+) => { $crate::log!($crate::Level::Emergency, $($arg)+) };
}

/// Logs one line at Profile level.
#[macro_export]
macro_rules! log_profiling {
	($($arg:tt)+) => { $crate::log!($crate::Level::Profile, $($arg)+) };
}
