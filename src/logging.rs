// src/logging.rs
pub use log;

use std::sync::OnceLock;
use std::time::Instant;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Forward one line to the `log` facade, prefixed with the time since the first log call.
pub fn write_log(level: ::log::Level, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    ::log::log!(level, "[{elapsed}] {msg}");
}

/// Install `env_logger` as the backend. `RUST_LOG` wins over `default_level`.
#[cfg(feature = "cli")]
pub fn init(default_level: ::log::LevelFilter) {
    use std::io::Write;

    let _ = START.set(Instant::now());
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.as_str()),
    )
    .format(|buf, record| {
        let label = match record.level() {
            ::log::Level::Error => "ERROR",
            ::log::Level::Warn => "WARN ",
            ::log::Level::Info => "INFO ",
            ::log::Level::Debug => "DEBUG",
            ::log::Level::Trace => "TRACE",
        };
        writeln!(buf, "[{label}]{}", record.args())
    })
    .init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::log::Level::Error, &format!($($arg)*))
    };
}
