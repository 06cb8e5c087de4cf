//! File-based logger implementation for the V5 Brain.
//!
//! Implements the [`log`] crate's facade, mirroring every record to the
//! console and to a file on the SD card. Each line carries the level, the
//! time since program start, the emitting module, and the message:
//!
//! ```text
//! INFO [1m 32s 450ms] talos::auton - Autonomous: Skills
//! WARN [1m 33s 120ms] talos::subsystems::clamp - Clamp Piston Error: ...
//! ```
//!
//! If no SD card is present the file writer is skipped and logging stays
//! console-only.

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::{FormattedDuration, format_duration};
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Path of the log file on the SD card.
const LOG_FILE: &str = "log.txt";

/// Dual console/file logger.
struct FileLogger {
    /// Buffered file writer, `None` when the SD card is absent.
    file: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl FileLogger {
    fn new() -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self { file: Mutex::new(file) }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "{} [{}] {} - {}\n",
            record.level(),
            uptime(),
            record.target(),
            record.args()
        );

        print!("{}", line);

        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut writer) = *guard {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut writer) = *guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Initializes the global logger.
///
/// Call once at program start, before any logging macros run.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(FileLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Time since the user program started, formatted for log lines.
///
/// Off-target (host tests) there is no VexOS uptime, so a fixed value
/// stands in.
fn uptime() -> FormattedDuration {
    let duration = if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(1500)
    };
    format_duration(duration)
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, debug, error, info, trace, warn};

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_all_levels() {
        super::init(LevelFilter::Trace).expect("failed to initialize logger");

        trace!("trace message");
        debug!("debug message");
        info!("info message");
        warn!("warning message");
        error!("error message");
    }
}
