use std::io;
use std::path::Path;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "SDLC_LOG";

fn level_from_markers(dir: &Path) -> Option<LevelFilter> {
    if dir.join("trace").exists() {
        return Some(LevelFilter::Trace);
    }
    if dir.join("debug").exists() {
        return Some(LevelFilter::Debug);
    }
    None
}

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Warn, // stdout is the program's output, keep stderr quiet
    }
}

fn logging_level() -> LevelFilter {
    // Marker files next to the executable win over the environment.
    if let Some(level) = std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .and_then(level_from_markers)
    {
        return level;
    }
    level_from_env(std::env::var(LOG_ENV).ok().as_deref())
}

/// Routes `log` records to stderr; stdout stays reserved for encoded stages.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter == LevelFilter::Info {
                out.finish(format_args!(
                    "[{}]: {} <{}:{}>",
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_from_env() {
        assert_eq!(level_from_env(Some("trace")), LevelFilter::Trace);
        assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_env(Some("info")), LevelFilter::Info);
        assert_eq!(level_from_env(Some("error")), LevelFilter::Error);
        assert_eq!(level_from_env(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_env(Some("verbose")), LevelFilter::Warn);
        assert_eq!(level_from_env(None), LevelFilter::Warn);
    }

    #[test]
    fn test_level_from_markers() {
        let dir = TempDir::new().unwrap();
        assert_eq!(level_from_markers(dir.path()), None);

        std::fs::write(dir.path().join("debug"), b"").unwrap();
        assert_eq!(level_from_markers(dir.path()), Some(LevelFilter::Debug));

        // trace takes precedence when both markers exist
        std::fs::write(dir.path().join("trace"), b"").unwrap();
        assert_eq!(level_from_markers(dir.path()), Some(LevelFilter::Trace));
    }
}
