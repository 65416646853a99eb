// Debug logging for rallypong
// The TUI owns stdout, so tracing output goes to a file enabled by --debug

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

/// Location of the debug log
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("rallypong-debug.log")
}

/// Initialize debug logging to file
///
/// # Behavior
/// - If enabled=false: no subscriber is installed and tracing macros are no-ops
/// - If enabled=true: truncates the log file, writes a header and routes
///   all events at DEBUG and above into it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== rallypong debug log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
