use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open `path` for appending. Returns true if this call installed the file;
/// later calls keep the first file.
pub fn init(path: &Path) -> bool {
    let Ok(mut logger) = LOGGER.lock() else {
        return false;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
        return true;
    }
    false
}

fn write_entry<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "[{}] {}", timestamp, message)
}

/// Append a timestamped line. A no-op until `init` has opened the file.
pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let _ = write_entry(file, message);
    }
}
