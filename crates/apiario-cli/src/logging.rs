//! Logger setup.
//!
//! Records are formatted as `<timestamp> - <LEVEL> - <message>` and written
//! both to an append-only log file and to stderr. The filter comes from
//! `RUST_LOG` and defaults to `info`.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use jiff::Zoned;

const DEFAULT_FILTER: &str = "info";

/// Writes everything to the log file and mirrors it on stderr.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

/// Installs the process-wide logger. Must be called once, before the first
/// log record is emitted.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    builder()
        .target(Target::Pipe(Box::new(Tee { file })))
        .try_init()
        .context("Failed to install logger")
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            Zoned::now().strftime("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    builder
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_tee_appends_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("apiario.log");
        fs::write(&path, "earlier line\n").expect("Failed to seed log file");

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .expect("Failed to open log file");
        let mut tee = Tee { file };
        tee.write_all(b"2024-01-01 00:00:00 - INFO - Connected\n")
            .expect("Failed to write");
        tee.flush().expect("Failed to flush");

        let contents = fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(
            contents,
            "earlier line\n2024-01-01 00:00:00 - INFO - Connected\n"
        );
    }
}
