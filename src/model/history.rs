use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use survivalsim_core::Result;
use survivalsim_data::LiveEvent;

/// Appends simulation events to a JSONL file, one event per line.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    written: u64,
}

impl HistoryLogger {
    pub fn new_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
            written: 0,
        })
    }

    /// A logger that accepts events and discards them.
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            path: None,
            written: 0,
        }
    }

    pub fn log_event(&mut self, event: &LiveEvent) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{}", json)?;
            self.written += 1;
        }
        Ok(())
    }

    /// Writes a batch of events and flushes once at the end.
    pub fn log_events(&mut self, events: &[LiveEvent]) -> Result<()> {
        for event in events {
            self.log_event(event)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            file.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of events written since creation.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl Drop for HistoryLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(error = %e, "Failed to flush event log");
        }
    }
}
