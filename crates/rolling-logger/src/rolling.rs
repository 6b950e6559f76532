//! Size-based rolling log file
//!
//! `<name>.log` is the live file. When a write would push it past the size
//! limit it is renamed to `<name>.log.1`, older backups shift up by one, and
//! anything beyond the backup limit is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::buffer::LineBuffer;

#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RollingFile {
    pub fn open(
        dir: &Path,
        app_name: &str,
        max_bytes: u64,
        max_backups: usize,
    ) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{app_name}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            written,
            max_bytes,
            max_backups,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one formatted chunk, rolling first if it would overflow
    pub fn write_chunk(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + bytes.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        self.file.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups > 0 {
            let oldest = self.backup_path(self.max_backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.max_backups).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

struct Shared {
    file: RollingFile,
    buffer: LineBuffer,
}

/// Cloneable writer handed to the tracing subscriber.
///
/// Every chunk goes to the rolling file and the in-memory line buffer.
#[derive(Clone)]
pub struct RollingWriter {
    shared: Arc<Mutex<Shared>>,
}

impl RollingWriter {
    pub fn new(file: RollingFile, buffer: LineBuffer) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared { file, buffer })),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.shared.lock() {
            Ok(shared) => shared.buffer.snapshot(),
            Err(poisoned) => poisoned.into_inner().buffer.snapshot(),
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.shared.lock().ok().map(|shared| shared.file.path().to_path_buf())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| io::Error::other("log writer poisoned"))?;
        shared.buffer.push_chunk(&String::from_utf8_lossy(buf));
        shared.file.write_chunk(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| io::Error::other("log writer poisoned"))?;
        shared.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
