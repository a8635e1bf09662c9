use std::{
    collections::VecDeque,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub const CAPACITY: usize = 100;
pub const FILE_NAME: &str = "log.json";

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn from_record(record: &Record) -> Self {
        Self {
            time: Utc::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the most recent log entries, optionally persisted to a JSON file on flush.
pub struct RingBuffer {
    entries: VecDeque<Entry>,
    capacity: usize,
    path: Option<PathBuf>,
}

impl RingBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            path: None,
        }
    }

    /// Loads the entries stored at `path`. A missing file yields an empty buffer.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, Error> {
        let path = path.into();
        let mut buffer = Self::new(capacity);
        match std::fs::read(&path) {
            Ok(bytes) => {
                let entries: VecDeque<Entry> = serde_json::from_slice(&bytes)
                    .map_err(|err| Error::Unknown(format!("{}: {err}", path.display())))?;
                for entry in entries {
                    buffer.write_entry(entry)?;
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(Error::Unknown(format!("{}: {err}", path.display()))),
        }
        buffer.path = Some(path);
        Ok(buffer)
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new(CAPACITY)
    }
}

impl Repository for RingBuffer {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self.entries.clone())
    }

    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        if self.capacity == 0 {
            return Ok(());
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_vec(&self.entries).map_err(|err| Error::Unknown(err.to_string()))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|err| Error::Unknown(format!("{}: {err}", dir.display())))?;
        }
        std::fs::write(path, json).map_err(|err| Error::Unknown(format!("{}: {err}", path.display())))
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<Mutex<dyn Repository>>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Returns the entries kept by the repository passed to [`init`].
#[must_use]
pub fn entries() -> VecDeque<Entry> {
    repository()
        .and_then(|log| log.lock().ok()?.read_entries().ok())
        .unwrap_or_default()
}

fn repository() -> Option<Arc<Mutex<dyn Repository>>> {
    LOG.lock().ok().and_then(|log| log.clone())
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = Entry::from_record(record);
        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);
        if let Some(log) = repository() {
            if let Ok(mut repository) = log.lock() {
                let _ = repository.write_entry(entry);
            }
        }
    }

    fn flush(&self) {
        if let Some(log) = repository() {
            if let Ok(repository) = log.lock() {
                if let Err(err) = repository.flush() {
                    eprintln!("failed to store log: {err}");
                }
            }
        }
    }
}
