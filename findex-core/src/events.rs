//! Filesystem change notifications consumed by the index worker.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// What happened to the file. `Other` is the forward-compatible fallback
/// for kinds this worker does not understand; dispatch logs and ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    /// The file was written and closed; its metadata should be (re)indexed.
    Closed,
    /// The file was removed; its index record should be deleted.
    Removed,
    Other,
}

/// One filesystem change notification. Constructed by the event source,
/// pushed onto the work queue, and consumed exactly once by the worker.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEvent {
    pub path: PathBuf,
    pub kind: FileEventKind,
    pub detected_at: DateTime<Utc>,
}

impl FileEvent {
    pub fn new(path: impl Into<PathBuf>, kind: FileEventKind) -> Self {
        Self {
            path: path.into(),
            kind,
            detected_at: Utc::now(),
        }
    }

    pub fn closed(path: impl Into<PathBuf>) -> Self {
        Self::new(path, FileEventKind::Closed)
    }

    pub fn removed(path: impl Into<PathBuf>) -> Self {
        Self::new(path, FileEventKind::Removed)
    }
}

/// Message on the worker's inbound queue.
///
/// `Shutdown` replaces the magic "no event" sentinel: an explicit tagged
/// variant cannot be confused with a legitimate event, while the observable
/// protocol stays the same (the worker reports a nominal-shutdown condition
/// on its error channel and exits).
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    Event(FileEvent),
    Shutdown,
}
