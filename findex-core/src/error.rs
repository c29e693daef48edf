use findex_model::FileClass;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    /// I/O failure while an extractor examined a file. The update handler
    /// treats this as "no metadata" and moves on to the next extractor;
    /// every other variant is fatal to the event being processed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata store error: {0}")]
    Store(String),

    #[error("unable to remove {class} file metadata for {filename}")]
    RemovalFailed {
        class: FileClass,
        filename: String,
    },

    /// Nominal worker shutdown requested. Reported through the same error
    /// channel as genuine failures so the supervisor can tell "told to
    /// stop" apart from "crashed" by kind rather than by absence.
    #[error("nominal worker shutdown requested")]
    Shutdown,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
