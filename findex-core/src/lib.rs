//! Metadata index maintenance for instrument data files.
//!
//! A thin, disposable worker that consumes filesystem change notifications
//! from a queue and keeps a metadata index current: closed files are run
//! through an ordered set of filename extractors and upserted, removed files
//! have their index records deleted. Failures and the nominal shutdown are
//! both reported to the supervising process over an error channel.
//!
//! The queues and the store implementation belong to the embedding process;
//! this crate owns the dispatch logic, the extractor registry, and the
//! filename conventions.

pub mod classify;
pub mod config;
pub mod error;
pub mod events;
pub mod extract;
pub mod registry;
pub mod store;
pub mod worker;

pub use config::IndexWorkerConfig;
pub use error::{IndexError, Result};
pub use events::{FileEvent, FileEventKind, WorkerMessage};
pub use extract::{
    AncillaryFileExtractor, Level0FileExtractor, QuicklookFileExtractor, ScienceFileExtractor,
    SidecarFileExtractor,
};
pub use registry::{ExtractorEntry, ExtractorRegistry, MetadataExtractor};
pub use store::{DeleteOutcome, MetadataSink, MetadataStore};
pub use worker::{IndexWorker, IndexWorkerHandle};
