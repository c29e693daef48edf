//! Persistence ports for the metadata index.
//!
//! Implementations (and connection/transaction management) live with the
//! embedding process; the worker only sees these traits. The store indexes
//! records by basename, which is why the delete operations take a filename
//! rather than a path.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use findex_model::{
    AncillaryFileMetadata, FileMetadata, Level0FileMetadata, ScienceFileMetadata,
};

use crate::error::{IndexError, Result};

/// Outcome of a delete-by-basename operation.
///
/// `NotFound` is surfaced as a distinct outcome rather than a bare boolean;
/// the removal handler treats it as fatal for a classified file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn was_deleted(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Repository for the metadata index tables.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn upsert_science_file(&self, metadata: &ScienceFileMetadata) -> Result<()>;

    async fn upsert_ancillary_file(&self, metadata: &AncillaryFileMetadata) -> Result<()>;

    async fn upsert_level0_file(&self, metadata: &Level0FileMetadata) -> Result<()>;

    async fn delete_science_file(&self, basename: &str) -> Result<DeleteOutcome>;

    async fn delete_ancillary_file(&self, basename: &str) -> Result<DeleteOutcome>;
}

/// The upsert half of a registry pair: persists whatever metadata its paired
/// extractor produced.
#[async_trait]
pub trait MetadataSink: Send + Sync {
    async fn upsert(&self, metadata: &FileMetadata) -> Result<()>;
}

/// Routes science-shaped records (science products, quicklooks, sidecars)
/// to the science upsert.
pub struct ScienceUpsertSink {
    store: Arc<dyn MetadataStore>,
}

impl ScienceUpsertSink {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetadataSink for ScienceUpsertSink {
    async fn upsert(&self, metadata: &FileMetadata) -> Result<()> {
        match metadata {
            FileMetadata::Science(record) => self.store.upsert_science_file(record).await,
            other => Err(IndexError::Internal(format!(
                "science sink cannot persist {} metadata",
                other.class()
            ))),
        }
    }
}

pub struct AncillaryUpsertSink {
    store: Arc<dyn MetadataStore>,
}

impl AncillaryUpsertSink {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetadataSink for AncillaryUpsertSink {
    async fn upsert(&self, metadata: &FileMetadata) -> Result<()> {
        match metadata {
            FileMetadata::Ancillary(record) => self.store.upsert_ancillary_file(record).await,
            other => Err(IndexError::Internal(format!(
                "ancillary sink cannot persist {} metadata",
                other.class()
            ))),
        }
    }
}

pub struct Level0UpsertSink {
    store: Arc<dyn MetadataStore>,
}

impl Level0UpsertSink {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetadataSink for Level0UpsertSink {
    async fn upsert(&self, metadata: &FileMetadata) -> Result<()> {
        match metadata {
            FileMetadata::Level0(record) => self.store.upsert_level0_file(record).await,
            other => Err(IndexError::Internal(format!(
                "level-0 sink cannot persist {} metadata",
                other.class()
            ))),
        }
    }
}

impl fmt::Debug for ScienceUpsertSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScienceUpsertSink")
    }
}

impl fmt::Debug for AncillaryUpsertSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AncillaryUpsertSink")
    }
}

impl fmt::Debug for Level0UpsertSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Level0UpsertSink")
    }
}
