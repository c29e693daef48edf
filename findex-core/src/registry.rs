//! Ordered pairing of metadata extractors with their upsert sinks.
//!
//! The registry is a priority list, not a map: several extractors can match
//! overlapping filename shapes (a level-0 name also parses as a science name,
//! for instance), and the first capable one must win deterministically. It is
//! built once at startup and never mutated afterwards.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use findex_model::FileMetadata;

use crate::error::Result;
use crate::extract::{
    AncillaryFileExtractor, Level0FileExtractor, QuicklookFileExtractor, ScienceFileExtractor,
    SidecarFileExtractor,
};
use crate::store::{
    AncillaryUpsertSink, Level0UpsertSink, MetadataSink, MetadataStore, ScienceUpsertSink,
};

/// Maps a filename to a structured metadata record, or to "no match".
///
/// Extraction may touch the filesystem (a stat for size and mtime), so it can
/// fail with an I/O error; the update handler swallows exactly that class and
/// tries the next extractor.
pub trait MetadataExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>>;
}

/// One (extractor, upsert) pair.
pub struct ExtractorEntry {
    extractor: Arc<dyn MetadataExtractor>,
    sink: Arc<dyn MetadataSink>,
}

impl ExtractorEntry {
    pub fn extractor(&self) -> &dyn MetadataExtractor {
        self.extractor.as_ref()
    }

    pub fn sink(&self) -> &dyn MetadataSink {
        self.sink.as_ref()
    }
}

impl fmt::Debug for ExtractorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorEntry")
            .field("extractor", &self.extractor.name())
            .finish()
    }
}

/// Ordered collection of extractor/sink pairs. Iteration order is precedence.
#[derive(Debug, Default)]
pub struct ExtractorRegistry {
    entries: Vec<ExtractorEntry>,
}

impl ExtractorRegistry {
    pub fn builder() -> ExtractorRegistryBuilder {
        ExtractorRegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// The production wiring, in its fixed priority order: science, then
    /// ancillary, then the metadata sidecar, quicklook, and level-0 shapes.
    /// Sidecars and quicklooks describe science products and upsert through
    /// the science sink.
    pub fn standard(store: Arc<dyn MetadataStore>) -> Self {
        let science_sink: Arc<dyn MetadataSink> =
            Arc::new(ScienceUpsertSink::new(Arc::clone(&store)));

        Self::builder()
            .register(ScienceFileExtractor, Arc::clone(&science_sink))
            .register(
                AncillaryFileExtractor,
                Arc::new(AncillaryUpsertSink::new(Arc::clone(&store))),
            )
            .register(SidecarFileExtractor, Arc::clone(&science_sink))
            .register(QuicklookFileExtractor, science_sink)
            .register(Level0FileExtractor, Arc::new(Level0UpsertSink::new(store)))
            .build()
    }

    pub fn entries(&self) -> &[ExtractorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct ExtractorRegistryBuilder {
    entries: Vec<ExtractorEntry>,
}

impl ExtractorRegistryBuilder {
    /// Appends a pair; registration order is the precedence order.
    pub fn register(
        mut self,
        extractor: impl MetadataExtractor + 'static,
        sink: Arc<dyn MetadataSink>,
    ) -> Self {
        self.entries.push(ExtractorEntry {
            extractor: Arc::new(extractor),
            sink,
        });
        self
    }

    pub fn build(self) -> ExtractorRegistry {
        ExtractorRegistry {
            entries: self.entries,
        }
    }
}
