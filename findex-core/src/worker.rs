//! The index worker: pulls filesystem events off a queue and keeps the
//! metadata index current.
//!
//! One worker runs one sequential loop. It suspends only at the queue
//! receive; extraction, upserts, and deletes run to completion before the
//! next receive. The worker is disposable: any unexpected failure is
//! reported on the error channel and the loop stops, leaving restart policy
//! to the supervising process.

use std::fmt;
use std::sync::Arc;

use findex_model::FileClass;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::classify;
use crate::config::IndexWorkerConfig;
use crate::error::{IndexError, Result};
use crate::events::{FileEvent, FileEventKind, WorkerMessage};
use crate::extract::basename;
use crate::registry::ExtractorRegistry;
use crate::store::{DeleteOutcome, MetadataStore};

pub struct IndexWorker {
    registry: ExtractorRegistry,
    store: Arc<dyn MetadataStore>,
}

impl fmt::Debug for IndexWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexWorker")
            .field("extractors", &self.registry.len())
            .finish()
    }
}

/// Channels and join handle for a spawned worker. The supervising process
/// feeds `work_tx`, watches `error_rx`, and joins the task after either a
/// nominal shutdown or a fatal error shows up on the error channel.
#[derive(Debug)]
pub struct IndexWorkerHandle {
    pub work_tx: mpsc::Sender<WorkerMessage>,
    pub error_rx: mpsc::UnboundedReceiver<IndexError>,
    pub join: JoinHandle<()>,
}

impl IndexWorker {
    pub fn new(registry: ExtractorRegistry, store: Arc<dyn MetadataStore>) -> Self {
        Self { registry, store }
    }

    /// Builds the channels and spawns the worker loop onto the runtime.
    pub fn spawn(self, config: &IndexWorkerConfig) -> IndexWorkerHandle {
        let (work_tx, work_rx) = mpsc::channel(config.channel_capacity);
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let join = tokio::spawn(async move { self.run(work_rx, error_tx).await });

        IndexWorkerHandle {
            work_tx,
            error_rx,
            join,
        }
    }

    /// The worker loop. Exits after reporting either a nominal shutdown or
    /// the first fatal processing error on `error_tx`; it never resumes.
    pub async fn run(
        &self,
        mut work_rx: mpsc::Receiver<WorkerMessage>,
        error_tx: mpsc::UnboundedSender<IndexError>,
    ) {
        loop {
            let Some(message) = work_rx.recv().await else {
                // Sender gone without an explicit shutdown message. Nothing
                // more can ever arrive, so treat it as a nominal stop.
                warn!("work queue closed without a shutdown message");
                let _ = error_tx.send(IndexError::Shutdown);
                break;
            };

            match message {
                WorkerMessage::Shutdown => {
                    info!("terminating index worker");
                    let _ = error_tx.send(IndexError::Shutdown);
                    break;
                }
                WorkerMessage::Event(event) => {
                    if let Err(err) = self.process_file_event(&event).await {
                        error!(
                            path = %event.path.display(),
                            error = %err,
                            "stopping file event processing"
                        );
                        let _ = error_tx.send(err);
                        break;
                    }
                }
            }
        }
    }

    /// Routes one event to the matching handler.
    pub async fn process_file_event(&self, event: &FileEvent) -> Result<()> {
        debug!(path = %event.path.display(), kind = ?event.kind, "handling file event");

        match event.kind {
            FileEventKind::Closed => self.process_file_updated(event).await,
            FileEventKind::Removed => self.process_file_removed(event).await,
            FileEventKind::Other => {
                warn!(
                    path = %event.path.display(),
                    "unrecognized file event kind, no processing will occur"
                );
                Ok(())
            }
        }
    }

    /// Tries each registered extractor in priority order and upserts the
    /// first metadata record produced. At most one upsert per event.
    async fn process_file_updated(&self, event: &FileEvent) -> Result<()> {
        for entry in self.registry.entries() {
            let metadata = match entry.extractor().extract(&event.path) {
                Ok(metadata) => metadata,
                Err(IndexError::Io(err)) => {
                    warn!(
                        path = %event.path.display(),
                        extractor = entry.extractor().name(),
                        error = %err,
                        "unable to read file for indexing"
                    );
                    None
                }
                Err(err) => return Err(err),
            };

            if let Some(metadata) = metadata {
                entry.sink().upsert(&metadata).await?;
                debug!(
                    path = %event.path.display(),
                    extractor = entry.extractor().name(),
                    "indexed file metadata"
                );
                return Ok(());
            }
        }

        warn!(
            path = %event.path.display(),
            "no extractor produced metadata, index not updated"
        );
        Ok(())
    }

    /// Deletes the index record for a removed file. The store indexes by
    /// basename, so the directory part of the path is stripped first.
    async fn process_file_removed(&self, event: &FileEvent) -> Result<()> {
        let Some(name) = basename(&event.path) else {
            warn!(
                path = %event.path.display(),
                "removed path has no usable filename, unable to determine metadata class"
            );
            return Ok(());
        };

        if classify::is_science_file(&event.path) {
            self.delete_classified(name, FileClass::Science).await
        } else if classify::is_ancillary_file(&event.path) {
            self.delete_classified(name, FileClass::Ancillary).await
        } else {
            warn!(
                path = %event.path.display(),
                "unable to determine metadata class, index not updated"
            );
            Ok(())
        }
    }

    async fn delete_classified(&self, name: &str, class: FileClass) -> Result<()> {
        let outcome = match class {
            FileClass::Ancillary => self.store.delete_ancillary_file(name).await?,
            // Level-0 records are removed through the science delete.
            FileClass::Science | FileClass::Level0 => self.store.delete_science_file(name).await?,
        };

        match outcome {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => {
                error!(filename = name, %class, "unable to remove file metadata");
                Err(IndexError::RemovalFailed {
                    class,
                    filename: name.to_string(),
                })
            }
        }
    }
}
