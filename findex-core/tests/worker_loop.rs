//! Worker loop protocol tests: shutdown reporting, fatal-error reporting,
//! and the closed/removed round trip against the standard registry.

use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use findex_core::{
    DeleteOutcome, ExtractorRegistry, FileEvent, FileEventKind, IndexError, IndexWorker,
    IndexWorkerConfig, MetadataStore, Result, WorkerMessage,
};
use findex_model::{AncillaryFileMetadata, FileClass, Level0FileMetadata, ScienceFileMetadata};

#[derive(Default)]
struct RecordingStore {
    upserts: Mutex<Vec<(FileClass, String)>>,
    deletes: Mutex<Vec<(FileClass, String)>>,
    science_missing: bool,
    ancillary_missing: bool,
}

impl RecordingStore {
    fn upserts(&self) -> Vec<(FileClass, String)> {
        self.upserts.lock().unwrap().clone()
    }

    fn deletes(&self) -> Vec<(FileClass, String)> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataStore for RecordingStore {
    async fn upsert_science_file(&self, metadata: &ScienceFileMetadata) -> Result<()> {
        self.upserts
            .lock()
            .unwrap()
            .push((FileClass::Science, metadata.filename.clone()));
        Ok(())
    }

    async fn upsert_ancillary_file(&self, metadata: &AncillaryFileMetadata) -> Result<()> {
        self.upserts
            .lock()
            .unwrap()
            .push((FileClass::Ancillary, metadata.filename.clone()));
        Ok(())
    }

    async fn upsert_level0_file(&self, metadata: &Level0FileMetadata) -> Result<()> {
        self.upserts
            .lock()
            .unwrap()
            .push((FileClass::Level0, metadata.filename.clone()));
        Ok(())
    }

    async fn delete_science_file(&self, basename: &str) -> Result<DeleteOutcome> {
        self.deletes
            .lock()
            .unwrap()
            .push((FileClass::Science, basename.to_string()));
        if self.science_missing {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }

    async fn delete_ancillary_file(&self, basename: &str) -> Result<DeleteOutcome> {
        self.deletes
            .lock()
            .unwrap()
            .push((FileClass::Ancillary, basename.to_string()));
        if self.ancillary_missing {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

fn spawn_worker(store: Arc<RecordingStore>) -> findex_core::IndexWorkerHandle {
    let registry = ExtractorRegistry::standard(Arc::clone(&store) as Arc<dyn MetadataStore>);
    IndexWorker::new(registry, store).spawn(&IndexWorkerConfig::default())
}

#[tokio::test]
async fn shutdown_message_reports_nominal_shutdown_and_stops_receiving() {
    let store = Arc::new(RecordingStore::default());
    let mut handle = spawn_worker(Arc::clone(&store));

    handle.work_tx.send(WorkerMessage::Shutdown).await.unwrap();

    let reported = handle.error_rx.recv().await.unwrap();
    assert!(matches!(reported, IndexError::Shutdown));

    handle.join.await.unwrap();

    // The loop is gone; nothing is listening on the work queue anymore.
    assert!(
        handle
            .work_tx
            .send(WorkerMessage::Event(FileEvent::closed("/data/sci_001.dat")))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn fatal_removal_failure_is_reported_and_terminates_the_loop() {
    let store = Arc::new(RecordingStore {
        ancillary_missing: true,
        ..RecordingStore::default()
    });
    let mut handle = spawn_worker(Arc::clone(&store));

    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::removed(
            "/data/anc_orbit_20260801.drf",
        )))
        .await
        .unwrap();

    let reported = handle.error_rx.recv().await.unwrap();
    assert!(matches!(
        reported,
        IndexError::RemovalFailed {
            class: FileClass::Ancillary,
            ..
        }
    ));

    handle.join.await.unwrap();
    assert_eq!(
        store.deletes(),
        [(FileClass::Ancillary, "anc_orbit_20260801.drf".to_string())]
    );
}

#[tokio::test]
async fn successful_science_removal_reports_nothing() {
    let store = Arc::new(RecordingStore::default());
    let mut handle = spawn_worker(Arc::clone(&store));

    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::removed("/data/sci_001.dat")))
        .await
        .unwrap();
    handle.work_tx.send(WorkerMessage::Shutdown).await.unwrap();

    // The only entry on the error channel is the nominal shutdown.
    let reported = handle.error_rx.recv().await.unwrap();
    assert!(matches!(reported, IndexError::Shutdown));

    handle.join.await.unwrap();
    assert_eq!(
        store.deletes(),
        [(FileClass::Science, "sci_001.dat".to_string())]
    );
}

#[tokio::test]
async fn unrecognized_event_kinds_do_not_stop_the_loop() {
    let store = Arc::new(RecordingStore::default());
    let mut handle = spawn_worker(Arc::clone(&store));

    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::new(
            "/data/sci_001.dat",
            FileEventKind::Other,
        )))
        .await
        .unwrap();
    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::removed("/data/sci_001.dat")))
        .await
        .unwrap();
    handle.work_tx.send(WorkerMessage::Shutdown).await.unwrap();

    let reported = handle.error_rx.recv().await.unwrap();
    assert!(matches!(reported, IndexError::Shutdown));

    handle.join.await.unwrap();
    // The Other event was skipped, the removal after it still ran.
    assert_eq!(
        store.deletes(),
        [(FileClass::Science, "sci_001.dat".to_string())]
    );
}

#[tokio::test]
async fn closed_then_removed_round_trip_through_the_standard_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sci_001.dat");
    fs::write(&path, b"science payload").unwrap();

    let store = Arc::new(RecordingStore::default());
    let mut handle = spawn_worker(Arc::clone(&store));

    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::closed(&path)))
        .await
        .unwrap();
    handle
        .work_tx
        .send(WorkerMessage::Event(FileEvent::removed(&path)))
        .await
        .unwrap();
    handle.work_tx.send(WorkerMessage::Shutdown).await.unwrap();

    let reported = handle.error_rx.recv().await.unwrap();
    assert!(matches!(reported, IndexError::Shutdown), "{reported:?}");
    handle.join.await.unwrap();

    assert_eq!(
        store.upserts(),
        [(FileClass::Science, "sci_001.dat".to_string())]
    );
    assert_eq!(
        store.deletes(),
        [(FileClass::Science, "sci_001.dat".to_string())]
    );
    assert!(handle.error_rx.try_recv().is_err());
}
