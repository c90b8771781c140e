//! Download service tests

use crate::test_utils::{MockArtifactStore, MockCatalog, MockSlicer};
use psw_application::{DownloadServiceImpl, DownloadServiceInterface, PreparedDownload};
use psw_domain::value_objects::{BackendOutcome, DownloadRequest, RenderKind};
use std::path::PathBuf;
use std::sync::Arc;

fn service(slicer: Arc<MockSlicer>, store: Arc<MockArtifactStore>) -> DownloadServiceImpl {
    DownloadServiceImpl::new(slicer, Arc::new(MockCatalog::new("/tmp/pcap")), store)
}

#[tokio::test]
async fn test_passthrough_resolves_capture_path() {
    let slicer = Arc::new(MockSlicer::default());
    let request =
        DownloadRequest::from_params(Some("dump.cap"), None, Some("all"), Some("web")).unwrap();

    let prepared = service(Arc::clone(&slicer), Arc::default())
        .prepare(&request)
        .await
        .unwrap();

    let PreparedDownload::Capture {
        path,
        attachment_name,
    } = prepared
    else {
        panic!("expected a passthrough download");
    };
    assert_eq!(path, PathBuf::from("/tmp/pcap/web/dump.cap"));
    assert_eq!(attachment_name, "dump.cap");
    assert!(slicer.slices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_slice_is_rendered_into_artifact() {
    let slicer = Arc::new(MockSlicer {
        rendering: b"pcap bytes".to_vec(),
        exit_code: Some(0),
        ..Default::default()
    });
    let store = Arc::new(MockArtifactStore::default());
    let service = service(Arc::clone(&slicer), Arc::clone(&store));
    let request =
        DownloadRequest::from_params(Some("dump.cap"), Some("4096"), Some("pcap"), None).unwrap();

    let prepared = service.prepare(&request).await.unwrap();

    let PreparedDownload::Rendered {
        artifact,
        kind,
        attachment_name,
        outcome,
    } = prepared
    else {
        panic!("expected a rendering");
    };
    assert_eq!(kind, RenderKind::Pcap);
    assert_eq!(attachment_name, "dump@4096.cap");
    assert_eq!(outcome, BackendOutcome::Success(()));
    assert_eq!(std::fs::read(artifact.path()).unwrap(), b"pcap bytes");

    let slices = slicer.slices.lock().unwrap();
    assert_eq!(slices[0].source, PathBuf::from("/tmp/pcap/all/dump.cap"));
    assert_eq!(slices[0].offset, 4096);
    assert_eq!(slices[0].kind, RenderKind::Pcap);
    drop(slices);

    let path = artifact.path().to_path_buf();
    service.release(artifact);
    assert_eq!(*store.released.lock().unwrap(), vec![path]);
}

#[tokio::test]
async fn test_slicer_failure_yields_empty_rendering() {
    let slicer = Arc::new(MockSlicer {
        fail: true,
        ..Default::default()
    });
    let request =
        DownloadRequest::from_params(Some("dump.cap"), Some("1"), Some("hex"), None).unwrap();

    let prepared = service(slicer, Arc::default())
        .prepare(&request)
        .await
        .unwrap();

    let PreparedDownload::Rendered {
        artifact, outcome, ..
    } = prepared
    else {
        panic!("expected a rendering");
    };
    assert!(outcome.failure().is_some());
    assert!(std::fs::read(artifact.path()).unwrap().is_empty());
}

#[tokio::test]
async fn test_nonzero_exit_is_a_failed_outcome() {
    let slicer = Arc::new(MockSlicer {
        exit_code: Some(2),
        ..Default::default()
    });
    let request =
        DownloadRequest::from_params(Some("dump.cap"), Some("1"), Some("str"), None).unwrap();

    let prepared = service(slicer, Arc::default())
        .prepare(&request)
        .await
        .unwrap();

    let PreparedDownload::Rendered { outcome, .. } = prepared else {
        panic!("expected a rendering");
    };
    assert!(outcome.failure().is_some());
}
