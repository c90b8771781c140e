//! Temporary Artifact Store Tests

use psw_domain::ports::infrastructure::ArtifactStore;
use psw_infrastructure::artifacts::TempArtifactStore;
use std::time::Duration;
use tempfile::TempDir;

const GRACE: Duration = Duration::from_millis(1000);

fn store(dir: &TempDir, grace: Duration) -> TempArtifactStore {
    TempArtifactStore::new(Some(dir.path().to_path_buf()), grace)
}

#[test]
fn test_allocate_creates_named_file() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir, GRACE);

    let first = store.allocate("dump.cap").unwrap();
    let second = store.allocate("dump.cap").unwrap();

    assert!(first.path().exists());
    assert_ne!(first.path(), second.path());
    assert!(first.path().starts_with(dir.path()));
    let name = first.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("psw-dump.cap-"));
}

#[test]
fn test_dropped_artifact_is_deleted() {
    let dir = TempDir::new().unwrap();
    let artifact = store(&dir, GRACE).allocate("x").unwrap();
    let path = artifact.path().to_path_buf();

    drop(artifact);

    assert!(!path.exists());
}

#[test]
fn test_delete_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let artifact = store(&dir, GRACE).allocate("x").unwrap();
    std::fs::remove_file(artifact.path()).unwrap();

    assert!(artifact.delete().is_err());
}

#[test]
fn test_release_without_runtime_deletes_immediately() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir, GRACE);
    let artifact = store.allocate("x").unwrap();
    let path = artifact.path().to_path_buf();

    store.release_later(artifact);

    assert!(!path.exists());
}

#[tokio::test(start_paused = true)]
async fn test_release_waits_for_grace_delay() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir, GRACE);
    let artifact = store.allocate("x").unwrap();
    let path = artifact.path().to_path_buf();

    store.release_later(artifact);
    assert_eq!(store.pending(), 1);

    tokio::time::sleep(GRACE - Duration::from_millis(10)).await;
    assert!(path.exists());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!path.exists());
}

#[tokio::test]
async fn test_shutdown_deletes_pending_artifacts_now() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir, Duration::from_secs(3600));
    let paths: Vec<_> = (0..3)
        .map(|i| {
            let artifact = store.allocate(&format!("slice{i}")).unwrap();
            let path = artifact.path().to_path_buf();
            store.release_later(artifact);
            path
        })
        .collect();

    store.shutdown().await;

    assert_eq!(store.pending(), 0);
    assert!(paths.iter().all(|path| !path.exists()));
}

#[tokio::test]
async fn test_release_after_shutdown_deletes_immediately() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir, Duration::from_secs(3600));
    store.shutdown().await;

    let artifact = store.allocate("late").unwrap();
    let path = artifact.path().to_path_buf();
    store.release_later(artifact);

    assert!(!path.exists());
}
