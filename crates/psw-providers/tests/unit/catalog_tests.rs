//! Filesystem catalog tests

use psw_domain::ports::providers::ServiceCatalog;
use psw_domain::value_objects::PathComponent;
use psw_providers::FilesystemServiceCatalog;

#[tokio::test]
async fn test_lists_visible_directories_sorted() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["web", "all", ".hidden", "dns"] {
        std::fs::create_dir(dir.path().join(name)).unwrap();
    }
    std::fs::write(dir.path().join("stray.cap"), b"").unwrap();

    let catalog = FilesystemServiceCatalog::new(dir.path());
    let services = catalog.list_services().await.unwrap();
    assert_eq!(services, vec!["all", "dns", "web"]);
}

#[tokio::test]
async fn test_missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FilesystemServiceCatalog::new(dir.path().join("absent"));
    assert!(catalog.list_services().await.is_err());
}

#[test]
fn test_capture_path_joins_components() {
    let catalog = FilesystemServiceCatalog::new("/tmp/pcap");
    let path = catalog.capture_path(
        &PathComponent::parse("web").unwrap(),
        &PathComponent::parse("a.cap").unwrap(),
    );
    assert_eq!(path, std::path::PathBuf::from("/tmp/pcap/web/a.cap"));
    assert_eq!(catalog.search_root(), "/tmp/pcap");
}
