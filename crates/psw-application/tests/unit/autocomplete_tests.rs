//! Autocomplete service tests

use crate::test_utils::{MockCatalog, MockSearchBackend, MockSlicer, completion};
use psw_application::{AutocompleteServiceImpl, AutocompleteServiceInterface};
use psw_domain::value_objects::{
    AutocompleteMode, BackendOutcome, FailureReason, HitRecord, PathComponent, ServiceSelector,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(30);

fn web() -> ServiceSelector {
    ServiceSelector::Service(PathComponent::parse("web").unwrap())
}

fn service(
    backend: MockSearchBackend,
    slicer: Arc<MockSlicer>,
    mode: AutocompleteMode,
) -> AutocompleteServiceImpl {
    AutocompleteServiceImpl::new(
        Arc::new(backend),
        slicer,
        Arc::new(MockCatalog::new("/tmp/pcap")),
        mode,
        DEADLINE,
    )
}

#[tokio::test]
async fn test_located_suggestions_are_cut_at_flow_end() {
    let backend = MockSearchBackend {
        completions: vec![
            completion("/tmp/pcap/web/a.cap.ap", 100, "GET /index.html"),
            completion("/tmp/pcap/web/a.cap.ap", 200, "GET /\\x0d\\x0a"),
            completion("/tmp/pcap/web/b.cap.ap", 300, "GET /index.html"),
            completion("/tmp/pcap/web/b.cap.ap", 400, "ignored"),
        ],
        ..Default::default()
    };
    let slicer = Arc::new(MockSlicer {
        // 400 ends before it starts and yields nothing
        flow_ends: HashMap::from([(100, 104), (200, 207), (300, 304), (400, 400)]),
        ..Default::default()
    });

    let outcome = service(backend, Arc::clone(&slicer), AutocompleteMode::Located)
        .suggest("GET", &web())
        .await;

    let BackendOutcome::Success(list) = outcome else {
        panic!("expected suggestions, got {outcome:?}");
    };
    assert_eq!(list.query.as_str(), "GET");
    assert_eq!(list.suggestions, vec!["GET ", "GET /\\x0d\\x0a"]);

    let located = slicer.located.lock().unwrap();
    assert_eq!(located[0], (PathBuf::from("/tmp/pcap/web/a.cap"), 100));
    assert_eq!(located.len(), 4);
}

#[tokio::test]
async fn test_verbatim_suggestions_skip_the_slicer() {
    let backend = MockSearchBackend {
        completions: vec![
            completion("/tmp/pcap/web/a.cap.ap", 1, "GET /a"),
            HitRecord::bare("GET /b"),
            completion("/tmp/pcap/web/a.cap.ap", 2, "GET /a"),
            HitRecord::bare(""),
        ],
        ..Default::default()
    };
    let slicer = Arc::new(MockSlicer::default());

    let outcome = service(backend, Arc::clone(&slicer), AutocompleteMode::Verbatim)
        .suggest("GET", &web())
        .await;

    let BackendOutcome::Success(list) = outcome else {
        panic!("expected suggestions");
    };
    assert_eq!(list.suggestions, vec!["GET /a", "GET /b"]);
    assert!(slicer.located.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_located_mode_skips_bare_lines_and_slicer_errors() {
    let backend = MockSearchBackend {
        completions: vec![
            HitRecord::bare("GET /b"),
            completion("/tmp/pcap/web/a.cap.ap", 1, "GET /a"),
        ],
        ..Default::default()
    };
    let slicer = Arc::new(MockSlicer {
        fail: true,
        ..Default::default()
    });

    let outcome = service(backend, slicer, AutocompleteMode::Located)
        .suggest("GET", &web())
        .await;
    assert_eq!(outcome, BackendOutcome::Empty);
}

#[tokio::test]
async fn test_backend_failure_is_reported() {
    let backend = MockSearchBackend {
        fail: true,
        ..Default::default()
    };
    let outcome = service(
        backend,
        Arc::new(MockSlicer::default()),
        AutocompleteMode::Located,
    )
    .suggest("GET", &web())
    .await;
    assert!(outcome.failure().is_some());
}

#[tokio::test]
async fn test_completion_request_has_no_page_offset() {
    let backend = Arc::new(MockSearchBackend::default());
    let service = AutocompleteServiceImpl::new(
        Arc::clone(&backend) as _,
        Arc::new(MockSlicer::default()),
        Arc::new(MockCatalog::new("/tmp/pcap")),
        AutocompleteMode::Verbatim,
        DEADLINE,
    );

    service.suggest("a\\tb", &web()).await;

    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls[0].1.as_str(), "a\\x09b");
    assert_eq!(calls[0].2, None);
}

#[tokio::test(start_paused = true)]
async fn test_slow_slicer_is_bounded_by_the_deadline() {
    let backend = MockSearchBackend {
        completions: (0..20)
            .map(|i| completion("/tmp/pcap/web/a.cap.ap", i * 100, "abcdef"))
            .collect(),
        ..Default::default()
    };
    let slicer = Arc::new(MockSlicer {
        flow_ends: (0..20).map(|i| (i * 100, i * 100 + 4)).collect(),
        locate_delay: Some(Duration::from_secs(59)),
        ..Default::default()
    });

    let started = tokio::time::Instant::now();
    let outcome = service(backend, Arc::clone(&slicer), AutocompleteMode::Located)
        .suggest("abc", &web())
        .await;

    assert_eq!(outcome, BackendOutcome::Failed(FailureReason::Timeout));
    assert!(started.elapsed() <= DEADLINE + Duration::from_secs(1));
    assert_eq!(slicer.located.lock().unwrap().len(), 1);
}
