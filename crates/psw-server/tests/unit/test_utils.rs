//! Mock services and a local client factory

use async_trait::async_trait;
use psw_application::ports::{
    AutocompleteServiceInterface, CatalogServiceInterface, DownloadServiceInterface,
    PreparedDownload, SearchServiceInterface,
};
use psw_domain::error::{Error, Result};
use psw_domain::ports::infrastructure::TempArtifact;
use psw_domain::value_objects::{
    BackendOutcome, DownloadRequest, EnrichedHit, FailureReason, HitDetail, HitRecord,
    NormalizedQuery, ResultPage, ServiceSelector, SuggestionList, SuggestionSet,
};
use psw_infrastructure::config::{AppConfig, ServerConfig};
use psw_infrastructure::di::AppServices;
use psw_server::{HttpServer, WebState};
use rocket::local::asynchronous::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir, TempPath};

pub fn enriched(offset: u64, epoch: i64, context: &str) -> EnrichedHit {
    let hit = HitRecord::new("/tmp/pcap/http/dump.cap.ap", offset, HitDetail::Length(3));
    EnrichedHit::new(
        &hit,
        psw_domain::value_objects::FlowMetadata {
            epoch,
            port0: 80,
            port1: 51234,
            context: context.to_string(),
        },
    )
}

// ============================================================================
// Search
// ============================================================================

pub struct MockSearchService {
    pub outcome: BackendOutcome<ResultPage>,
    pub calls: Mutex<Vec<(String, ServiceSelector, u32)>>,
}

impl MockSearchService {
    pub fn new(outcome: BackendOutcome<ResultPage>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchServiceInterface for MockSearchService {
    async fn search(
        &self,
        raw_query: &str,
        selector: &ServiceSelector,
        page: u32,
    ) -> BackendOutcome<ResultPage> {
        self.calls
            .lock()
            .unwrap()
            .push((raw_query.to_string(), selector.clone(), page));
        self.outcome.clone()
    }
}

// ============================================================================
// Autocomplete
// ============================================================================

pub struct MockAutocompleteService {
    pub suggestions: Vec<&'static str>,
    pub fail: bool,
}

#[async_trait]
impl AutocompleteServiceInterface for MockAutocompleteService {
    async fn suggest(
        &self,
        raw_query: &str,
        _selector: &ServiceSelector,
    ) -> BackendOutcome<SuggestionList> {
        if self.fail {
            return BackendOutcome::Failed(FailureReason::Timeout);
        }
        let mut set = SuggestionSet::new();
        for suggestion in &self.suggestions {
            set.insert((*suggestion).to_string());
        }
        BackendOutcome::Success(SuggestionList::new(NormalizedQuery::new(raw_query), set))
    }
}

// ============================================================================
// Catalog
// ============================================================================

pub struct MockCatalogService(pub BackendOutcome<Vec<String>>);

#[async_trait]
impl CatalogServiceInterface for MockCatalogService {
    async fn list_services(&self) -> BackendOutcome<Vec<String>> {
        self.0.clone()
    }
}

// ============================================================================
// Download
// ============================================================================

#[derive(Debug)]
pub struct MockArtifact(TempPath);

impl TempArtifact for MockArtifact {
    fn path(&self) -> &Path {
        &self.0
    }

    fn delete(self: Box<Self>) -> Result<()> {
        self.0.close().map_err(Error::from)
    }
}

/// Serves captures from `root/service/filename` and renders
/// `"<kind>@<offset>"` into a temporary file
pub struct MockDownloadService {
    pub root: PathBuf,
    pub slicer_fails: bool,
    pub released: AtomicUsize,
    pub rendered: Mutex<Vec<PathBuf>>,
}

impl MockDownloadService {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            slicer_fails: false,
            released: AtomicUsize::new(0),
            rendered: Mutex::new(Vec::new()),
        }
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DownloadServiceInterface for MockDownloadService {
    async fn prepare(&self, request: &DownloadRequest) -> Result<PreparedDownload> {
        let path = self
            .root
            .join(request.service.as_str())
            .join(request.filename.as_str());
        if request.kind.is_passthrough() {
            return Ok(PreparedDownload::Capture {
                path,
                attachment_name: request.attachment_name(),
            });
        }

        let mut file = NamedTempFile::new_in(&self.root)?;
        let outcome = if self.slicer_fails {
            BackendOutcome::Failed(FailureReason::Subprocess("exit 1".to_string()))
        } else {
            write!(file, "{}@{}", request.kind, request.offset.unwrap_or_default())?;
            BackendOutcome::Success(())
        };
        let temp_path = file.into_temp_path();
        self.rendered.lock().unwrap().push(temp_path.to_path_buf());

        Ok(PreparedDownload::Rendered {
            artifact: Box::new(MockArtifact(temp_path)),
            kind: request.kind,
            attachment_name: request.attachment_name(),
            outcome,
        })
    }

    fn release(&self, artifact: Box<dyn TempArtifact>) {
        self.released.fetch_add(1, Ordering::SeqCst);
        drop(artifact);
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct TestServer {
    pub client: Client,
    pub search: Arc<MockSearchService>,
    pub download: Arc<MockDownloadService>,
    pub dir: TempDir,
}

pub struct TestServerBuilder {
    search: BackendOutcome<ResultPage>,
    suggestions: Vec<&'static str>,
    autocomplete_fails: bool,
    services: BackendOutcome<Vec<String>>,
    slicer_fails: bool,
    config: AppConfig,
    index_page: Option<&'static str>,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        Self {
            search: BackendOutcome::Empty,
            suggestions: Vec::new(),
            autocomplete_fails: false,
            services: BackendOutcome::Empty,
            slicer_fails: false,
            config: AppConfig::default(),
            index_page: None,
        }
    }

    pub fn search(mut self, outcome: BackendOutcome<ResultPage>) -> Self {
        self.search = outcome;
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<&'static str>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn autocomplete_fails(mut self) -> Self {
        self.autocomplete_fails = true;
        self
    }

    pub fn services(mut self, outcome: BackendOutcome<Vec<String>>) -> Self {
        self.services = outcome;
        self
    }

    pub fn slicer_fails(mut self) -> Self {
        self.slicer_fails = true;
        self
    }

    pub fn config(mut self, f: impl FnOnce(&mut AppConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn index_page(mut self, html: &'static str) -> Self {
        self.index_page = Some(html);
        self
    }

    pub async fn build(self) -> TestServer {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        if let Some(html) = self.index_page {
            std::fs::write(static_dir.join("index.html"), html).unwrap();
        }

        let search = Arc::new(MockSearchService::new(self.search));
        let mut download = MockDownloadService::new(dir.path());
        download.slicer_fails = self.slicer_fails;
        let download = Arc::new(download);

        let services = AppServices {
            search: search.clone(),
            autocomplete: Arc::new(MockAutocompleteService {
                suggestions: self.suggestions,
                fail: self.autocomplete_fails,
            }),
            download: download.clone(),
            catalog: Arc::new(MockCatalogService(self.services)),
        };

        let server_config = ServerConfig {
            static_dir: Some(static_dir),
            ..self.config.server.clone()
        };
        let state = WebState::new(services, &self.config);
        let rocket = HttpServer::new(server_config, state).rocket();
        let client = Client::tracked(rocket).await.unwrap();

        TestServer {
            client,
            search,
            download,
            dir,
        }
    }
}
