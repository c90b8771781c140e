//! Application bootstrap
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let page = context.services().search.search("GET", &selector, 0).await;
//! context.shutdown().await;
//! ```

use crate::artifacts::TempArtifactStore;
use crate::config::loader::validate_app_config;
use crate::config::{AppConfig, FlowMode};
use psw_application::ports::{
    AutocompleteServiceInterface, CatalogServiceInterface, DownloadServiceInterface,
    SearchServiceInterface,
};
use psw_application::use_cases::{
    AutocompleteServiceImpl, CatalogServiceImpl, DownloadServiceImpl, SearchServiceImpl,
};
use psw_domain::error::Result;
use psw_domain::ports::infrastructure::ArtifactStore;
use psw_domain::ports::providers::{FlowLookup, PcapSlicer, SearchBackend, ServiceCatalog};
use psw_providers::{
    FilesystemServiceCatalog, SocketFlowLookup, SubprocessFlowLookup, SubprocessPcapSlicer,
    UnixSocketSearchBackend,
};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// One trait object per endpoint family
#[derive(Clone)]
pub struct AppServices {
    /// `/api/search`
    pub search: Arc<dyn SearchServiceInterface>,
    /// `/api/autocomplete`
    pub autocomplete: Arc<dyn AutocompleteServiceInterface>,
    /// `/download`
    pub download: Arc<dyn DownloadServiceInterface>,
    /// `/api/list`
    pub catalog: Arc<dyn CatalogServiceInterface>,
}

impl fmt::Debug for AppServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// Configuration and services shared by every request
pub struct AppContext {
    config: Arc<AppConfig>,
    services: AppServices,
    artifacts: Option<Arc<TempArtifactStore>>,
}

impl AppContext {
    /// Wrap services built elsewhere, typically test doubles
    pub fn new(config: AppConfig, services: AppServices) -> Self {
        Self {
            config: Arc::new(config),
            services,
            artifacts: None,
        }
    }

    /// Application configuration
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Use case services
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    /// Delete every pending rendering now
    pub async fn shutdown(&self) {
        if let Some(artifacts) = &self.artifacts {
            info!(pending = artifacts.pending(), "Flushing temporary renderings");
            artifacts.shutdown().await;
        }
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("artifacts", &self.artifacts)
            .finish_non_exhaustive()
    }
}

/// Build the production adapters and use cases from `config`
///
/// The configuration is validated again, since it may not have come
/// through the loader. Nothing is contacted here; daemons and helpers are
/// reached per request.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");
    validate_app_config(&config)?;
    let config = Arc::new(config);
    let backend = &config.backend;

    let catalog: Arc<dyn ServiceCatalog> =
        Arc::new(FilesystemServiceCatalog::new(&backend.pcap_dir));
    let search: Arc<dyn SearchBackend> = Arc::new(UnixSocketSearchBackend::new(
        &backend.search_socket,
        backend.search_timeout(),
        config.search.pagination(),
    ));
    let flow: Arc<dyn FlowLookup> = match config.flow.mode {
        FlowMode::Socket => Arc::new(SocketFlowLookup::new(&backend.flow_socket)),
        FlowMode::Subprocess => Arc::new(SubprocessFlowLookup::new(
            config.flow.context_command.clone(),
        )),
    };
    let slicer: Arc<dyn PcapSlicer> = Arc::new(SubprocessPcapSlicer::new(
        config.slicer.command.clone(),
        config.slicer.timeout(),
    ));
    let artifacts = Arc::new(TempArtifactStore::new(
        config.slicer.temp_dir.clone(),
        config.slicer.cleanup_grace(),
    ));
    info!(
        pcap_dir = %backend.pcap_dir.display(),
        search_socket = %backend.search_socket.display(),
        flow_mode = ?config.flow.mode,
        "Created backend providers"
    );

    let artifact_port: Arc<dyn ArtifactStore> = artifacts.clone();

    let services = AppServices {
        search: Arc::new(SearchServiceImpl::new(
            Arc::clone(&search),
            flow,
            Arc::clone(&catalog),
            config.search.pagination(),
            config.flow.lookup_timeout(),
        )),
        autocomplete: Arc::new(AutocompleteServiceImpl::new(
            search,
            Arc::clone(&slicer),
            Arc::clone(&catalog),
            config.autocomplete.mode,
            backend.search_timeout(),
        )),
        download: Arc::new(DownloadServiceImpl::new(
            slicer,
            Arc::clone(&catalog),
            artifact_port,
        )),
        catalog: Arc::new(CatalogServiceImpl::new(catalog)),
    };
    info!("Created use case services");

    Ok(AppContext {
        config,
        services,
        artifacts: Some(artifacts),
    })
}
