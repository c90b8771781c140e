//! Request-independent handler state

use psw_domain::error::Result;
use psw_domain::value_objects::ServiceSelector;
use psw_infrastructure::config::AppConfig;
use psw_infrastructure::di::{AppContext, AppServices};

/// Services plus the few configuration values the handlers need
#[derive(Debug, Clone)]
pub struct WebState {
    /// Use case services
    pub services: AppServices,
    /// Service used when a request names none; empty means every service
    pub default_service: String,
}

impl WebState {
    /// Create handler state
    pub fn new(services: AppServices, config: &AppConfig) -> Self {
        Self {
            services,
            default_service: config.backend.default_service.clone(),
        }
    }

    /// Handler state for a bootstrapped application
    pub fn from_context(context: &AppContext) -> Self {
        Self::new(context.services().clone(), &context.config())
    }

    /// Interpret the `service` parameter of the search endpoints
    pub fn selector(&self, service: Option<&str>) -> Result<ServiceSelector> {
        ServiceSelector::from_param(Some(service.unwrap_or(self.default_service.as_str())))
    }

    /// The `service` parameter of a download, falling back to the default
    ///
    /// Downloads always need one directory; without a configured default
    /// the request-level fallback applies.
    pub fn download_service<'a>(&'a self, service: Option<&'a str>) -> Option<&'a str> {
        service.or_else(|| {
            (!self.default_service.is_empty()).then_some(self.default_service.as_str())
        })
    }
}
