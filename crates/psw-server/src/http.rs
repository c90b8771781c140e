//! HTTP server
//!
//! Builds the Rocket application: API routes, the CORS fairing and the
//! static entry page.

use crate::constants::{INDEX_FILE, ROCKET_LOG_LEVEL, STATIC_FILES_RANK};
use crate::handlers;
use crate::state::WebState;
use psw_infrastructure::config::ServerConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::{FileServer, Options};
use rocket::http::Header;
use rocket::{Build, Ignite, Request, Response, Rocket, routes};
use tracing::{info, warn};

/// HTTP server
#[derive(Debug)]
pub struct HttpServer {
    config: ServerConfig,
    state: WebState,
}

impl HttpServer {
    /// Create a server for `state`
    pub fn new(config: ServerConfig, state: WebState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            .merge(("log_level", ROCKET_LOG_LEVEL));

        let mut rocket = rocket::custom(figment).manage(self.state.clone()).mount(
            "/",
            routes![
                handlers::search::search,
                handlers::autocomplete::autocomplete,
                handlers::catalog::list_services,
                handlers::download::download,
            ],
        );

        match &self.config.static_dir {
            Some(dir) if dir.join(INDEX_FILE).is_file() => {
                let files = FileServer::new(dir, Options::Index).rank(STATIC_FILES_RANK);
                rocket = rocket.mount("/", files);
            }
            Some(dir) => warn!(
                static_dir = %dir.display(),
                "no {} in the static directory, entry page disabled",
                INDEX_FILE
            ),
            None => {}
        }

        if self.config.cors {
            rocket = rocket.attach(Cors);
        }
        rocket
    }

    /// Serve until Rocket shuts down (Ctrl+C or SIGTERM)
    pub async fn launch(self) -> Result<Rocket<Ignite>, Box<rocket::Error>> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            "HTTP server listening"
        );
        self.rocket().launch().await.map_err(Box::new)
    }
}

/// CORS Fairing for Rocket
///
/// Lets pages served from elsewhere call the API.
#[derive(Debug)]
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
    }
}
