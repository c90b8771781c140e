//! # pcap-search-web Server
//!
//! HTTP surface over the use cases of `psw-application`.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/search?q=&service=&page=` | [`handlers::search::search`] |
//! | `GET /api/autocomplete?q=&service=` | [`handlers::autocomplete::autocomplete`] |
//! | `GET /api/list` | [`handlers::catalog::list_services`] |
//! | `GET /download?filename=&offset=&type=&service=` | [`handlers::download::download`] |
//! | `GET /` | entry page from the static directory |
//!
//! Backend trouble never turns into an HTTP error: the JSON endpoints answer
//! 200 with an empty payload. Only malformed requests are refused, with 412.
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     psw_server::run(None, psw_server::ServerOverrides::default()).await
//! }
//! ```

pub mod constants;
pub mod handlers;
pub mod http;
pub mod init;
pub mod state;

pub use http::{Cors, HttpServer};
pub use init::{ServerOverrides, run};
pub use state::WebState;
