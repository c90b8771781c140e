//! Service listing handler

use crate::state::WebState;
use rocket::serde::json::Json;
use rocket::{State, get};

/// Names of the service directories under the capture root
#[get("/api/list")]
pub async fn list_services(state: &State<WebState>) -> Json<Vec<String>> {
    Json(
        state
            .services
            .catalog
            .list_services()
            .await
            .unwrap_or_else(Vec::new),
    )
}
