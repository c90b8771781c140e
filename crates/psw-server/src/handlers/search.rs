//! Search handler

use super::error::{HandlerError, from_error};
use crate::state::WebState;
use psw_domain::value_objects::{BackendOutcome, NormalizedQuery, ResultPage};
use rocket::serde::json::Json;
use rocket::{State, get};
use tracing::debug;

/// One page of search results
///
/// `page` is zero-based; anything that is not a number reads as the first
/// page. Backend failures answer with an empty page.
#[get("/api/search?<q>&<service>&<page>")]
pub async fn search(
    state: &State<WebState>,
    q: Option<String>,
    service: Option<String>,
    page: Option<String>,
) -> Result<Json<ResultPage>, HandlerError> {
    let raw_query = q.unwrap_or_default();
    let selector = state
        .selector(service.as_deref())
        .map_err(|e| from_error(&e))?;
    let page = page
        .and_then(|page| page.trim().parse::<u32>().ok())
        .unwrap_or(0);

    let outcome = state
        .services
        .search
        .search(&raw_query, &selector, page)
        .await;
    if let BackendOutcome::Failed(reason) = &outcome {
        debug!(%reason, "answering search with an empty page");
    }

    Ok(Json(outcome.unwrap_or_else(|| {
        ResultPage::empty(NormalizedQuery::new(&raw_query))
    })))
}
