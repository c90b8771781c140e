//! Autocomplete handler

use super::error::{HandlerError, from_error};
use crate::state::WebState;
use psw_domain::value_objects::{NormalizedQuery, SuggestionList};
use rocket::serde::json::Json;
use rocket::{State, get};

/// Suggestions for a query prefix; empty when the backend fails
#[get("/api/autocomplete?<q>&<service>")]
pub async fn autocomplete(
    state: &State<WebState>,
    q: Option<String>,
    service: Option<String>,
) -> Result<Json<SuggestionList>, HandlerError> {
    let raw_query = q.unwrap_or_default();
    let selector = state
        .selector(service.as_deref())
        .map_err(|e| from_error(&e))?;

    let outcome = state
        .services
        .autocomplete
        .suggest(&raw_query, &selector)
        .await;

    Ok(Json(outcome.unwrap_or_else(|| {
        SuggestionList::empty(NormalizedQuery::new(&raw_query))
    })))
}
