//! `/api/list` Tests

use crate::test_utils::TestServerBuilder;
use psw_domain::value_objects::{BackendOutcome, FailureReason};
use rocket::http::Status;

#[rocket::async_test]
async fn test_list_services() {
    let server = TestServerBuilder::new()
        .services(BackendOutcome::Success(vec![
            "dns".to_string(),
            "http".to_string(),
        ]))
        .build()
        .await;

    let response = server.client.get("/api/list").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body: Vec<String> = response.into_json().await.unwrap();
    assert_eq!(body, ["dns", "http"]);
}

#[rocket::async_test]
async fn test_unreadable_capture_root_lists_nothing() {
    let server = TestServerBuilder::new()
        .services(BackendOutcome::Failed(FailureReason::Other(
            "permission denied".to_string(),
        )))
        .build()
        .await;

    let response = server.client.get("/api/list").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "[]");
}
