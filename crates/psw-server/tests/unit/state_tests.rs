//! Handler state tests

use crate::test_utils::TestServerBuilder;
use psw_domain::value_objects::ServiceSelector;
use psw_infrastructure::config::AppConfig;
use psw_infrastructure::di::init_app;
use psw_server::WebState;

#[test]
fn test_selector_and_download_fallbacks() {
    let mut config = AppConfig::default();
    config.backend.default_service = String::new();
    let context = init_app(config).unwrap();
    let state = WebState::from_context(&context);

    assert_eq!(state.selector(None).unwrap(), ServiceSelector::Unrestricted);
    assert!(state.selector(Some("..")).is_err());
    assert_eq!(state.download_service(None), None);
    assert_eq!(state.download_service(Some("http")), Some("http"));
}

#[rocket::async_test]
async fn test_unknown_route_is_not_found() {
    let server = TestServerBuilder::new().build().await;

    let response = server.client.get("/api/unknown").dispatch().await;

    assert_eq!(response.status(), rocket::http::Status::NotFound);
}
