//! Fail-soft behaviour of the full stack

use psw_infrastructure::config::AppConfig;
use psw_infrastructure::di::init_app;
use psw_server::{HttpServer, WebState};
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;

fn config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.backend.pcap_dir = dir.path().join("pcap");
    config.backend.search_socket = dir.path().join("search.sock");
    config.backend.flow_socket = dir.path().join("flow.sock");
    config.backend.search_timeout_secs = 1;
    config.server.static_dir = None;
    config
}

async fn client(config: AppConfig) -> Client {
    let server_config = config.server.clone();
    let context = init_app(config).unwrap();
    let rocket = HttpServer::new(server_config, WebState::from_context(&context)).rocket();
    Client::tracked(rocket).await.unwrap()
}

#[rocket::async_test]
async fn test_silent_search_daemon_times_out_to_empty_page() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let listener = UnixListener::bind(&config.backend.search_socket).unwrap();
    // Accepts and holds every connection without answering
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    let client = client(config).await;

    let started = Instant::now();
    let response = client.get("/api/search?q=GET").dispatch().await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body, json!({"query": "GET", "total": 0, "results": {}}));
}

#[rocket::async_test]
async fn test_unreachable_daemons_still_answer_200() {
    let dir = TempDir::new().unwrap();
    let client = client(config(&dir)).await;

    let search = client.get("/api/search?q=x").dispatch().await;
    assert_eq!(search.status(), Status::Ok);

    let autocomplete = client.get("/api/autocomplete?q=x").dispatch().await;
    assert_eq!(autocomplete.status(), Status::Ok);
    let body: Value = autocomplete.into_json().await.unwrap();
    assert_eq!(body, json!({"query": "x", "suggestions": []}));

    // The capture root does not exist either
    let list = client.get("/api/list").dispatch().await;
    assert_eq!(list.into_string().await.unwrap(), "[]");
}

#[rocket::async_test]
async fn test_search_enriches_from_flow_daemon() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let pcap = config.backend.pcap_dir.display().to_string();

    let search = UnixListener::bind(&config.backend.search_socket).unwrap();
    let hits = format!(
        "{pcap}/http/a.cap.ap\t100\t3\n{pcap}/http/a.cap.ap\t200\t3\n{pcap}/http/b.cap.ap\t300\t3\n10000\n"
    );
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = search.accept().await {
            let mut request = Vec::new();
            stream.read_to_end(&mut request).await.unwrap();
            stream.write_all(hits.as_bytes()).await.unwrap();
        }
    });

    // Offset 200 belongs to a flow without a known capture time
    let flow = UnixListener::bind(&config.backend.flow_socket).unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = flow.accept().await {
            let mut request = Vec::new();
            stream.read_to_end(&mut request).await.unwrap();
            let request = String::from_utf8_lossy(&request).into_owned();
            let answer = if request.contains("\0200\0") {
                "-1\t51234\t80\tGET /hidden"
            } else {
                "1400000000\t51234\t80\tGET /"
            };
            stream.write_all(answer.as_bytes()).await.unwrap();
        }
    });
    let client = client(config).await;

    let response = client
        .get("/api/search?q=GET&service=http")
        .dispatch()
        .await;

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["total"], 600);
    assert_eq!(
        body["results"],
        json!({
            "a.cap": [{"offset": 100, "epoch": 1_400_000_000, "port0": 80, "port1": 51234, "context": "GET /"}],
            "b.cap": [{"offset": 300, "epoch": 1_400_000_000, "port0": 80, "port1": 51234, "context": "GET /"}]
        })
    );
}
