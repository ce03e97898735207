use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;

use actix_web::http::{Method, StatusCode};
use request_capture::server::{self, ServerSettings};

struct Running {
    base_url: String,
    handle: actix_web::dev::ServerHandle,
}

fn start(save: bool, requests_dir: PathBuf) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let settings = ServerSettings {
        bind_addr: "127.0.0.1".to_string(),
        port,
        save,
        requests_dir,
    };
    let server = server::serve(listener, &settings).unwrap();
    let handle = server.handle();
    actix_rt::spawn(server);
    Running {
        base_url: format!("http://127.0.0.1:{}", port),
        handle,
    }
}

#[actix_web::test]
async fn json_post_is_acknowledged_with_cors() {
    let running = start(false, PathBuf::from("unused"));
    let client = awc::Client::default();

    let mut response = client
        .post(format!("{}/webhook", running.base_url))
        .insert_header(("Content-Type", "application/json"))
        .send_body(r#"{"a": 1, "b": 2}"#)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        response.headers().get("access-control-allow-methods").unwrap(),
        "GET, POST, PUT, DELETE, PATCH, OPTIONS"
    );
    let acknowledgement: serde_json::Value = response.json().await.unwrap();
    assert_eq!(acknowledgement["status"], "received");
    assert_eq!(acknowledgement["method"], "POST");
    assert_eq!(acknowledgement["path"], "/webhook");

    running.handle.stop(true).await;
}

#[actix_web::test]
async fn get_without_body_is_acknowledged() {
    let running = start(false, PathBuf::from("unused"));
    let client = awc::Client::default();

    let mut response = client.get(format!("{}/ping", running.base_url)).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let acknowledgement: serde_json::Value = response.json().await.unwrap();
    assert_eq!(acknowledgement["method"], "GET");
    assert_eq!(acknowledgement["path"], "/ping");

    running.handle.stop(true).await;
}

#[actix_web::test]
async fn sequential_requests_are_saved_to_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let requests_dir = dir.path().join("requests");
    let running = start(true, requests_dir.clone());
    let client = awc::Client::default();

    for i in 0..5 {
        let response = client
            .put(format!("{}/items/{}", running.base_url, i))
            .send_body(format!("item number {}", i))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let preflight = client
        .request(Method::OPTIONS, format!("{}/items/0", running.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::OK);

    running.handle.stop(true).await;

    let mut sequences: Vec<u32> = fs::read_dir(&requests_dir)
        .unwrap()
        .map(|entry| {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            let number = name.trim_end_matches(".txt").rsplit('_').next().unwrap().to_string();
            number.parse().unwrap()
        })
        .collect();
    sequences.sort_unstable();
    assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
}

#[actix_web::test]
async fn preflight_has_no_body() {
    let running = start(false, PathBuf::from("unused"));
    let client = awc::Client::default();

    let mut response = client
        .request(Method::OPTIONS, format!("{}/anything", running.base_url))
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("access-control-allow-headers").unwrap(), "*");
    assert!(response.headers().get("content-type").is_none());
    assert!(response.body().await.unwrap().is_empty());

    running.handle.stop(true).await;
}
