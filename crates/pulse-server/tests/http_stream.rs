#![allow(missing_docs)]

//! End-to-end tests over a real TCP listener: headers, frame sequencing,
//! landing page, and server health across client disconnects.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use pulse_render::TemplateRenderer;
use pulse_server::router;
use pulse_server::sse::clock::ClockSource;
use pulse_server::state::{AppState, StreamConfig};

async fn spawn_server() -> SocketAddr {
    let renderer = TemplateRenderer::from_sources([
        ("index.html", "<h1>pulse</h1>"),
        ("event.html", "<div>{{ data }}</div>"),
    ])
    .unwrap();
    let state = AppState::new(
        Arc::new(renderer),
        Arc::new(ClockSource),
        StreamConfig {
            interval: Duration::from_millis(20),
            ..StreamConfig::default()
        },
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Read from the response until `count` complete frames have arrived.
async fn read_frames(resp: reqwest::Response, count: usize) -> String {
    let mut stream = resp.bytes_stream();
    let mut buf = String::new();
    while buf.matches("\n\n").count() < count {
        let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("timed out waiting for frames")
            .expect("stream ended early")
            .unwrap();
        buf.push_str(std::str::from_utf8(&chunk).unwrap());
    }
    buf
}

#[tokio::test]
async fn sse_endpoint_sets_stream_headers() {
    let addr = spawn_server().await;
    let resp = reqwest::get(format!("http://{addr}/sse")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let headers = resp.headers();
    assert_eq!(headers["content-type"], "text/event-stream");
    assert_eq!(headers["cache-control"], "no-cache");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn sse_endpoint_streams_sequenced_frames() {
    let addr = spawn_server().await;
    let resp = reqwest::get(format!("http://{addr}/sse")).await.unwrap();
    let body = read_frames(resp, 2).await;

    assert!(
        body.starts_with("id: 0\nevent: message\ndata: <div>"),
        "unexpected first frame: {body:?}"
    );
    assert!(body.contains("id: 1\nevent: message\ndata: <div>"));
    // Every data line is newline-free by construction.
    for line in body.lines().filter(|l| l.starts_with("data: ")) {
        assert!(line.ends_with("</div>"));
    }
}

#[tokio::test]
async fn client_disconnect_leaves_server_healthy() {
    let addr = spawn_server().await;

    let resp = reqwest::get(format!("http://{addr}/sse")).await.unwrap();
    let _ = read_frames(resp, 1).await;
    // Response dropped here — client gone.

    // A fresh connection still streams from sequence 0.
    let resp = reqwest::get(format!("http://{addr}/sse")).await.unwrap();
    let body = read_frames(resp, 1).await;
    assert!(body.starts_with("id: 0\n"));
}

#[tokio::test]
async fn landing_page_renders() {
    let addr = spawn_server().await;
    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = resp.text().await.unwrap();
    assert!(body.contains("<h1>pulse</h1>"));
}

#[tokio::test]
async fn metrics_endpoint_is_404_without_recorder() {
    let addr = spawn_server().await;
    let resp = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
