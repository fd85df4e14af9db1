//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use rocket_gateway::config::GatewayConfig;
use rocket_gateway::HttpServer;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Start a programmable mock upstream on an ephemeral port.
///
/// Each connection gets the `(status, body)` produced by `f`.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                drain_request(&mut socket).await;
                let (status, body) = f().await;
                let reason = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown");

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start a mock upstream that always answers `status` with `body`.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_upstream(move || async move { (status, body.to_string()) }).await
}

/// Start a mock upstream that promises more body than it sends, then hangs up.
pub async fn start_truncating_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                drain_request(&mut socket).await;
                let response = "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"a\":";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start a mock upstream that accepts the request and then stalls.
///
/// With `send_headers`, a 200 status line and headers go out first and the
/// body never follows; otherwise nothing is written at all.
pub async fn start_hanging_upstream(send_headers: bool) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                drain_request(&mut socket).await;
                if send_headers {
                    let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n[";
                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.flush().await;
                }
                tokio::time::sleep(Duration::from_secs(60)).await;
                drop(socket);
            });
        }
    });

    addr
}

/// An address that refuses connections: port 1 on loopback is reserved
/// and never bound by the tests.
pub fn unreachable_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 1))
}

/// Gateway router whose upstream is `http://{addr}/v4/rockets`.
pub fn gateway_for(addr: SocketAddr) -> axum::Router {
    gateway_with_upstream_timeout(addr, 5)
}

/// Same as [`gateway_for`] with an explicit upstream deadline.
pub fn gateway_with_upstream_timeout(addr: SocketAddr, timeout_secs: u64) -> axum::Router {
    let mut config = GatewayConfig::default();
    config.upstream.url = format!("http://{}/v4/rockets", addr);
    config.upstream.timeout_secs = timeout_secs;
    config.upstream.connect_timeout_secs = timeout_secs;
    config.upstream.system_proxy = false;
    HttpServer::new(config).unwrap().router()
}

/// Drive one request through the router.
pub async fn send(router: axum::Router, method: &str, path: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn drain_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = [0u8; 4096];
    let mut seen = Vec::new();
    while let Ok(n) = socket.read(&mut buf).await {
        if n == 0 {
            break;
        }
        seen.extend_from_slice(&buf[..n]);
        if seen.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
}
