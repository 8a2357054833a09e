//! Fetcher tests against a one-shot local HTTP server.
//!
//! Each server accepts a single connection, captures the request line and
//! answers with a canned response, so no test touches the public endpoint.

use sentilab_core::data::{AlternativeMeProvider, SentimentProvider};
use sentilab_core::SentimentError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

struct OneShotServer {
    url: String,
    request_line: mpsc::Receiver<String>,
}

fn serve_once(status_line: &str, content_type: &str, body: &str) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        let _ = tx.send(first.trim_end().to_string());
    });

    OneShotServer {
        url: format!("http://{addr}/fng/"),
        request_line: rx,
    }
}

fn provider(url: &str) -> AlternativeMeProvider {
    AlternativeMeProvider::with_endpoint(url, Duration::from_secs(5)).unwrap()
}

#[test]
fn service_unavailable_is_service_error_503() {
    let server = serve_once("503 Service Unavailable", "text/plain", "try later");
    let err = provider(&server.url).fetch(365).unwrap_err();
    assert!(
        matches!(err, SentimentError::Service { status: 503 }),
        "got {err:?}"
    );
}

#[test]
fn not_found_is_service_error_404() {
    let server = serve_once("404 Not Found", "text/plain", "");
    let err = provider(&server.url).fetch(1).unwrap_err();
    assert!(matches!(err, SentimentError::Service { status: 404 }));
}

#[test]
fn success_returns_raw_payload_and_sends_limit() {
    let body = r#"{"name":"Fear and Greed Index","data":[{"value":"40","value_classification":"Fear","timestamp":"1700000000"}],"metadata":{"error":null}}"#;
    let server = serve_once("200 OK", "application/json", body);

    let payload = provider(&server.url).fetch(30).unwrap();
    assert_eq!(payload["data"][0]["value"], "40");
    assert_eq!(payload["name"], "Fear and Greed Index");

    let request_line = server
        .request_line
        .recv_timeout(Duration::from_secs(5))
        .unwrap();
    assert!(
        request_line.starts_with("GET /fng/?limit=30 "),
        "request line: {request_line}"
    );
}

#[test]
fn non_json_body_is_decode_error() {
    let server = serve_once("200 OK", "text/html", "<html>down for maintenance</html>");
    let err = provider(&server.url).fetch(7).unwrap_err();
    assert!(matches!(err, SentimentError::Decode(_)), "got {err:?}");
}

#[test]
fn refused_connection_is_network_error() {
    // Bind then drop to obtain a port with nothing listening.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = provider(&format!("http://127.0.0.1:{port}/fng/"))
        .fetch(7)
        .unwrap_err();
    assert!(matches!(err, SentimentError::Network(_)), "got {err:?}");
    assert_eq!(err.kind(), "NetworkError");
}

#[test]
fn silent_server_times_out_as_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold the connection without ever answering.
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let provider = AlternativeMeProvider::with_endpoint(
        &format!("http://{addr}/fng/"),
        Duration::from_millis(200),
    )
    .unwrap();
    let started = std::time::Instant::now();
    let err = provider.fetch(7).unwrap_err();

    assert!(matches!(err, SentimentError::Network(_)), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
}
