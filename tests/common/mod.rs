//! Shared helpers for tests that talk to a local stand-in for RubyGems

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Canned response for a request path
pub struct Route {
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    /// A 200 response carrying gem metadata
    pub fn gem(name: &str, info: &str) -> Self {
        Self {
            path: format!("/api/v1/gems/{}.json", name),
            status: 200,
            body: format!(r#"{{"name":"{}","info":"{}","version":"1.0.0"}}"#, name, info),
        }
    }

    /// A bare status response for a gem
    pub fn status(name: &str, status: u16) -> Self {
        Self {
            path: format!("/api/v1/gems/{}.json", name),
            status,
            body: String::new(),
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Serve the routes on an ephemeral local port and return the gems API base URL
///
/// Unknown paths answer 404. The server thread lives until the test process exits.
pub fn spawn_registry(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind local port");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("/");

            let (status, body) = routes
                .iter()
                .find(|r| r.path == path)
                .map(|r| (r.status, r.body.as_str()))
                .unwrap_or((404, ""));

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/api/v1/gems", addr)
}
