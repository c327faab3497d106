//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Raw-TCP mock upstream answering every request with a fixed status and
/// body. Counts calls and records request lines so tests can assert what
/// actually went over the wire (or that nothing did).
pub struct MockUpstream {
    addr: SocketAddr,
    calls: Arc<AtomicU32>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let calls = Arc::new(AtomicU32::new(0));
        let request_lines = Arc::new(Mutex::new(Vec::new()));

        let call_counter = calls.clone();
        let lines = request_lines.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((mut socket, _)) => {
                        call_counter.fetch_add(1, Ordering::SeqCst);
                        let lines = lines.clone();
                        tokio::spawn(async move {
                            // Read the request head before answering so the
                            // client never sees a reset mid-write.
                            let mut buf = [0u8; 1024];
                            if let Ok(n) = socket.read(&mut buf).await {
                                let head = String::from_utf8_lossy(&buf[..n]).to_string();
                                if let Some(line) = head.lines().next() {
                                    lines.lock().unwrap().push(line.to_string());
                                }
                            }

                            let status_text = match status {
                                200 => "200 OK",
                                201 => "201 Created",
                                404 => "404 Not Found",
                                429 => "429 Too Many Requests",
                                500 => "500 Internal Server Error",
                                503 => "503 Service Unavailable",
                                _ => "200 OK",
                            };
                            let response = format!(
                                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status_text,
                                body.len(),
                                body
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Self {
            addr,
            calls,
            request_lines,
        }
    }

    /// Base address suitable for a resolver entry.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of connections accepted so far.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// First line of each request received, in order.
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}
