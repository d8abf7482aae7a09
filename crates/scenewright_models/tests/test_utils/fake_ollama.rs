//! Minimal HTTP/1.1 server standing in for Ollama.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Status and body returned for one endpoint.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: u16,
    body: String,
}

impl CannedResponse {
    /// `200 OK` with a JSON body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Any status with a body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Serves `/api/tags` and `/api/generate` from canned responses.
pub struct FakeOllama {
    base_url: String,
    handle: JoinHandle<()>,
}

impl FakeOllama {
    /// Bind an ephemeral port and start answering.
    pub async fn start(tags: CannedResponse, generate: CannedResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let tags = tags.clone();
                let generate = generate.clone();
                tokio::spawn(async move {
                    serve(stream, &tags, &generate).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Root URL of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for FakeOllama {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(mut stream: TcpStream, tags: &CannedResponse, generate: &CannedResponse) {
    let Some((path, _body)) = read_request(&mut stream).await else {
        return;
    };

    let canned = if path.starts_with("/api/tags") {
        tags.clone()
    } else if path.starts_with("/api/generate") {
        generate.clone()
    } else {
        CannedResponse::status(404, "not found")
    };

    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.status,
        canned.body.len(),
        canned.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Read one request, returning its path and body.
async fn read_request(stream: &mut TcpStream) -> Option<(String, Vec<u8>)> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let path = head.lines().next()?.split_whitespace().nth(1)?.to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    Some((path, buffer[header_end..].to_vec()))
}
