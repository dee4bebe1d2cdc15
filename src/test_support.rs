//! In-process HTTP stub for exercising the outbound clients.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Answers every connection with the same status and body
pub struct StubServer {
    addr: std::net::SocketAddr,
    requests: Mutex<mpsc::UnboundedReceiver<CapturedRequest>>,
}

impl StubServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let body = body.to_string();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let tx = tx.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, status, &body, tx).await;
                });
            }
        });

        Self {
            addr,
            requests: Mutex::new(rx),
        }
    }

    /// URL of a port nothing listens on
    pub async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn request(&self) -> CapturedRequest {
        self.requests.lock().await.recv().await.unwrap()
    }
}

async fn serve(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    tx: mpsc::UnboundedSender<CapturedRequest>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request_body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    let _ = tx.send(CapturedRequest {
        head,
        body: request_body,
    });

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
