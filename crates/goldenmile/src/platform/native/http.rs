//! Blocking HTTP client for the advisory backend.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use goldenmile_core::error::body_excerpt;
use goldenmile_core::{
    FailureReason, ReportRequest, ReportTransport, SubmitOutcome, decode_generate_response,
    join_url,
};
use jiff::Zoned;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

use crate::util::files::{
    DEFAULT_REPORT_NAME, atomic_write_bytes, filename_from_content_disposition, unique_path,
};

#[derive(Debug)]
pub enum TransportError {
    /// The client could not be built (bad TLS setup, invalid URL)
    Client(String),
    Network(String),
    Status { code: u16, body: String },
    Io(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Client(msg) => write!(f, "could not create HTTP client: {}", msg),
            TransportError::Network(msg) => write!(f, "request failed: {}", msg),
            TransportError::Status { code, body } => {
                let excerpt = body_excerpt(body);
                if excerpt.is_empty() {
                    write!(f, "server returned HTTP {}", code)
                } else {
                    write!(f, "server returned HTTP {}: {}", code, excerpt)
                }
            }
            TransportError::Io(msg) => write!(f, "could not save report: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Client for `base_url`. `timeout` bounds each whole request; `None`
    /// waits forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("goldenmile/", env!("CARGO_PKG_VERSION")));

        // A local backend must not be routed through a system proxy
        if is_loopback(base_url) {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and save the body.
    ///
    /// When `target` is a directory the file is named from the
    /// `Content-Disposition` header and never overwrites an existing file;
    /// otherwise `target` is the exact output path.
    pub fn download_to(&self, endpoint: &str, target: &Path) -> Result<PathBuf, TransportError> {
        let url = join_url(&self.base_url, endpoint);
        tracing::debug!(url = %url, "Downloading report");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let suggested = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_content_disposition);

        let bytes = response
            .bytes()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let path = if target.is_dir() {
            let name = suggested.as_deref().unwrap_or(DEFAULT_REPORT_NAME);
            unique_path(target, name, &Zoned::now())
        } else {
            target.to_path_buf()
        };

        atomic_write_bytes(&path, &bytes)
            .map_err(|e| TransportError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Report saved");
        Ok(path)
    }
}

impl ReportTransport for HttpClient {
    fn generate(&self, endpoint: &str, request: &ReportRequest) -> SubmitOutcome {
        let body = match request.to_json() {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::Failure(FailureReason::Encode(e.to_string())),
        };
        let url = join_url(&self.base_url, endpoint);

        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
        {
            Ok(response) => response,
            Err(e) => return SubmitOutcome::Failure(FailureReason::Network(e.to_string())),
        };

        let status = response.status().as_u16();
        match response.text() {
            Ok(text) => decode_generate_response(status, &text),
            Err(e) => SubmitOutcome::Failure(FailureReason::Network(e.to_string())),
        }
    }
}

fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url.trim())
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldenmile_core::MetroFlag;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};
    use tempfile::tempdir;

    /// Answer exactly one request with a canned response and hand back the
    /// raw request text.
    fn serve_once(status: &str, headers: &[(&str, &str)], body: &[u8]) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let mut response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n",
            body.len()
        )
        .into_bytes();
        for (name, value) in headers {
            response.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
        }
        response.extend_from_slice(b"\r\n");
        response.extend_from_slice(body);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(&response).unwrap();
            request
        });

        (format!("http://{addr}"), handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn austin_request() -> ReportRequest {
        ReportRequest {
            city: "Austin".into(),
            budget: 500000.0,
            size: 2000.0,
            intent: "flip".into(),
            metro: Some(MetroFlag::No),
        }
    }

    fn client(base_url: &str) -> HttpClient {
        HttpClient::new(base_url, Some(Duration::from_secs(10))).unwrap()
    }

    #[test]
    fn test_generate_posts_json() {
        let (url, server) = serve_once(
            "200 OK",
            &[("Content-Type", "application/json")],
            br#"{"analysis":"Good investment."}"#,
        );

        let outcome = client(&url).generate("/generate", &austin_request());
        assert_eq!(outcome, SubmitOutcome::Success("Good investment.".into()));

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /generate HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(
            r#"{"city":"Austin","budget":500000,"size":2000,"intent":"flip","metro":"No"}"#
        ));
    }

    #[test]
    fn test_generate_server_error() {
        let (url, server) = serve_once("500 INTERNAL SERVER ERROR", &[], b"boom");

        let outcome = client(&url).generate("/generate", &austin_request());
        assert_eq!(
            outcome,
            SubmitOutcome::Failure(FailureReason::Status {
                code: 500,
                body: "boom".into()
            })
        );
        server.join().unwrap();
    }

    #[test]
    fn test_generate_connection_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let outcome = client(&format!("http://127.0.0.1:{port}")).generate("/generate", &austin_request());
        assert!(matches!(
            outcome,
            SubmitOutcome::Failure(FailureReason::Network(_))
        ));
    }

    #[test]
    fn test_download_names_file_from_header() {
        let (url, server) = serve_once(
            "200 OK",
            &[
                ("Content-Type", "application/pdf"),
                (
                    "Content-Disposition",
                    "attachment; filename=Golden_Mile_Advisory_Report.pdf",
                ),
            ],
            b"%PDF-1.4 report",
        );
        let dir = tempdir().unwrap();

        let path = client(&url).download_to("/download", dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Golden_Mile_Advisory_Report.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 report");
        assert!(server.join().unwrap().starts_with("GET /download HTTP/1.1"));
    }

    #[test]
    fn test_download_does_not_overwrite() {
        let (url, server) = serve_once("200 OK", &[], b"new");
        let dir = tempdir().unwrap();
        let existing = dir.path().join(DEFAULT_REPORT_NAME);
        std::fs::write(&existing, b"old").unwrap();

        let path = client(&url).download_to("/download", dir.path()).unwrap();

        assert_ne!(path, existing);
        assert_eq!(std::fs::read(&existing).unwrap(), b"old");
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        server.join().unwrap();
    }

    #[test]
    fn test_download_before_any_report() {
        let (url, server) = serve_once("400 BAD REQUEST", &[], b"No report generated yet");
        let dir = tempdir().unwrap();

        let err = client(&url)
            .download_to("/download", dir.path())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "server returned HTTP 400: No report generated yet"
        );
        server.join().unwrap();
    }

    #[test]
    fn test_is_loopback() {
        assert!(is_loopback("http://127.0.0.1:5001"));
        assert!(is_loopback("http://localhost:5001/"));
        assert!(!is_loopback("https://advisor.example"));
        assert!(!is_loopback("not a url"));
    }
}
