//! IT Bookstore client
//!
//! Thin wrapper over `reqwest` for the search endpoint and cover downloads.

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::model::{BookEntry, parse_search_response};

pub const DEFAULT_BASE_URL: &str = "https://api.itbook.store/1.0";

const USER_AGENT: &str = concat!("bookfinder/", env!("CARGO_PKG_VERSION"));

/// Book search client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct BookClient {
    client: Client,
    base_url: Arc<str>,
}

impl fmt::Debug for BookClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BookClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to initialise HTTP client")?;
        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The term goes into the path as-is; only the URL parser touches it.
    pub fn search_url(&self, term: &str) -> String {
        format!("{}/search/{}", self.base_url, term)
    }

    /// Search books matching `term`.
    ///
    /// Errors on transport failure, non-2xx status, or a malformed body.
    /// An empty `Vec` means the API answered with no books.
    pub async fn search(&self, term: &str) -> Result<Vec<BookEntry>> {
        let url = self.search_url(term);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("search returned HTTP {}", status));
        }

        let body = response
            .text()
            .await
            .context("failed to read search response body")?;
        parse_search_response(&body)
    }

    /// Download the raw bytes of a cover image.
    pub async fn fetch_cover(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("cover request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("cover returned HTTP {}", status));
        }

        let bytes = response.bytes().await.context("failed to read cover")?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response, returning the request line seen.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}/1.0", addr), handle)
    }

    #[test]
    fn search_url_inserts_term_into_path() {
        let client = BookClient::new("https://api.itbook.store/1.0/").unwrap();
        assert_eq!(
            client.search_url("mongodb"),
            "https://api.itbook.store/1.0/search/mongodb"
        );
        assert_eq!(client.base_url(), "https://api.itbook.store/1.0");
    }

    #[tokio::test]
    async fn search_returns_books() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"error":"0","total":"2","books":[
                {"title":"Book A","price":"$1.00","image":"http://img/a.png"},
                {"title":"Book B","price":"$2.00","image":"http://img/b.png"}]}"#,
        )
        .await;

        let client = BookClient::new(&base).unwrap();
        let books = client.search("rust").await.unwrap();

        assert_eq!(
            books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>(),
            vec!["Book A", "Book B"]
        );
        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /1.0/search/rust "));
    }

    #[tokio::test]
    async fn search_with_no_books_is_empty() {
        let (base, _server) = serve_once("200 OK", r#"{"error":"0","total":"0","books":[]}"#).await;
        let client = BookClient::new(&base).unwrap();
        assert!(client.search("zzzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_fails_on_server_error() {
        let (base, _server) = serve_once("500 Internal Server Error", r#"{"books":[]}"#).await;
        let client = BookClient::new(&base).unwrap();
        assert!(client.search("rust").await.is_err());
    }

    #[tokio::test]
    async fn search_fails_without_books_field() {
        let (base, _server) = serve_once("200 OK", r#"{"error":"0"}"#).await;
        let client = BookClient::new(&base).unwrap();
        assert!(client.search("rust").await.is_err());
    }

    #[tokio::test]
    async fn search_fails_when_unreachable() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BookClient::new(&format!("http://{}/1.0", addr)).unwrap();
        assert!(client.search("rust").await.is_err());
    }
}
