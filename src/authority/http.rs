//! Remote puzzle authority over HTTP
//!
//! Speaks the JSON API of the puzzle server, rooted at a base URL such as
//! `http://localhost:8080/api`.

use super::wire::{
    CountResponse, ErrorBody, ScratchRequest, ScratchResponse, ValidateLetterRequest,
    ValidateLetterResponse,
};
use super::{AuthorityError, PuzzleAuthority, RowReveal};
use crate::core::{HintGrid, Letter, LetterUsage, Position, RowHints, Word};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for a remote authority
pub struct HttpAuthority {
    client: Client,
    base_url: String,
}

impl HttpAuthority {
    /// Create a client for the API at `base_url`
    ///
    /// # Errors
    /// Returns `Unavailable` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthorityError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthorityError::unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, AuthorityError> {
        let response = request.send().map_err(|e| {
            warn!(error = %e, "Authority request failed");
            AuthorityError::unavailable(e.to_string())
        })?;

        let status = response.status();
        debug!(url = %response.url(), %status, "Authority response");

        if status.is_success() {
            Ok(response)
        } else if status.is_client_error() {
            let reason = response
                .json::<ErrorBody>()
                .map_or_else(|_| status.to_string(), |body| body.error);
            Err(AuthorityError::rejected(reason))
        } else {
            Err(AuthorityError::unavailable(format!("server returned {status}")))
        }
    }

    fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthorityError> {
        self.send(request)?
            .json::<T>()
            .map_err(|e| AuthorityError::malformed(e.to_string()))
    }
}

impl PuzzleAuthority for HttpAuthority {
    fn new_puzzle(&mut self) -> Result<(), AuthorityError> {
        self.send(self.client.get(self.endpoint("new")))?;
        Ok(())
    }

    fn board(&mut self) -> Result<HintGrid, AuthorityError> {
        self.fetch(self.client.get(self.endpoint("board")))
    }

    fn validate_letter(
        &mut self,
        position: Position,
        letter: Letter,
    ) -> Result<bool, AuthorityError> {
        let body = ValidateLetterRequest {
            row: position.row(),
            col: position.col(),
            letter,
        };
        let response: ValidateLetterResponse =
            self.fetch(self.client.post(self.endpoint("validate-letter")).json(&body))?;
        Ok(response.correct)
    }

    fn count(&mut self, letter: Letter) -> Result<u32, AuthorityError> {
        let request = self
            .client
            .get(self.endpoint("count"))
            .query(&[("letter", letter.to_string())]);
        let response: CountResponse = self.fetch(request)?;
        Ok(response.count)
    }

    fn reveal(&mut self, row: usize) -> Result<RowReveal, AuthorityError> {
        let request = self
            .client
            .get(self.endpoint("reveal"))
            .query(&[("idx", row)]);
        self.fetch(request)
    }

    fn scratch(&mut self, guess: &Word) -> Result<RowHints, AuthorityError> {
        let body = ScratchRequest {
            guess: guess.text().to_string(),
        };
        let response: ScratchResponse =
            self.fetch(self.client.post(self.endpoint("scratch")).json(&body))?;
        Ok(response.colors)
    }

    fn phantom_scan(&mut self) -> Result<LetterUsage, AuthorityError> {
        self.fetch(self.client.get(self.endpoint("phantom-scan")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorHint;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one canned response; the request line is sent back
    /// over the returned channel.
    fn serve_once(status: &'static str, body: impl Into<String>) -> (String, mpsc::Receiver<String>) {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];

            // Read headers, then the body announced by Content-Length
            let header_end = loop {
                let n = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
                if let Some(i) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break i + 4;
                }
            };
            let head = String::from_utf8_lossy(&request[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(head.lines().next().unwrap_or_default().to_string());
        });

        (format!("http://{addr}/api"), rx)
    }

    fn client(url: &str) -> HttpAuthority {
        HttpAuthority::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn board_decodes_grid() {
        let row = r#"["blue","white","white","orange","white"]"#;
        let (url, requests) = serve_once("200 OK", format!("[{row},{row},{row},{row},{row},{row}]"));

        let grid = client(&url).board().unwrap();
        assert_eq!(grid.row(0).get(0), ColorHint::Correct);
        assert_eq!(requests.recv().unwrap(), "GET /api/board HTTP/1.1");
    }

    #[test]
    fn count_sends_letter_as_query() {
        let (url, requests) = serve_once("200 OK", r#"{"letter":"e","count":3}"#);

        let count = client(&url).count(Letter::parse("E").unwrap()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(requests.recv().unwrap(), "GET /api/count?letter=e HTTP/1.1");
    }

    #[test]
    fn validate_letter_posts_json() {
        let (url, requests) = serve_once("200 OK", r#"{"correct":true}"#);

        let position = Position::new(3, 1).unwrap();
        assert!(client(&url).validate_letter(position, Letter::parse("a").unwrap()).unwrap());
        assert_eq!(requests.recv().unwrap(), "POST /api/validate-letter HTTP/1.1");
    }

    #[test]
    fn client_error_is_rejected_with_reason() {
        let (url, _) = serve_once("400 Bad Request", r#"{"error":"Not in dictionary"}"#);

        let err = client(&url).scratch(&Word::new("zzzzz").unwrap()).unwrap_err();
        assert_eq!(err, AuthorityError::rejected("Not in dictionary"));
    }

    #[test]
    fn reveal_rejection_without_body() {
        let (url, requests) = serve_once("400 Bad Request", "");

        assert!(matches!(client(&url).reveal(2), Err(AuthorityError::Rejected(_))));
        assert_eq!(requests.recv().unwrap(), "GET /api/reveal?idx=2 HTTP/1.1");
    }

    #[test]
    fn server_error_is_unavailable() {
        let (url, _) = serve_once("500 Internal Server Error", "{}");
        assert!(matches!(
            client(&url).phantom_scan(),
            Err(AuthorityError::Unavailable(_))
        ));
    }

    #[test]
    fn undecodable_body_is_malformed() {
        let (url, _) = serve_once("200 OK", r#"{"A": true}"#);
        assert!(matches!(
            client(&url).phantom_scan(),
            Err(AuthorityError::Malformed(_))
        ));
    }

    #[test]
    fn base_url_is_normalized() {
        let authority = HttpAuthority::new("http://localhost:8080/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(authority.base_url(), "http://localhost:8080/api");
        assert_eq!(
            authority.endpoint("validate-letter"),
            "http://localhost:8080/api/validate-letter"
        );
    }

    #[test]
    fn unreachable_server_is_unavailable() {
        // Port 9 (discard) on localhost is closed in test environments
        let mut authority =
            HttpAuthority::new("http://127.0.0.1:9/api", Duration::from_millis(500)).unwrap();
        assert!(matches!(
            authority.board(),
            Err(AuthorityError::Unavailable(_))
        ));
    }
}
