//! Page retrieval.
//!
//! The converter never talks to the network directly: it goes through the
//! [`Fetcher`] trait. [`HttpFetcher`] is the blocking HTTP implementation
//! used by the command line tool; [`MapFetcher`] serves pages from memory.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::encoding::decode_html;
use crate::error::FetchError;

/// A downloaded HTML page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Raw body bytes, in the page's own encoding.
    pub body: Vec<u8>,

    /// Value of the `Content-Type` response header, if any.
    pub content_type: Option<String>,
}

impl Page {
    /// A UTF-8 `text/html` page.
    #[must_use]
    pub fn html(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            content_type: Some("text/html; charset=utf-8".to_string()),
        }
    }

    /// Body decoded to UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        decode_html(&self.body, self.content_type.as_deref())
    }
}

/// Source of HTML pages.
pub trait Fetcher {
    /// Download `url`, failing unless it answers 200 with `text/html`.
    fn fetch_html(&self, url: &str) -> Result<Page, FetchError>;
}

/// Blocking HTTP fetcher with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network {
                url: String::new(),
                reason: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<Page, FetchError> {
        let network = |e: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(network)?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !content_type.as_deref().is_some_and(is_html_content_type) {
            return Err(FetchError::NonHtmlContentType {
                url: url.to_string(),
                content_type: content_type.unwrap_or_default(),
            });
        }

        let body = response.bytes().map_err(network)?.to_vec();
        Ok(Page { body, content_type })
    }
}

/// In-memory fetcher: known URLs return their page, unknown URLs answer
/// HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct MapFetcher {
    pages: HashMap<String, Page>,
}

impl MapFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `url`.
    #[must_use]
    pub fn with_page(mut self, url: &str, page: Page) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

impl Fetcher for MapFetcher {
    fn fetch_html(&self, url: &str) -> Result<Page, FetchError> {
        let page = self.pages.get(url).ok_or_else(|| FetchError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })?;
        if !page.content_type.as_deref().is_some_and(is_html_content_type) {
            return Err(FetchError::NonHtmlContentType {
                url: url.to_string(),
                content_type: page.content_type.clone().unwrap_or_default(),
            });
        }
        Ok(page.clone())
    }
}

fn is_html_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..9)
        .is_some_and(|mime| mime.eq_ignore_ascii_case("text/html"))
}
