use async_trait::async_trait;
use encoding_rs::Encoding;
use kindeck_config::network::NetworkConfig;
use kindeck_types::DictionarySource;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue, REFERER};
use url::Url;

use crate::encoding::detect_encoding;
use crate::error::FetchError;
use crate::redirect::redirect_title;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Outcome of one lookup. A failed fetch still carries the word and a title.
#[derive(Debug)]
pub struct RetrievalResult {
    pub word: String,
    /// Redirect target headword, or the word itself
    pub title: String,
    pub html: Result<String, FetchError>,
}

/// Source of raw dictionary pages for one run
#[async_trait]
pub trait Retriever: Send {
    /// One request to the source's base URL; `false` when unreachable
    async fn probe(&mut self) -> bool;

    async fn fetch(&mut self, word: &str) -> RetrievalResult;

    /// Releases the connection pool
    fn close(self: Box<Self>);
}

/// HTTP client bound to one dictionary source.
///
/// The detected text encoding of the first successful response is kept for
/// every later response of the session.
pub struct RetrievalSession {
    source: DictionarySource,
    config: NetworkConfig,
    client: reqwest::Client,
    encoding: Option<&'static Encoding>,
}

impl RetrievalSession {
    pub fn open(source: DictionarySource, config: &NetworkConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_str(&source.referer)?);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        tracing::debug!(
            "Opened session for {} ({})",
            source.menu_label(),
            source.base_url
        );

        Ok(Self {
            source,
            config: config.clone(),
            client,
            encoding: None,
        })
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Encoding settled on by the first successful response, if any yet
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    async fn get_with_retry(&self, url: &Url) -> Result<reqwest::Response, FetchError> {
        let mut attempt = 0;
        loop {
            let error = match self.client.get(url.clone()).send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => FetchError::Status {
                    status: response.status().as_u16(),
                    url: response.url().to_string(),
                },
                Err(e) => FetchError::Network(e),
            };

            if attempt >= self.config.max_retries || !error.is_transient() {
                return Err(error);
            }

            attempt += 1;
            tracing::debug!("Retrying {url} ({attempt}/{}): {error}", self.config.max_retries);
            tokio::time::sleep(self.config.backoff(attempt)).await;
        }
    }

    async fn fetch_page(&mut self, word: &str) -> Result<(String, String), FetchError> {
        let lookup = self.source.lookup_url(word);
        let requested = Url::parse(&lookup).map_err(|e| FetchError::InvalidUrl {
            url: lookup.clone(),
            source: e,
        })?;

        let response = self.get_with_retry(&requested).await?;
        let title = redirect_title(self.source.redirect, &requested, response.url(), word);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?;
        let encoding = *self.encoding.get_or_insert_with(|| {
            let detected = detect_encoding(&body, content_type.as_deref());
            tracing::debug!("Using {} for {}", detected.name(), self.source.name);
            detected
        });
        let (html, _, malformed) = encoding.decode(&body);
        if malformed {
            tracing::debug!("Replaced undecodable bytes in page for '{word}'");
        }

        Ok((title, html.into_owned()))
    }
}

#[async_trait]
impl Retriever for RetrievalSession {
    async fn probe(&mut self) -> bool {
        let reachable = match Url::parse(&self.source.base_url) {
            Ok(url) => self.client.get(url).send().await.map(|_| ()).map_err(FetchError::from),
            Err(e) => Err(FetchError::InvalidUrl {
                url: self.source.base_url.clone(),
                source: e,
            }),
        };

        match reachable {
            Ok(()) => {
                tracing::info!("{} is reachable", self.source.base_url);
                true
            }
            Err(e) => {
                tracing::warn!("{} is not reachable: {e}", self.source.base_url);
                false
            }
        }
    }

    async fn fetch(&mut self, word: &str) -> RetrievalResult {
        match self.fetch_page(word).await {
            Ok((title, html)) => RetrievalResult {
                word: word.to_string(),
                title,
                html: Ok(html),
            },
            Err(e) => RetrievalResult {
                word: word.to_string(),
                title: word.to_string(),
                html: Err(e),
            },
        }
    }

    fn close(self: Box<Self>) {
        tracing::debug!("Closed session for {}", self.source.menu_label());
    }
}
