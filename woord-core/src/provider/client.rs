use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, warn};

use super::envelope::{ListDetail, SearchEnvelope, ShapedList, TokenRequest, TokenResponse, decode};
use crate::error::{Result, WoordError};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.wrts.nl/api/v3";

/// Header carrying the session token
const AUTH_HEADER: &str = "x-auth-token";

/// Category filter restricting search to provider-curated lists
const OFFICIAL_LISTS: &str = "official_lists";

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Search page size (always offset 0)
    pub page_size: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 100,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticated session, passed explicitly into every request
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A remote source of word lists
pub trait ListSource {
    /// Exchange credentials for a session token
    fn authenticate(&self, credentials: &Credentials) -> Result<Session>;

    /// Ids of official lists matching `term`, sorted by id
    fn search_official(&self, session: &Session, term: &str) -> Result<Vec<String>>;

    /// Fetch and shape one list
    fn fetch_list(&self, session: &Session, id: &str) -> Result<ShapedList>;
}

/// Blocking HTTP client for the WRTS API
pub struct WrtsClient {
    client: Client,
    config: ApiConfig,
}

impl WrtsClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(USER_AGENT, concat!("woord/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
    }

    fn token_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.with_headers(self.client.post(self.url("auth/get_token")))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(&TokenRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
    }

    fn search_request(&self, session: &Session, term: &str) -> RequestBuilder {
        let limit = self.config.page_size.to_string();
        self.with_headers(self.client.get(self.url("search")))
            .header(AUTH_HEADER, session.token())
            .query(&[
                ("apply_default_filters", "true"),
                ("search_terms", term),
                ("limit", limit.as_str()),
                ("offset", "0"),
                ("type", OFFICIAL_LISTS),
            ])
    }

    fn list_request(&self, session: &Session, id: &str) -> RequestBuilder {
        self.with_headers(self.client.get(self.url(&format!("public/lists/{id}"))))
            .header(AUTH_HEADER, session.token())
    }

    /// Send a request and return the body of a successful response
    fn send(&self, request: RequestBuilder) -> Result<String> {
        let request = request.build()?;
        let url = request.url().to_string();
        debug!(url, "request");
        let response = self.client.execute(request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WoordError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text()?)
    }
}

impl ListSource for WrtsClient {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let body = self
            .send(self.token_request(credentials))
            .map_err(|e| WoordError::Auth(e.to_string()))?;
        let response: TokenResponse =
            decode("token response", &body).map_err(|e| WoordError::Auth(e.to_string()))?;

        response.into_session()
    }

    fn search_official(&self, session: &Session, term: &str) -> Result<Vec<String>> {
        let body = self.send(self.search_request(session, term))?;
        let envelope: SearchEnvelope = decode("search results", &body)?;
        if envelope.result_sections.is_empty() {
            warn!(term, "search returned no result sections");
        }

        Ok(envelope.official_list_ids())
    }

    fn fetch_list(&self, session: &Session, id: &str) -> Result<ShapedList> {
        let body = self.send(self.list_request(session, id))?;
        let detail: ListDetail = decode("list detail", &body)?;
        detail.into_word_list(id)
    }
}
