use crate::core::domain::{
    error::{VplexError, VplexResult},
    model::vplex_connection::VplexConnection,
    value_object::VplexSession,
};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, SET_COOKIE},
};
use tracing::{debug, error};

/// Management path whose successful read proves the credentials are valid.
pub const REST_AUTH_PATH: &str = "clusters";

/// Marker the array puts in the body when it rejects the credentials.
const AUTH_FAILED_MARKER: &str = "User authentication failed";

pub struct LoginService {
    default_headers: HeaderMap,
}

impl LoginService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self { default_headers }
    }

    /// Logs in by reading the cluster collection with the credential headers attached.
    pub async fn execute(
        &self,
        http_client: &Client,
        connection: &VplexConnection,
    ) -> VplexResult<VplexSession> {
        let url = connection.vplex_url().endpoint(REST_AUTH_PATH)?;
        let headers = credential_headers(connection)?;
        debug!("Logging in to {}", url);

        let response = http_client
            .get(&url)
            .headers(self.default_headers.clone())
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(VplexSession::new(session_cookie(response.headers())));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown".to_string());
        error!("Login error. URL: {} Reason: {} {}", url, status, body);
        match status {
            StatusCode::UNAUTHORIZED => Err(VplexError::InvalidCredentials(body)),
            _ if body.contains(AUTH_FAILED_MARKER) => Err(VplexError::InvalidCredentials(body)),
            StatusCode::SERVICE_UNAVAILABLE => Err(VplexError::InvalidResults(body)),
            status => Err(VplexError::BadResponse {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}

/// The array expects credentials as plain `username`/`password` headers.
pub(crate) fn credential_headers(connection: &VplexConnection) -> VplexResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let username = HeaderValue::from_str(connection.vplex_username().as_str())
        .map_err(|e| VplexError::Connection(format!("Invalid username header: {}", e)))?;
    let mut password = HeaderValue::from_str(connection.vplex_password().as_str())
        .map_err(|e| VplexError::Connection(format!("Invalid password header: {}", e)))?;
    password.set_sensitive(true);
    headers.insert("username", username);
    headers.insert("password", password);
    Ok(headers)
}

/// Maps a reqwest send failure onto the transport taxonomy.
pub(crate) fn transport_error(e: reqwest::Error) -> VplexError {
    if e.is_timeout() || e.is_connect() || e.is_request() {
        VplexError::TransportTimeout(e.to_string())
    } else {
        VplexError::Connection(format!("HTTP request failed: {}", e))
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookie| cookie.split(';').next())
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .map(str::to_string)
}
