//! Internal HTTP client that handles authentication and the single re-login retry.

use crate::{
    auth::application::service::login_service::{LoginService, credential_headers, transport_error},
    core::domain::{
        error::{ValidationError, VplexError, VplexResult},
        model::{
            context_node::ResponseEnvelope, driver_config::DriverConfig,
            vplex_connection::VplexConnection,
        },
        ports::VplexApi,
        value_object::VplexSession,
    },
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method, Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Statuses the array answers with when the session was dropped or is held elsewhere.
const SESSION_INVALID_STATUSES: [StatusCode; 2] = [StatusCode::FORBIDDEN, StatusCode::CONFLICT];

/// Internal HTTP client that manages the session and calls the VPLEX management API.
///
/// Every request carries the `username`/`password` headers (plus the session cookie
/// when one was issued). If a request is answered with a session-invalid status, the
/// session is dropped, the client logs in once and retries the request once; a second
/// failure is returned to the caller.
pub struct ApiClient {
    http_client: Client,
    connection: Arc<VplexConnection>,
    session: Arc<RwLock<Option<VplexSession>>>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts without a session.
    ///
    /// # Errors
    /// Returns `VplexError::Connection` if the HTTP client cannot be built, or a
    /// validation error for a zero rate limit.
    pub fn new(connection: VplexConnection, config: &DriverConfig) -> VplexResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accepts_invalid_certs())
            .connect_timeout(config.socket_timeout)
            .timeout(config.socket_timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| VplexError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero(rl.requests_per_second, "requests_per_second")?;
                let burst = non_zero(rl.burst_size, "burst_size")?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            session: Arc::new(RwLock::new(None)),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &VplexConnection {
        &self.connection
    }

    /// Installs a session (used after a successful login).
    pub async fn set_session(&self, session: VplexSession) {
        let mut lock = self.session.write().await;
        *lock = Some(session);
    }

    /// Returns `true` while a session is held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Drops the current session.
    pub async fn clear_session(&self) {
        let mut lock = self.session.write().await;
        *lock = None;
    }

    /// Logs in unless a session is already held.
    pub async fn login(&self) -> VplexResult<()> {
        if self.is_authenticated().await {
            return Ok(());
        }
        let session = LoginService::new()
            .execute(&self.http_client, &self.connection)
            .await?;
        self.set_session(session).await;
        Ok(())
    }

    /// Performs an authenticated GET request.
    ///
    /// # Errors
    /// Returns `VplexError` if the request fails, the session cannot be
    /// re-established, or the response cannot be parsed.
    pub async fn get<T>(&self, path: &str) -> VplexResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::GET, path, None::<&()>).await
    }

    /// Performs an authenticated POST request with a JSON body.
    ///
    /// # Errors
    /// Returns `VplexError` if the request fails, the session cannot be
    /// re-established, or the response cannot be parsed.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> VplexResult<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::POST, path, Some(body)).await
    }

    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> VplexResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = self.connection.vplex_url().endpoint(path)?;
        self.login().await?;

        let response = self.send(method.clone(), &url, body).await?;
        if !SESSION_INVALID_STATUSES.contains(&response.status()) {
            return parse(response, path).await;
        }

        warn!(
            "Session rejected ({}) for {}, logging in again",
            response.status(),
            url
        );
        self.clear_session().await;
        self.login().await?;

        let response = self.send(method, &url, body).await?;
        if SESSION_INVALID_STATUSES.contains(&response.status()) {
            let status = response.status();
            return Err(VplexError::BadResponse {
                status: status.as_u16(),
                body: body_text(response).await,
            });
        }
        parse(response, path).await
    }

    async fn send<B>(&self, method: Method, url: &str, body: Option<&B>) -> VplexResult<Response>
    where
        B: serde::Serialize,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }
        debug!("{} {}", method, url);

        let mut req_builder = self
            .http_client
            .request(method, url)
            .headers(credential_headers(&self.connection)?);
        {
            let session = self.session.read().await;
            if let Some(cookie) = session.as_ref().and_then(VplexSession::cookie) {
                req_builder = req_builder.header(COOKIE, cookie);
            }
        }
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }
        req_builder.send().await.map_err(transport_error)
    }
}

fn non_zero(value: u32, field: &str) -> VplexResult<NonZeroU32> {
    NonZeroU32::new(value).ok_or_else(|| {
        VplexError::from(ValidationError::Field {
            field: field.to_string(),
            message: "Rate limit values must be greater than zero".to_string(),
        })
    })
}

async fn body_text(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Maps the status of a settled (non-retried) response onto the error taxonomy
/// and decodes the body on success.
async fn parse<T>(response: Response, path: &str) -> VplexResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            debug!("Undecodable body from {}: {}", path, e);
            VplexError::malformed("body", "response")
        });
    }
    let body = body_text(response).await;
    match status {
        StatusCode::UNAUTHORIZED => Err(VplexError::InvalidCredentials(body)),
        StatusCode::SERVICE_UNAVAILABLE => Err(VplexError::InvalidResults(body)),
        status => Err(VplexError::BadResponse {
            status: status.as_u16(),
            body,
        }),
    }
}

#[async_trait]
impl VplexApi for ApiClient {
    async fn get_context(&self, path: &str) -> VplexResult<ResponseEnvelope> {
        self.get(path).await
    }

    async fn reset_session(&self) -> VplexResult<()> {
        self.clear_session().await;
        self.login().await
    }

    async fn close_session(&self) {
        self.clear_session().await;
    }
}
