//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::flow::GuestDirectory;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{AdminInfo, LastNameEntry, LoginRequest, LoginResponse};
use shared::models::{Guest, GuestCreate, GuestSummary, RsvpRecord, RsvpSubmit};

/// HTTP client for making network requests to the Invite Server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request with query parameters
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path)).query(query);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    /// Get the currently authenticated admin
    pub async fn me(&self) -> ClientResult<AdminInfo> {
        self.get("/api/auth/me", &[]).await
    }

    /// Log out the current session
    pub async fn logout(&self) -> ClientResult<()> {
        self.post_empty("/api/auth/logout").await
    }

    // ========== Public guest API ==========

    /// Distinct last names starting with the prefix
    pub async fn guest_last_names(&self, prefix: &str) -> ClientResult<Vec<LastNameEntry>> {
        self.get("/api/guests/last-names", &[("prefix", prefix)])
            .await
    }

    /// Guest summaries whose last name starts with the prefix
    pub async fn search_guests(&self, prefix: &str) -> ClientResult<Vec<GuestSummary>> {
        self.get("/api/guests/search", &[("prefix", prefix)]).await
    }

    /// Persisted RSVP answer for one guest
    pub async fn guest_rsvp(&self, guest_id: i64) -> ClientResult<RsvpRecord> {
        self.get(&format!("/api/guests/{guest_id}/rsvp"), &[]).await
    }

    /// Submit the one-shot RSVP answer for one guest
    pub async fn put_rsvp(&self, guest_id: i64, submit: &RsvpSubmit) -> ClientResult<RsvpRecord> {
        self.put(&format!("/api/guests/{guest_id}/rsvp"), submit)
            .await
    }

    // ========== Admin guest management ==========

    /// List all guests with their RSVP status (admin)
    pub async fn list_guests(&self) -> ClientResult<Vec<Guest>> {
        self.get("/api/admin/guests", &[]).await
    }

    /// Add a guest to the list (admin)
    pub async fn create_guest(&self, guest: &GuestCreate) -> ClientResult<Guest> {
        self.post("/api/admin/guests", guest).await
    }

    /// Delete a guest (admin)
    pub async fn delete_guest(&self, guest_id: i64) -> ClientResult<bool> {
        self.delete(&format!("/api/admin/guests/{guest_id}")).await
    }
}

#[async_trait]
impl GuestDirectory for HttpClient {
    async fn last_names(&self, prefix: &str) -> ClientResult<Vec<String>> {
        let entries = self.guest_last_names(prefix).await?;
        Ok(entries.into_iter().map(|e| e.last_name).collect())
    }

    async fn search(&self, prefix: &str) -> ClientResult<Vec<GuestSummary>> {
        self.search_guests(prefix).await
    }

    async fn rsvp_of(&self, guest_id: i64) -> ClientResult<RsvpRecord> {
        self.guest_rsvp(guest_id).await
    }

    async fn submit_rsvp(&self, guest_id: i64, submit: RsvpSubmit) -> ClientResult<RsvpRecord> {
        self.put_rsvp(guest_id, &submit).await
    }
}
