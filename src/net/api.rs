//! REST client for the library API.
//!
//! Browser (wasm32): real HTTP calls via `gloo-net`. Host builds compile the
//! fallback branches, which only ever run under `cargo test`.
//!
//! Every outbound request carries `Authorization: Bearer <token>` when a
//! token is stored. Every inbound response is inspected once: a 401 clears
//! the stored session and hard-navigates to `/login` (a full reload, so no
//! stale reactive state survives the dead token); any other non-2xx status
//! becomes an [`ApiError::Status`] carrying the server's message. No retry,
//! no queuing.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{
    Book, BookInput, BookPreview, CatalogStats, Loan, LoanEnvelope, LoanStats, LoginRequest,
    LoginResponse, RegisterRequest, ReserveRequest, ReturnResponse, Role,
};
#[cfg(target_arch = "wasm32")]
use crate::util::storage;

/// Thin, cloneable handle over the configured endpoint. Constructed once in
/// the root component and provided via context.
#[derive(Clone, Debug, Default)]
pub struct Api {
    config: ApiConfig,
}

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    // ---- auth ----------------------------------------------------------

    /// `POST /auth/login`. On success the caller owns persisting the session.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register`. New accounts always sign up with the plain
    /// user role.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            role: Role::User,
        };
        self.post_json::<_, serde_json::Value>("/auth/register", &body)
            .await
            .map(|_| ())
    }

    // ---- catalog -------------------------------------------------------

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_json("/catalog/books").await
    }

    pub async fn get_book(&self, id: i64) -> Result<Book, ApiError> {
        self.get_json(&format!("/catalog/books/{id}")).await
    }

    pub async fn create_book(&self, input: &BookInput) -> Result<(), ApiError> {
        self.post_json::<_, serde_json::Value>("/catalog/books", input)
            .await
            .map(|_| ())
    }

    pub async fn update_book(&self, id: i64, input: &BookInput) -> Result<(), ApiError> {
        self.put_json::<_, serde_json::Value>(&format!("/catalog/books/{id}"), input)
            .await
            .map(|_| ())
    }

    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/catalog/books/{id}")).await
    }

    /// ISBN lookup used to prefill the admin book form.
    pub async fn preview_by_isbn(&self, isbn: &str) -> Result<BookPreview, ApiError> {
        self.get_json(&format!("/catalog/books/preview/{isbn}")).await
    }

    pub async fn catalog_stats(&self) -> Result<CatalogStats, ApiError> {
        self.get_json("/catalog/stats").await
    }

    // ---- loans ---------------------------------------------------------

    pub async fn reserve_book(&self, book_id: i64) -> Result<Loan, ApiError> {
        let body = ReserveRequest { book_id };
        self.post_json::<_, LoanEnvelope>("/loans/reserve", &body)
            .await
            .map(|envelope| envelope.loan)
    }

    pub async fn my_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get_json("/loans/myLoans").await
    }

    pub async fn renew_loan(&self, loan_id: i64) -> Result<Loan, ApiError> {
        self.post_empty::<LoanEnvelope>(&format!("/loans/loans/{loan_id}/renew"))
            .await
            .map(|envelope| envelope.loan)
    }

    /// Returns the final fine charged against the loan.
    pub async fn return_book(&self, loan_id: i64) -> Result<f64, ApiError> {
        self.post_empty::<ReturnResponse>(&format!("/loans/loans/{loan_id}/return"))
            .await
            .map(|resp| resp.final_fine_amount)
    }

    pub async fn all_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get_json("/loans/all").await
    }

    pub async fn loan_stats(&self) -> Result<LoanStats, ApiError> {
        self.get_json("/loans/stats").await
    }

    // ---- transport -----------------------------------------------------

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::get(&self.config.url(path)))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::post(&self.config.url(path)))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::put(&self.config.url(path)))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::post(&self.config.url(path)))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = authorize(gloo_net::http::Request::delete(&self.config.url(path)))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        send(request).await.map(|_| ())
    }

    // Host fallbacks: the UI never runs here, but the pure modules under test
    // link against this crate on the host target.

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: DeserializeOwned>(&self, _path: &str) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_empty<T: DeserializeOwned>(&self, _path: &str) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn delete(&self, _path: &str) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }
}

/// Attach the bearer token, when one is stored.
#[cfg(target_arch = "wasm32")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::read_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Send a request and classify the response. The single 401 interception
/// point: drop the session and force a fresh login.
#[cfg(target_arch = "wasm32")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if response.status() == 401 {
        log::warn!("server rejected the session token; signing out");
        storage::clear_session();
        redirect_to_login();
        return Err(ApiError::SessionExpired);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }
    Ok(response)
}

#[cfg(target_arch = "wasm32")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
