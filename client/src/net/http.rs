//! Thin REST client wrapper around `gloo-net`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page talks to the backend through one `ApiClient` value built from
//! the current session. It owns URL joining, the bearer header, and the
//! mapping from HTTP status to `ApiError`, so endpoint functions in `api`
//! stay one-liners.
//!
//! Client-side (hydrate): real HTTP calls. Server-side (SSR) and tests: every
//! call returns `ApiError::Unavailable` since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Base path the host server proxies to the backend.
pub const DEFAULT_BASE_URL: &str = "/api";

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Base URL plus optional bearer token. Cheap to clone; build one per call
/// site from `AuthState::api()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), token: None }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, if a token is set.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Join `path` onto the base URL and append non-empty query pairs.
    #[must_use]
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let path = path.trim_start_matches('/');
        let mut url = format!("{}/{path}", self.base_url);
        let pairs: Vec<String> = query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect();
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` for transport failures, non-2xx statuses, or bodies
    /// that do not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_query(path, &[]).await
    }

    /// `GET` with query parameters. Empty values are dropped.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn get_with_query<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, query);
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let req = self
                .authorize(gloo_net::http::Request::post(&url))
                .json(body)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, serde_json::to_value(body));
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` for transport failures or non-2xx statuses.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let req = self
                .authorize(gloo_net::http::Request::post(&url))
                .json(body)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, serde_json::to_value(body));
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let req = self
                .authorize(gloo_net::http::Request::put(&url))
                .json(body)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, serde_json::to_value(body));
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` for transport failures or non-2xx statuses.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let resp = self
                .authorize(gloo_net::http::Request::delete(&url))
                .send()
                .await
                .map_err(network_error)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a multipart form with a `kind` field and one `files` part per file.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, kind: &str, batch: &UploadBatch) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_str("kind", kind).map_err(js_error)?;
            for file in &batch.files {
                form.append_with_blob_and_filename("files", file, &file.name())
                    .map_err(js_error)?;
            }
            let url = self.url(path, &[]);
            let req = self
                .authorize(gloo_net::http::Request::post(&url))
                .body(form)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, kind, batch);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

/// Files picked in an `<input type="file">`, ready for multipart upload.
#[derive(Clone, Debug, Default)]
pub struct UploadBatch {
    names: Vec<String>,
    #[cfg(feature = "hydrate")]
    files: Vec<web_sys::File>,
}

impl UploadBatch {
    /// Collect every file from a browser `FileList`.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_file_list(list: &web_sys::FileList) -> Self {
        let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        let names = files.iter().map(web_sys::File::name).collect();
        Self { names, files }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    log::warn!("request failed: {err}");
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, super::error::extract_body_message(&body));
    log::warn!("{} {} -> {err}", status, resp.url());
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
