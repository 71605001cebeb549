//! API utilities for frontend-backend communication
//!
//! Every wrapper module goes through these helpers: they build the URL, log the
//! call, and turn transport and HTTP failures into [`ApiError`].

use crate::shared::config::AppConfig;
use contracts::shared::api_error::server_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to encode request: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Text for the error modal: the server's own message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Builds the error of a non-2xx response from its status and raw body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: server_message(body).unwrap_or_default(),
        }
    }
}

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/customers/{}", api_base(), id);
/// ```
pub fn api_base() -> &'static str {
    &AppConfig::current().api_base
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path?query` with the query encoded by serde_qs; the `?` is omitted when empty.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let request = Request::get(&url)
        .header("Accept", "application/json")
        .build();
    send("GET", &url, request).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    send_body("POST", &url, Request::post(&url), body).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    send_body("PUT", &url, Request::put(&url), body).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    send_body("PATCH", &url, Request::patch(&url), body).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let request = Request::delete(&url).build();
    send("DELETE", &url, request).await
}

async fn send_body<B: Serialize, T: DeserializeOwned>(
    method: &str,
    url: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let request = match builder.json(body) {
        Ok(request) => request,
        Err(e) => {
            let err = ApiError::Serialize(e.to_string());
            log::error!("{} {} failed: {}", method, url, err);
            return Err(err);
        }
    };
    send(method, url, Ok(request)).await
}

async fn send<T: DeserializeOwned>(
    method: &str,
    url: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    log::debug!("{} {}", method, url);
    let result = match request {
        Ok(request) => match request.send().await {
            Ok(response) => read_response(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        },
        Err(e) => Err(ApiError::Network(e.to_string())),
    };
    if let Err(e) = &result {
        log::error!("{} {} failed: {:?}", method, url, e);
    }
    result
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !ok {
        return Err(ApiError::from_response_body(status, &body));
    }
    parse_body(&body)
}

/// Empty bodies (204, bare 200) decode as JSON `null`, so `T = ()` works for mutations.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Configuration is read once; later installs do not move the API base.
    #[test]
    fn test_api_url_uses_installed_config() {
        let config = AppConfig {
            api_base: "http://erp.test:3000".to_string(),
            log_level: log::Level::Info,
            default_page_size: crate::shared::config::DEFAULT_PAGE_SIZE,
        };
        AppConfig::install(config.clone());
        assert_eq!(api_url("/api/customers"), "http://erp.test:3000/api/customers");

        AppConfig::install(AppConfig {
            api_base: "http://elsewhere:3000".to_string(),
            ..config
        });
        assert_eq!(api_base(), "http://erp.test:3000");
        assert!(std::ptr::eq(AppConfig::current(), AppConfig::current()));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_response_body(409, r#"{"message":"Order was changed"}"#);
        assert!(err.is_conflict());
        assert_eq!(err.user_message("Failed to save"), "Order was changed");

        let bare = ApiError::from_response_body(500, "");
        assert_eq!(bare.user_message("Failed to save"), "Failed to save");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Failed to load"),
            "Failed to load"
        );
    }

    #[test]
    fn test_parse_body_empty_is_unit() {
        let unit: Result<(), ApiError> = parse_body("");
        assert!(unit.is_ok());
        let n: i32 = parse_body("42").unwrap();
        assert_eq!(n, 42);
        assert!(matches!(parse_body::<i32>("x"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_with_query() {
        #[derive(Serialize)]
        struct Q {
            show_inactive: bool,
        }
        assert_eq!(
            with_query("/api/customers", &Q { show_inactive: true }).unwrap(),
            "/api/customers?show_inactive=true"
        );
    }
}
