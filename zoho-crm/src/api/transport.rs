//! HTTP transport seam
//!
//! Operations go through the [`Transport`] trait so tests (or callers with
//! their own HTTP stack, cookie auth, proxies, ...) can swap the wire layer.
//! The bundled [`HttpTransport`] wraps a shared `reqwest::Client` and
//! attaches the configured session token to every request.

use async_trait::async_trait;
use log::{debug, trace};

use super::error::ZohoError;
use super::models::{Params, ZohoConfig};

/// One-method HTTP collaborator: POST form fields, get the raw body back.
///
/// Timeouts, retries and connection handling are all on this side of the
/// seam, not in the operations.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, params: &Params) -> Result<String, ZohoError>;
}

/// Default transport backed by `reqwest`
pub struct HttpTransport {
    http: reqwest::Client,
    auth_token: Option<String>,
    scope: String,
}

impl HttpTransport {
    pub fn new(config: &ZohoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_token: config.auth_token.clone(),
            scope: config.scope.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, params: &Params) -> Result<String, ZohoError> {
        let mut form: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if let Some(token) = &self.auth_token {
            form.push(("authtoken", token));
        }
        form.push(("scope", &self.scope));

        debug!("POST {} ({} form fields)", url, form.len());

        let response = self
            .http
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ZohoError::transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| ZohoError::transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ZohoError::transport(e.to_string()))?;
        trace!("response body: {}", body);

        Ok(body)
    }
}
