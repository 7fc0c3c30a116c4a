//! One authenticated POST round trip and its classification.

use crate::core::auth;
use crate::core::params::Params;
use crate::core::{FcsError, RequestOutcome};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::error::Error as _;
use std::time::Duration;
use url::Url;

/// `reqwest::Error` with its source chain, e.g. `error sending request: ...: Connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    if err.is_timeout() && !text.contains("timed out") {
        text.push_str(" (timed out)");
    }
    text
}

/// `base` with the `/`-separated segments of `endpoint` appended.
///
/// The result always stays under `base`: absolute URLs, `.`/`..` segments, queries and
/// fragments are rejected instead of being resolved.
fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, String> {
    if endpoint.contains("://") || endpoint.contains(['?', '#']) {
        return Err(format!("Invalid endpoint: {endpoint}"));
    }
    let segments: Vec<&str> = endpoint.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err("Invalid endpoint: empty path".to_string());
    }
    if segments.iter().any(|s| matches!(*s, "." | "..")) {
        return Err(format!("Invalid endpoint: {endpoint}"));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| format!("Invalid URL: {base} cannot be a base"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

impl super::FcsClient {
    /// Executes one authenticated call to `endpoint` (e.g. `forex/latest`).
    ///
    /// Credentials derived from the current configuration are merged over `params`
    /// (credential keys win on collision), the result is POSTed form-encoded to the
    /// base URL joined with `endpoint`, and the response is classified:
    ///
    /// - endpoint that would leave the base URL (absolute URL, `..`, query or fragment):
    ///   rejected before sending, `status_code == 0`;
    /// - no HTTP status (DNS, connect, TLS, timeout): `status_code == 0`;
    /// - body is not JSON: message `"Invalid JSON response"`;
    /// - JSON body: adopted verbatim, success taken from its `status` field.
    ///
    /// The outcome is returned and also stored as the client's last outcome.
    /// This never fails; use [`request`](Self::request) for a `Result`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params)))]
    pub async fn execute(&self, endpoint: &str, params: impl Into<Params>) -> RequestOutcome {
        let outcome = self.round_trip(endpoint, params.into()).await;
        self.store_outcome(&outcome);
        outcome
    }

    /// Like [`execute`](Self::execute), but returns the payload or an error.
    ///
    /// # Errors
    ///
    /// See [`RequestOutcome::into_result`].
    pub async fn request(
        &self,
        endpoint: &str,
        params: impl Into<Params>,
    ) -> Result<serde_json::Value, FcsError> {
        self.execute(endpoint, params).await.into_result()
    }

    async fn round_trip(&self, endpoint: &str, params: Params) -> RequestOutcome {
        let config = self.config();

        let url = match endpoint_url(&self.base_url, endpoint) {
            Ok(url) => url,
            Err(message) => return RequestOutcome::local_failure(message),
        };

        let http = match self.http_for(config.connect_timeout) {
            Ok(http) => http,
            Err(e) => return RequestOutcome::transport_failure(describe(&e)),
        };

        let body = auth::merge_params(params, &config, auth::unix_now()).to_form_body();

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, auth_method = %config.auth_method, "sending request");

        let resp = http
            .post(url)
            .timeout(Duration::from_secs(config.timeout))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await;

        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "transport failure");
                return RequestOutcome::transport_failure(describe(&e));
            }
        };

        let status = resp.status().as_u16();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(status, error = %e, "failed reading response body");
                return RequestOutcome::transport_failure(describe(&e));
            }
        };

        let outcome = RequestOutcome::from_response(status, &text);

        #[cfg(feature = "tracing")]
        {
            if outcome.succeeded {
                tracing::debug!(status, "request succeeded");
            } else {
                let reason = outcome.error_message().unwrap_or_default();
                tracing::debug!(status, reason, "request failed");
            }
        }

        outcome
    }
}
