/// Blocking HTTP client for the Worldbook API.
///
/// One GET per call, full-body buffering, JSON parsing. Status codes are
/// reported, never judged; callers decide what a non-2xx means.
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;

use super::errors::ApiError;

/// A buffered, parsed API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code as received.
    pub status_code: u16,
    /// Parsed response document; `{}` when the body was empty.
    pub data: Value,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Blocking client bound to one base URL.
///
/// No explicit timeout is configured; an unreachable host surfaces whatever
/// failure the transport's own defaults produce.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET `path` under the base URL and parse the body as JSON.
    ///
    /// The body is buffered in full; an empty body yields `data = {}` for any
    /// status code. The request is issued once and never retried.
    ///
    /// # Errors
    ///
    /// - `ApiError::InvalidUrl` — base URL and path do not form a valid URL
    /// - `ApiError::ConnectionFailed` — transport failure (DNS, refused,
    ///   reset, timeout)
    /// - `ApiError::ParseFailed` — non-empty body that is not valid JSON;
    ///   preserves the received status code
    pub fn get_json(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<ApiResponse, ApiError> {
        let url = build_url(&self.base_url, path, params)?;
        let response = self
            .client
            .get(url)
            .send()
            .map_err(ApiError::ConnectionFailed)?;
        let status_code = response.status().as_u16();
        let body = response.text().map_err(ApiError::ConnectionFailed)?;

        if body.is_empty() {
            return Ok(ApiResponse {
                status_code,
                data: Value::Object(serde_json::Map::new()),
            });
        }

        let data = serde_json::from_str(&body).map_err(|err| ApiError::ParseFailed {
            message: err.to_string(),
            status_code,
        })?;

        Ok(ApiResponse { status_code, data })
    }
}

/// Build the final request URL from a base URL, a path, and query parameters.
///
/// Parameters with a `None` value are omitted; the rest are appended with
/// standard URL encoding.
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` when the base URL and path do not parse.
pub fn build_url(
    base_url: &str,
    path: &str,
    params: &[(&str, Option<String>)],
) -> Result<String, ApiError> {
    let mut url = Url::parse(&format!("{base_url}{path}"))
        .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            if let Some(value) = value {
                pairs.append_pair(key, value);
            }
        }
    }
    // query_pairs_mut leaves an empty query ("...?") behind when nothing was appended
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_build_url_appends_params() {
        let url = build_url(
            "https://worldbook.it.com",
            "/api/search",
            &[
                ("q", Some("stripe payments".to_owned())),
                ("limit", Some("10".to_owned())),
                ("category", None),
            ],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://worldbook.it.com/api/search?q=stripe+payments&limit=10"
        );
    }

    #[test]
    fn test_build_url_without_params_has_no_query() {
        let url = build_url("https://worldbook.it.com", "/api/worldbook/stripe", &[]).unwrap();
        assert_eq!(url, "https://worldbook.it.com/api/worldbook/stripe");
    }

    #[test]
    fn test_build_url_rejects_garbage_base() {
        let err = build_url("not a url", "/api/search", &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_empty_body_yields_empty_object_for_any_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/worldbook/ghost");
            then.status(500);
        });

        let client = ApiClient::new(server.base_url());
        let response = client.get_json("/api/worldbook/ghost", &[]).unwrap();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.data, json!({}));
    }

    #[test]
    fn test_malformed_body_preserves_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/search");
            then.status(502).body("{");
        });

        let client = ApiClient::new(server.base_url());
        let err = client.get_json("/api/search", &[]).unwrap_err();
        match err {
            ApiError::ParseFailed { status_code, .. } => assert_eq!(status_code, 502),
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_success_returns_parsed_document() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/search")
                .query_param("q", "stripe")
                .query_param("limit", "10");
            then.status(200)
                .json_body(json!({ "results": [{ "name": "stripe" }] }));
        });

        let client = ApiClient::new(server.base_url());
        let response = client
            .get_json(
                "/api/search",
                &[
                    ("q", Some("stripe".to_owned())),
                    ("limit", Some("10".to_owned())),
                    ("category", None),
                ],
            )
            .unwrap();
        mock.assert();
        assert!(response.is_success());
        assert_eq!(response.data["results"][0]["name"], "stripe");
    }

    #[test]
    fn test_unreachable_host_is_connection_failure() {
        // Nothing listens on the tcpmux port.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.get_json("/api/search", &[]).unwrap_err();
        assert!(err.is_connection());
    }
}
