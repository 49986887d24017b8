use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::constants::LINEAR_API_URL;
use crate::error::{ClientError, LinearResult};
use crate::logging::{log_debug, log_error};
use crate::models::{GraphQLRequest, GraphQLResponse, Variables};

/// Raw GraphQL transport for the Linear API.
///
/// Each call is a single POST. There are no retries and no timeouts beyond
/// whatever the underlying `reqwest::Client` does.
#[derive(Clone)]
pub struct LinearClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl LinearClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, LINEAR_API_URL)
    }

    /// Same as [`LinearClient::new`] but talking to a different endpoint.
    pub fn with_endpoint(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a query and return its `data` field untouched.
    pub async fn request(&self, query: &str, variables: Option<Variables>) -> LinearResult<Value> {
        let request = GraphQLRequest::new(query, variables);

        log_debug(&format!("POST {} ({} byte query)", self.api_url, request.query.len()));

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log_error(&format!("Request to {} failed: {}", self.api_url, e));
                e
            })?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| json!({ "error": text }));

        match success_data(status.is_success(), &body) {
            Some(data) => Ok(data),
            None => {
                let error = ClientError::new(GraphQLResponse::from_body(body, status.as_u16()), request);
                log_error(&format!("GraphQL request failed: {}", error.message()));
                Err(error.into())
            }
        }
    }

    /// Like [`LinearClient::request`], decoding `data` into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Variables>,
    ) -> LinearResult<T> {
        let data = self.request(query, variables).await?;
        Ok(serde_json::from_value(data)?)
    }
}

/// `data` from a body that counts as a success: 2xx, no `errors`, non-null `data`.
fn success_data(status_ok: bool, body: &Value) -> Option<Value> {
    if !status_ok {
        return None;
    }

    let has_errors = body.get("errors").map_or(false, |errors| !errors.is_null());
    if has_errors {
        return None;
    }

    body.get("data").filter(|data| !data.is_null()).cloned()
}
