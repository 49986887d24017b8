use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variables passed alongside a GraphQL document.
pub type Variables = Map<String, Value>;

/// The request as it goes over the wire. Also echoed back inside `ClientError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphQLRequest {
    pub fn new(query: &str, variables: Option<Variables>) -> Self {
        Self {
            query: query.to_string(),
            variables,
        }
    }
}

/// A parsed response body merged with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    pub status: u16,
    /// Any other top-level fields, such as `error` for bodies that were not JSON.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphQLResponse {
    /// Build from a parsed body. A body that is not a JSON object ends up under
    /// an `error` key so nothing the server sent is lost.
    pub fn from_body(body: Value, status: u16) -> Self {
        let mut fields = match body {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("error".to_string(), other);
                map
            }
        };
        fields.remove("status");

        let errors = match fields.remove("errors") {
            Some(Value::Array(entries)) => Some(entries.into_iter().map(GraphQLError::from_value).collect()),
            Some(Value::Null) | None => None,
            // Not a list at all: keep it raw.
            Some(other) => {
                fields.insert("errors".to_string(), other);
                None
            }
        };

        Self {
            data: fields.remove("data").filter(|d| !d.is_null()),
            errors,
            extensions: fields.remove("extensions").filter(|e| !e.is_null()),
            status,
            extra: fields,
        }
    }

    pub fn first_error_message(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    #[serde(default)]
    pub path: Vec<PathSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    /// Decode one entry of `errors`, salvaging whatever fields are usable.
    ///
    /// Only the entry itself is affected by a bad field; a null `path` or a
    /// numeric `message` never hides the rest of the list.
    pub fn from_value(entry: Value) -> Self {
        if let Ok(error) = serde_json::from_value::<GraphQLError>(entry.clone()) {
            return error;
        }

        let message = match entry.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => match &entry {
                Value::String(message) => message.clone(),
                _ => String::new(),
            },
            Some(other) => other.to_string(),
        };

        Self {
            message,
            locations: field_or_default(&entry, "locations"),
            path: field_or_default(&entry, "path"),
            extensions: entry.get("extensions").filter(|e| !e.is_null()).cloned(),
        }
    }
}

fn field_or_default<T: DeserializeOwned + Default>(entry: &Value, key: &str) -> T {
    entry
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

// Team query
#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub team: super::Team,
}

// Create mutation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateData {
    pub issue_create: IssueCreatePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreatePayload {
    pub last_sync_id: Option<f64>,
}
