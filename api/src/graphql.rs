//! GraphQL documents and the request/response envelope used on the wire.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

pub const GET_TOKEN_PAIRS: &str = r#"
query GetTokenPairs($pairs: [String!]!) {
  tokenPairs(pairs: $pairs) {
    pair
    price
    dex
    volume24h
    priceUpdate5m
    historicalPriceData {
      timestamp
      price
    }
    liquidity
    isOnWatchlist
  }
}
"#;

pub const ADD_TO_WATCHLIST: &str = r#"
mutation AddToWatchlist($pair: String!) {
  addToWatchlist(pair: $pair) {
    pair
    isOnWatchlist
  }
}
"#;

pub const REMOVE_FROM_WATCHLIST: &str = r#"
mutation RemoveFromWatchlist($pair: String!) {
  removeFromWatchlist(pair: $pair) {
    pair
    isOnWatchlist
  }
}
"#;

/// The JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn token_pairs(pairs: &[String]) -> Self {
        Self {
            query: GET_TOKEN_PAIRS,
            operation_name: "GetTokenPairs",
            variables: json!({ "pairs": pairs }),
        }
    }

    pub fn add_to_watchlist(pair: &str) -> Self {
        Self {
            query: ADD_TO_WATCHLIST,
            operation_name: "AddToWatchlist",
            variables: json!({ "pair": pair }),
        }
    }

    pub fn remove_from_watchlist(pair: &str) -> Self {
        Self {
            query: REMOVE_FROM_WATCHLIST,
            operation_name: "RemoveFromWatchlist",
            variables: json!({ "pair": pair }),
        }
    }

    /// Key under which a query's result is cached: same operation with the
    /// same variables shares one entry.
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.operation_name, self.variables)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Pulls the `data` object out of a raw response envelope.
///
/// Server-reported errors win over partial data.
pub fn extract_data(response: Value) -> Result<Value, ApiError> {
    let envelope: Envelope = serde_json::from_value(response)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(ApiError::GraphQl(messages.join("; ")));
    }

    match envelope.data {
        Some(Value::Null) | None => Err(ApiError::MissingData),
        Some(data) => Ok(data),
    }
}

/// Returns true if `body` parses as a GraphQL envelope carrying errors.
///
/// Some servers answer 4xx/5xx with a proper envelope; those are reported as
/// GraphQL errors instead of bare HTTP failures.
pub(crate) fn is_error_envelope(body: &Value) -> bool {
    body.get("errors")
        .and_then(Value::as_array)
        .is_some_and(|errors| !errors.is_empty())
}

pub(crate) fn decode<D: DeserializeOwned>(data: Value) -> Result<D, ApiError> {
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pairs_request_serializes_like_a_graphql_post() {
        let pairs = vec!["Sol/USDC".to_string(), "WIF/SOL".to_string()];
        let body = serde_json::to_value(GraphQlRequest::token_pairs(&pairs)).unwrap();

        assert_eq!(body["operationName"], "GetTokenPairs");
        assert_eq!(body["variables"]["pairs"], json!(["Sol/USDC", "WIF/SOL"]));
        assert!(body["query"].as_str().unwrap().contains("tokenPairs(pairs: $pairs)"));
    }

    #[test]
    fn cache_key_depends_on_variables() {
        let a = GraphQlRequest::token_pairs(&["A/B".to_string()]);
        let b = GraphQlRequest::token_pairs(&["C/D".to_string()]);

        assert_eq!(a.cache_key(), a.clone().cache_key());
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn errors_are_joined_into_one_message() {
        let response = json!({
            "data": null,
            "errors": [{ "message": "pair not found" }, { "message": "try later" }]
        });

        let err = extract_data(response).unwrap_err();
        assert_eq!(err.to_string(), "pair not found; try later");
    }

    #[test]
    fn null_data_without_errors_is_missing_data() {
        assert!(matches!(
            extract_data(json!({ "data": null })),
            Err(ApiError::MissingData)
        ));
        assert!(matches!(extract_data(json!({})), Err(ApiError::MissingData)));
    }

    #[test]
    fn data_is_returned_untouched() {
        let data = extract_data(json!({ "data": { "tokenPairs": [] } })).unwrap();
        assert_eq!(data, json!({ "tokenPairs": [] }));
    }

    #[test]
    fn error_envelope_detection() {
        assert!(is_error_envelope(&json!({ "errors": [{ "message": "x" }] })));
        assert!(!is_error_envelope(&json!({ "errors": [] })));
        assert!(!is_error_envelope(&json!("Bad Gateway")));
    }
}
