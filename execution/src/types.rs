use std::fmt;

use alloy::primitives::{Address, Bytes};
use eyre::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::ExecutionError;

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallOpts {
    pub to: Address,
    pub data: Bytes,
}

impl fmt::Debug for CallOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallOpts")
            .field("to", &self.to)
            .field("data", &hex::encode(&self.data))
            .finish()
    }
}

#[derive(Serialize, Debug)]
pub struct JsonRpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        }
    }
}

/// A JSON-RPC response body. An `error` member counts as present even when
/// its value is `null`. `result` is kept untyped so that an error response
/// with an odd `result` still parses.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Success(String),
    Error(Value),
}

impl RpcResponse {
    pub fn success(result: &str) -> Self {
        Self {
            result: Some(Value::String(result.to_string())),
            error: None,
        }
    }

    pub fn into_outcome(self) -> Result<CallOutcome> {
        if let Some(err) = self.error {
            return Ok(CallOutcome::Error(err));
        }

        match self.result {
            Some(Value::String(result)) => Ok(CallOutcome::Success(result)),
            Some(other) => Err(ExecutionError::InvalidResult(other).into()),
            None => Err(ExecutionError::MissingResult.into()),
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_takes_precedence() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0x","error":{"code":-32000,"message":"execution reverted"}}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();

        match response.into_outcome().unwrap() {
            CallOutcome::Error(err) => assert_eq!(err["code"], -32000),
            CallOutcome::Success(_) => panic!("expected error outcome"),
        }
    }

    #[test]
    fn test_null_error_is_present() {
        let response: RpcResponse = serde_json::from_str(r#"{"error":null}"#).unwrap();
        assert_eq!(
            response.into_outcome().unwrap(),
            CallOutcome::Error(Value::Null)
        );
    }

    #[test]
    fn test_missing_result() {
        let response: RpcResponse = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();
        assert!(response.into_outcome().is_err());
    }

    #[test]
    fn test_error_with_non_string_result() {
        let body = r#"{"error":{"code":-32000,"message":"execution reverted"},"result":5}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();

        match response.into_outcome().unwrap() {
            CallOutcome::Error(err) => assert_eq!(err["message"], "execution reverted"),
            CallOutcome::Success(_) => panic!("expected error outcome"),
        }
    }

    #[test]
    fn test_non_string_result() {
        let response: RpcResponse = serde_json::from_str(r#"{"result":5}"#).unwrap();
        let err = response.into_outcome().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExecutionError>(),
            Some(ExecutionError::InvalidResult(_))
        ));
    }

    #[test]
    fn test_request_shape() {
        let request = JsonRpcRequest::new("eth_call", ("a", "latest"));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "eth_call");
        assert_eq!(value["params"][1], "latest");
        assert_eq!(value["id"], 1);
    }
}
