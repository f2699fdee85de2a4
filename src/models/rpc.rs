use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: u32 = 1;

/// Parameters of a JSON-RPC call: either by position or by name, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Default for Params {
    fn default() -> Self {
        Params::Named(Map::new())
    }
}

impl Params {
    /// Builds params from separately collected positional and named values.
    /// Supplying both kinds is rejected.
    pub fn from_parts(positional: Vec<Value>, named: Map<String, Value>) -> Result<Self> {
        match (positional.is_empty(), named.is_empty()) {
            (false, false) => Err(AppError::InvalidParams(
                "positional or named params can be passed, but not both".to_string(),
            )),
            (false, true) => Ok(Params::Positional(positional)),
            _ => Ok(Params::Named(named)),
        }
    }

    /// Accepts a JSON array, object or null.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Params::default()),
            Value::Array(values) => Ok(Params::Positional(values)),
            Value::Object(map) => Ok(Params::Named(map)),
            other => Err(AppError::InvalidParams(format!(
                "params must be an array or an object, got {}",
                other
            ))),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params::Named(map)
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Params::Positional(values)
    }
}

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub id: u32,
    pub params: &'a Params,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            id: REQUEST_ID,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Unwraps the envelope into its result, turning an error object into
    /// `AppError::Rpc`.
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(AppError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        self.result.ok_or(AppError::MissingResult)
    }
}
