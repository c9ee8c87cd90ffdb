use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("rpc response carries neither a result nor an error")]
    MissingResult,
    #[error("rpc result is not a string: {0}")]
    InvalidResult(serde_json::Value),
}

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("abi string header missing or malformed")]
    InvalidHeader,
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
