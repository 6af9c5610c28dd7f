//! StarkEx Error Hierarchy
//!
//! 메시지 정규화, 인코딩, 해싱, 서명 과정에서 발생하는 오류 타입
//!
//! - Input errors (deterministic, never retried)
//!   - UnknownAsset / UnknownMarket
//!   - NotAMultipleOfQuantum
//!   - InvalidParams
//!   - FieldOverflow
//!   - InvalidSignature
//!   - InvalidPrivateKey
//! - Environment errors
//!   - BackendUnavailable
//!   - ConfigError / JsonError

use thiserror::Error;

/// StarkEx 오류
#[derive(Error, Debug)]
pub enum StarkExError {
    /// Asset symbol is absent from the registry
    #[error("Unknown asset: {asset}")]
    UnknownAsset { asset: String },

    /// Market symbol is absent from the registry
    #[error("Unknown market: {market}")]
    UnknownMarket { market: String },

    /// Amount does not convert evenly into quantums
    #[error("Amount {amount} is not a multiple of the quantum size 1e-{resolution} ({asset})")]
    NotAMultipleOfQuantum {
        amount: String,
        asset: String,
        resolution: u32,
    },

    /// Invalid or inconsistent caller parameters
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    /// A sub-value exceeds its declared bit width
    #[error("Field overflow: {field} has {actual_bits} bits, max {max_bits}")]
    FieldOverflow {
        field: String,
        max_bits: u64,
        actual_bits: u64,
    },

    /// Selected crypto backend is not present on this platform
    #[error("Crypto backend unavailable: {backend} - {message}")]
    BackendUnavailable { backend: String, message: String },

    /// Signing primitive rejected its inputs
    #[error("Invalid signature: {message}")]
    InvalidSignature { message: String },

    /// Invalid private key
    #[error("Invalid private key: {message}")]
    InvalidPrivateKey { message: String },

    /// Registry or config could not be loaded
    #[error("Config error: {message}")]
    ConfigError { message: String },

    /// JSON parsing error
    #[error("JSON error: {message}")]
    JsonError { message: String },
}

impl StarkExError {
    /// Returns the error code as a string constant
    pub fn code(&self) -> &'static str {
        match self {
            StarkExError::UnknownAsset { .. } => "UNKNOWN_ASSET",
            StarkExError::UnknownMarket { .. } => "UNKNOWN_MARKET",
            StarkExError::NotAMultipleOfQuantum { .. } => "NOT_A_MULTIPLE_OF_QUANTUM",
            StarkExError::InvalidParams { .. } => "INVALID_PARAMS",
            StarkExError::FieldOverflow { .. } => "FIELD_OVERFLOW",
            StarkExError::BackendUnavailable { .. } => "BACKEND_UNAVAILABLE",
            StarkExError::InvalidSignature { .. } => "INVALID_SIGNATURE",
            StarkExError::InvalidPrivateKey { .. } => "INVALID_PRIVATE_KEY",
            StarkExError::ConfigError { .. } => "CONFIG_ERROR",
            StarkExError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Returns true if the error was caused by caller input
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            StarkExError::BackendUnavailable { .. }
                | StarkExError::ConfigError { .. }
                | StarkExError::JsonError { .. }
        )
    }

    /// Nothing here is transient; callers should fix the input instead of retrying
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        StarkExError::InvalidParams {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StarkExError {
    fn from(err: serde_json::Error) -> Self {
        StarkExError::JsonError {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for StarkExError {
    fn from(err: std::io::Error) -> Self {
        StarkExError::ConfigError {
            message: err.to_string(),
        }
    }
}

/// Result 타입 alias
pub type StarkExResult<T> = Result<T, StarkExError>;
