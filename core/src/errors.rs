use thiserror::Error;

/// Stable error codes carried by `RouteError::InvalidSpecification`.
pub mod error_codes {
    pub const EMPTY_PARAM_NAME: &str = "ROUTE_CORE_EMPTY_PARAM_NAME";
    pub const DUPLICATE_PARAM: &str = "ROUTE_CORE_DUPLICATE_PARAM";
    pub const MISPLACED_CATCH_ALL: &str = "ROUTE_CORE_MISPLACED_CATCH_ALL";
    pub const INVALID_HTTP_METHOD: &str = "ROUTE_CORE_INVALID_HTTP_METHOD";
    pub const INVALID_PATTERN: &str = "ROUTE_CORE_INVALID_PATTERN";
}

#[derive(Debug, Error)]
pub enum RouteError {
    /// A single specification is malformed. Rejecting one specification
    /// never aborts compilation of the others.
    #[error("INVALID SPECIFICATION: {code} - {message}")]
    InvalidSpecification { code: String, message: String },

    /// Match was attempted before the table was compiled.
    #[error("NOT READY: routing table has not been compiled")]
    NotReady,

    /// Registration was attempted after the table was compiled.
    #[error("ALREADY COMPILED: routing table is sealed against registration")]
    AlreadyCompiled,
}
