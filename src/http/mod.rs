//! HTTP request model
//!
//! This module holds the pieces a request passes through on its way into the
//! server: the fixed-capacity [`RequestBuffer`], the single-pass
//! [`RequestParser`], and the borrowed [`Request`] view handed to handlers.
//! Everything is sized at compile time; parsing never allocates.

/// Single-pass request-line parser
pub mod parser;

/// Request buffer and parsed-request views
pub mod request;

pub use parser::{ParseError, RequestParser};
pub use request::{QueryArg, Request, RequestBuffer};

/// Capacity of the raw request buffer in bytes
pub const REQUEST_BUFFER_SIZE: usize = 200;

/// Maximum number of path segments kept per request
pub const MAX_PATH_SEGMENTS: usize = 4;

/// Maximum number of query arguments kept per request
pub const MAX_QUERY_ARGS: usize = 4;

/// Status code sent for the identify probe and by successful handlers
pub const STATUS_OK: u16 = 200;

/// Status code sent for malformed or unclaimed requests
pub const STATUS_BAD_REQUEST: u16 = 400;

/// HTTP request methods
///
/// [`Method::Any`] doubles as the wildcard route filter and as the
/// classification for method tokens the parser does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - retrieve a representation
    Get,
    /// POST - submit data
    Post,
    /// PUT - replace state
    Put,
    /// DELETE - remove state
    Delete,
    /// OPTIONS - query capabilities
    Options,
    /// PATCH - partial update
    Patch,
    /// Wildcard: any method, or an unrecognized token
    Any,
}

impl Method {
    /// Classify a method token. Unrecognized text maps to [`Method::Any`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            _ => Method::Any,
        }
    }

    /// Canonical token for the method
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Any => "*",
        }
    }

    /// Wildcard-aware match with `self` as the route filter.
    ///
    /// An [`Method::Any`] filter accepts every request method; a concrete
    /// filter accepts only its own method. A request classified as `Any`
    /// (unrecognized token) is accepted by `Any` filters alone.
    pub fn matches(self, actual: Method) -> bool {
        self == Method::Any || self == actual
    }
}

/// Reason phrase for a numeric status code.
///
/// Covers the codes a small device API realistically emits; anything else
/// renders as `Unknown` rather than failing the response.
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
