//! Request buffer and parsed-request views
//!
//! A [`RequestBuffer`] owns the raw bytes of exactly one request; the parser
//! hands out a [`Request`] whose path segments and query arguments are
//! subslices of that buffer. Nothing here allocates and nothing outlives the
//! buffer it was parsed from.

use heapless::Vec;

use super::{MAX_PATH_SEGMENTS, MAX_QUERY_ARGS, Method, REQUEST_BUFFER_SIZE};
use crate::net::{Read, error::Error};

/// Fixed-capacity buffer holding the raw text of one request.
///
/// The buffer is filled once per connection and reset before the next. Input
/// longer than the capacity is truncated at the fill boundary; the request
/// line a small device API expects fits comfortably.
#[derive(Debug)]
pub struct RequestBuffer {
    data: [u8; REQUEST_BUFFER_SIZE],
    len: usize,
}

impl RequestBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            data: [0; REQUEST_BUFFER_SIZE],
            len: 0,
        }
    }

    /// Number of bytes currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> usize {
        REQUEST_BUFFER_SIZE
    }

    /// Discard the current contents
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The raw bytes received so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Fill the buffer from a connection.
    ///
    /// Reads until the transport reports end of input or the buffer is full;
    /// whatever exceeds the capacity stays unread on the transport. Any
    /// previous contents are discarded. Returns the number of bytes held.
    pub fn fill_from<R: Read>(&mut self, conn: &mut R) -> Result<usize, Error> {
        self.len = 0;
        while self.len < self.data.len() {
            let n = conn
                .read(&mut self.data[self.len..])
                .map_err(|_| Error::ReadError)?;
            if n == 0 {
                break;
            }
            self.len += n;
        }
        Ok(self.len)
    }

    /// Fill the buffer from a byte slice, truncating at capacity.
    ///
    /// Returns the number of bytes kept.
    pub fn fill_from_slice(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.data.len());
        self.data[..n].copy_from_slice(&data[..n]);
        self.len = n;
        n
    }
}

impl Default for RequestBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// One query argument: a label with an optional value.
///
/// `?mode` parses to a `None` value while `?mode=` parses to `Some("")`;
/// handlers that test for a literal value can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryArg<'a> {
    /// Argument label as it appeared in the query string
    pub label: &'a str,
    /// Argument value, absent for label-only arguments
    pub value: Option<&'a str>,
}

/// Parsed view of one request, borrowing from its [`RequestBuffer`].
///
/// # Example
///
/// ```rust
/// use microweb::http::{Method, RequestBuffer, RequestParser};
///
/// let mut buffer = RequestBuffer::new();
/// buffer.fill_from_slice(b"PUT /relays/3?state=on HTTP/1.1\r\n");
///
/// let request = RequestParser::parse(&buffer).unwrap();
/// assert_eq!(request.method(), Method::Put);
/// assert_eq!(request.device(), Some("relays"));
/// assert_eq!(request.segment(1), Some("3"));
/// assert!(request.arg_is("state", "on"));
/// assert_eq!(request.version(), "1.1");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Request<'a> {
    pub(crate) method: Method,
    pub(crate) version: &'a str,
    pub(crate) path: Vec<&'a str, MAX_PATH_SEGMENTS>,
    pub(crate) args: Vec<QueryArg<'a>, MAX_QUERY_ARGS>,
}

impl<'a> Request<'a> {
    /// The request method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Version text after `HTTP/`, empty when the request carried none
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// Number of path segments
    pub fn segment_count(&self) -> usize {
        self.path.len()
    }

    /// All path segments in order
    pub fn segments(&self) -> &[&'a str] {
        &self.path
    }

    /// Path segment at `index`
    pub fn segment(&self, index: usize) -> Option<&'a str> {
        self.path.get(index).copied()
    }

    /// Whether the segment at `index` exists and equals `expected`
    pub fn segment_is(&self, index: usize, expected: &str) -> bool {
        self.segment(index) == Some(expected)
    }

    /// The device selector: path segment 0
    pub fn device(&self) -> Option<&'a str> {
        self.segment(0)
    }

    /// Number of query arguments
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// All query arguments in order of appearance
    pub fn args(&self) -> &[QueryArg<'a>] {
        &self.args
    }

    /// First argument with the given label
    pub fn arg(&self, label: &str) -> Option<&QueryArg<'a>> {
        self.args.iter().find(|a| a.label == label)
    }

    /// Value of the first argument with the given label.
    ///
    /// `None` when the label is missing or carries no value.
    pub fn arg_value(&self, label: &str) -> Option<&'a str> {
        self.arg(label).and_then(|a| a.value)
    }

    /// Whether any argument with the given label is present
    pub fn has_arg(&self, label: &str) -> bool {
        self.arg(label).is_some()
    }

    /// Whether any argument pairs the given label with exactly `expected`.
    ///
    /// Scans all arguments, so duplicate labels are each given a chance.
    pub fn arg_is(&self, label: &str, expected: &str) -> bool {
        self.args
            .iter()
            .any(|a| a.label == label && a.value == Some(expected))
    }
}
