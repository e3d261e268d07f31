//! Single-pass request-line parser
//!
//! The parser walks the buffered request text exactly once, byte by byte,
//! cutting method, path segments, query arguments and version out of the
//! buffer as borrowed subslices. There is no backtracking and no state kept
//! between requests; a structurally broken request stops the walk at the
//! first impossible transition.

use heapless::Vec;

use super::request::{QueryArg, Request, RequestBuffer};
use super::{MAX_PATH_SEGMENTS, MAX_QUERY_ARGS, Method};

/// Errors produced by the request parser.
///
/// Every variant is a structural failure: the request is discarded whole and
/// the server answers with a bad-request status. Capacity overruns are
/// reported here rather than truncated silently.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    /// The buffer held no bytes.
    Empty,
    /// The request text is not valid UTF-8.
    Encoding,
    /// Input ended before the method token was terminated by a space.
    TruncatedMethod,
    /// The character after the method was not `/`.
    ExpectedPath,
    /// More path segments than the engine keeps per request.
    TooManyPathSegments,
    /// More query arguments than the engine keeps per request.
    TooManyQueryArgs,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParseError::Empty => defmt::write!(f, "Empty"),
            ParseError::Encoding => defmt::write!(f, "Encoding"),
            ParseError::TruncatedMethod => defmt::write!(f, "TruncatedMethod"),
            ParseError::ExpectedPath => defmt::write!(f, "ExpectedPath"),
            ParseError::TooManyPathSegments => defmt::write!(f, "TooManyPathSegments"),
            ParseError::TooManyQueryArgs => defmt::write!(f, "TooManyQueryArgs"),
        }
    }
}

/// Parser state, advanced once per input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Accumulating the method token
    Method,
    /// Expecting the `/` that opens the path
    PathStart,
    /// Accumulating a path segment
    Segment,
    /// Accumulating an argument label
    ArgLabel,
    /// Accumulating an argument value
    ArgValue,
    /// Accumulating the version token
    Version,
    /// Terminal state, remaining input is ignored
    Done,
}

/// Request-line parser
pub struct RequestParser;

impl RequestParser {
    /// Parse one buffered request line into a [`Request`].
    ///
    /// The input may end without any terminator or carry a CR/LF; everything
    /// after the first CR/LF is ignored, so a full HTTP payload with header
    /// lines can be fed in unmodified. An empty buffer is an error and so is
    /// any shape the grammar cannot reach.
    pub fn parse(buffer: &RequestBuffer) -> Result<Request<'_>, ParseError> {
        let text = core::str::from_utf8(buffer.as_bytes()).map_err(|_| ParseError::Encoding)?;
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut state = State::Method;
        let mut start = 0usize;
        let mut method = Method::Any;
        let mut version = "";
        let mut label = "";
        let mut path: Vec<&str, MAX_PATH_SEGMENTS> = Vec::new();
        let mut args: Vec<QueryArg<'_>, MAX_QUERY_ARGS> = Vec::new();

        for (i, byte) in text.bytes().enumerate() {
            match state {
                State::Method => {
                    if byte == b' ' {
                        method = Method::from_token(&text[..i]);
                        state = State::PathStart;
                    }
                }
                State::PathStart => {
                    if byte != b'/' {
                        return Err(ParseError::ExpectedPath);
                    }
                    state = State::Segment;
                    start = i + 1;
                }
                State::Segment => match byte {
                    b'/' => {
                        push_segment(&mut path, &text[start..i])?;
                        start = i + 1;
                    }
                    b'?' => {
                        push_segment(&mut path, &text[start..i])?;
                        state = State::ArgLabel;
                        start = i + 1;
                    }
                    b' ' => {
                        push_segment(&mut path, &text[start..i])?;
                        state = State::Version;
                        start = i + 1;
                    }
                    b'\r' | b'\n' => {
                        push_segment(&mut path, &text[start..i])?;
                        state = State::Done;
                    }
                    _ => {}
                },
                State::ArgLabel => match byte {
                    b'=' => {
                        label = &text[start..i];
                        state = State::ArgValue;
                        start = i + 1;
                    }
                    b'&' => {
                        push_arg(&mut args, &text[start..i], None)?;
                        start = i + 1;
                    }
                    b' ' => {
                        push_arg(&mut args, &text[start..i], None)?;
                        state = State::Version;
                        start = i + 1;
                    }
                    b'\r' | b'\n' => {
                        push_arg(&mut args, &text[start..i], None)?;
                        state = State::Done;
                    }
                    _ => {}
                },
                State::ArgValue => match byte {
                    // A second `=` is ordinary value text
                    b'&' => {
                        push_arg(&mut args, label, Some(&text[start..i]))?;
                        state = State::ArgLabel;
                        start = i + 1;
                    }
                    b' ' => {
                        push_arg(&mut args, label, Some(&text[start..i]))?;
                        state = State::Version;
                        start = i + 1;
                    }
                    b'\r' | b'\n' => {
                        push_arg(&mut args, label, Some(&text[start..i]))?;
                        state = State::Done;
                    }
                    _ => {}
                },
                State::Version => match byte {
                    b'\r' | b'\n' => {
                        version = &text[start..i];
                        state = State::Done;
                    }
                    _ => {}
                },
                State::Done => break,
            }
        }

        // The line may end without a terminator; close out the state the
        // walk stopped in.
        match state {
            State::Method => return Err(ParseError::TruncatedMethod),
            State::PathStart => return Err(ParseError::ExpectedPath),
            State::Segment => push_segment(&mut path, &text[start..])?,
            State::ArgLabel => push_arg(&mut args, &text[start..], None)?,
            State::ArgValue => push_arg(&mut args, label, Some(&text[start..]))?,
            State::Version => version = &text[start..],
            State::Done => {}
        }

        let version = version.strip_prefix("HTTP/").unwrap_or(version);

        Ok(Request {
            method,
            version,
            path,
            args,
        })
    }
}

/// Store a path segment, skipping empty ones so `/`, `//` and trailing
/// slashes never occupy a slot.
fn push_segment<'a>(
    path: &mut Vec<&'a str, MAX_PATH_SEGMENTS>,
    segment: &'a str,
) -> Result<(), ParseError> {
    if segment.is_empty() {
        return Ok(());
    }
    path.push(segment)
        .map_err(|_| ParseError::TooManyPathSegments)
}

/// Store a query argument. A bare separator stores nothing; an empty label
/// is kept when it carries an explicit value.
fn push_arg<'a>(
    args: &mut Vec<QueryArg<'a>, MAX_QUERY_ARGS>,
    label: &'a str,
    value: Option<&'a str>,
) -> Result<(), ParseError> {
    if label.is_empty() && value.is_none() {
        return Ok(());
    }
    args.push(QueryArg { label, value })
        .map_err(|_| ParseError::TooManyQueryArgs)
}
