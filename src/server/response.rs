//! Response sequencing over a connection
//!
//! One [`ResponseWriter`] lives for exactly one request and walks the states
//! `NEW → HEADER_SENT → (CONTENT_SENT)* → finished`. The header can only be
//! emitted once, content is only observable after the header, and the
//! trailing line terminator is settled when the writer is finished. Handlers
//! cannot corrupt the wire format through this type, whatever order they
//! call it in.

use core::fmt::Write as _;

use heapless::String;

use crate::http::reason_phrase;
use crate::net::{Write, error::Error};

/// Sequences one HTTP response onto a connection.
///
/// The writer tracks three flags: header-sent, content-sent and
/// newline-pending. [`send_header`](Self::send_header) is idempotent, body
/// writes before the header are silent no-ops, and
/// [`finish`](Self::finish) emits a pending terminator and flushes. The
/// writer borrows the connection; closing it stays with the caller that
/// owns it.
pub struct ResponseWriter<'a, C: Write> {
    conn: &'a mut C,
    header_sent: bool,
    content_sent: bool,
    newline_pending: bool,
}

impl<'a, C: Write> ResponseWriter<'a, C> {
    /// Create a writer for one request on the given connection
    pub fn new(conn: &'a mut C) -> Self {
        Self {
            conn,
            header_sent: false,
            content_sent: false,
            newline_pending: false,
        }
    }

    /// Whether the status line and header block have been written
    pub fn header_sent(&self) -> bool {
        self.header_sent
    }

    /// Whether any body bytes have been written
    pub fn content_sent(&self) -> bool {
        self.content_sent
    }

    /// Send the status line and header block, once.
    ///
    /// Emits `HTTP/1.1 <code> <reason>`, a `Content-Type` (defaulting to
    /// `text/html`), a `Content-Length` when one is given, and
    /// `Connection: close`, followed by the blank line ending the header
    /// block. Calling this again after it has run is a no-op, so a second
    /// status line is impossible.
    pub fn send_header(
        &mut self,
        code: u16,
        content_type: Option<&str>,
        content_length: Option<usize>,
    ) -> Result<(), Error> {
        if self.header_sent {
            return Ok(());
        }

        let mut code_text: String<8> = String::new();
        write!(code_text, "{}", code).map_err(|_| Error::WriteError)?;

        self.write_str("HTTP/1.1 ")?;
        self.write_str(&code_text)?;
        self.write_str(" ")?;
        self.write_str(reason_phrase(code))?;
        self.write_str("\r\n")?;

        self.write_str("Content-Type: ")?;
        self.write_str(content_type.unwrap_or("text/html"))?;
        self.write_str("\r\n")?;

        if let Some(length) = content_length {
            let mut length_text: String<20> = String::new();
            write!(length_text, "{}", length).map_err(|_| Error::WriteError)?;
            self.write_str("Content-Length: ")?;
            self.write_str(&length_text)?;
            self.write_str("\r\n")?;
        }

        self.write_str("Connection: close\r\n")?;
        self.write_str("\r\n")?;

        self.header_sent = true;
        Ok(())
    }

    /// Header-only response: status line and headers, no body
    pub fn respond(&mut self, code: u16) -> Result<(), Error> {
        self.send_header(code, None, None)
    }

    /// Complete response: header with content type and length, then the body
    pub fn respond_with(&mut self, code: u16, content_type: &str, body: &str) -> Result<(), Error> {
        let length = if body.is_empty() {
            None
        } else {
            Some(body.len())
        };
        self.send_header(code, Some(content_type), length)?;
        if body.is_empty() {
            return Ok(());
        }
        self.send_content(body)
    }

    /// Append body text, leaving the line unterminated.
    ///
    /// A no-op until the header has been sent.
    pub fn send_content(&mut self, content: &str) -> Result<(), Error> {
        if !self.header_sent {
            return Ok(());
        }
        self.write_str(content)?;
        self.content_sent = true;
        self.newline_pending = true;
        Ok(())
    }

    /// Append one body line: optional label, optional value, CR/LF.
    ///
    /// A no-op until the header has been sent.
    pub fn send_line(&mut self, label: Option<&str>, value: Option<&str>) -> Result<(), Error> {
        if !self.header_sent {
            return Ok(());
        }
        if let Some(label) = label {
            self.write_str(label)?;
        }
        if let Some(value) = value {
            self.write_str(value)?;
        }
        self.write_str("\r\n")?;
        self.content_sent = true;
        self.newline_pending = false;
        Ok(())
    }

    /// Close out the response.
    ///
    /// Emits the trailing CR/LF if content was sent without one, then
    /// flushes. Reachable without a header ever being sent, in which case
    /// the peer sees nothing at all.
    pub fn finish(mut self) -> Result<(), Error> {
        if self.content_sent && self.newline_pending {
            self.write_all(b"\r\n")?;
        }
        self.conn.flush().map_err(|_| Error::WriteError)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        self.write_all(text.as_bytes())
    }

    // Short writes are retried; a zero-length write means the peer is gone.
    fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
        while !bytes.is_empty() {
            let n = self.conn.write(bytes).map_err(|_| Error::WriteError)?;
            if n == 0 {
                return Err(Error::ConnectionClosed);
            }
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

impl<C: Write> core::fmt::Debug for ResponseWriter<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponseWriter")
            .field("header_sent", &self.header_sent)
            .field("content_sent", &self.content_sent)
            .field("newline_pending", &self.newline_pending)
            .finish()
    }
}
