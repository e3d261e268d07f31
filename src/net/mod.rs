//! Transport abstraction for the request engine
//!
//! The engine never owns a socket. It consumes any byte stream that can be
//! read from, written to, and closed, expressed through the small trait set
//! below. Listener-style transports implement [`Bind`] to hand one accepted
//! connection at a time to the server, which processes it to completion
//! before asking for the next.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error type for transport operations
pub mod error;

/// Re-exports of the transport traits
pub mod prelude {
    pub use super::{Bind, Close, Connection, Read, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// One accepted peer connection, processed to completion before the next
pub trait Connection: Read + Write + Close {}

/// A synchronous listener (server side)
pub trait Bind {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Bind to a local address and wait for one incoming connection
    fn bind(&mut self, local: &str) -> Result<Self::Connection, Self::Error>;
}
