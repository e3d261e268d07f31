//! # microweb - embedded HTTP device-API engine
//!
//! A tiny request-processing engine that lets resource-constrained IoT devices
//! serve REST-style device APIs over a single connection at a time. One raw
//! HTTP request line is buffered, tokenized in a single pass into bounded path
//! segments and query arguments, routed to registered device handlers, and
//! answered through a response writer that enforces correct wire ordering.
//! The library is designed for embedded systems and supports `no_std`
//! environments; nothing in it allocates.
//!
//! ## Features
//!
//! ### Request engine
//! - **Fixed-capacity parsing**: one 200-byte request buffer, at most 4 path
//!   segments and 4 query arguments per request, all capacity overruns
//!   reported as errors instead of silent truncation
//! - **Single-pass tokenizer**: method, path, query arguments and version are
//!   extracted in one forward walk with no backtracking
//! - **Borrowed views**: parsed text is returned as subslices of the request
//!   buffer, so a parsed request costs no memory beyond the buffer itself
//!
//! ### Routing
//! - Ordered route table of (method filter, device name, handler) entries
//! - Wildcard method and wildcard device registrations
//! - Every matching route fires, in registration order; handlers validate
//!   their own path depth and argument shape
//! - Built-in liveness probe: a bare `/` request is answered `200 OK`
//!   without touching any handler
//!
//! ### Response sequencing
//! - Header-before-content ordering enforced by construction
//! - Idempotent header emission (a second status line is impossible)
//! - Automatic `400 Bad Request` when no handler claims a request
//!
//! ### Built-in device handlers
//! - Relay bank control with plain-text and JSON reporting
//! - Single LED/actuator switching
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! microweb = "0.1.0"
//! ```
//!
//! ### Serving a device API
//!
//! ```rust,no_run
//! use microweb::http::{Method, Request};
//! use microweb::net::error::Error;
//! use microweb::server::{HandlerFn, ResponseWriter, Server};
//! # use microweb::net::Connection;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl microweb::net::Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl microweb::net::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> { Ok(0) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl microweb::net::Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//!
//! fn status(
//!     request: &Request<'_>,
//!     response: &mut ResponseWriter<'_, MockConnection>,
//! ) -> Result<(), Error> {
//!     if request.segment_count() != 1 || request.arg_count() != 0 {
//!         return Ok(());
//!     }
//!     response.respond_with(200, "text/plain", "ready")
//! }
//!
//! let mut server: Server<HandlerFn<MockConnection>> = Server::new();
//! let _ = server.register(Method::Get, Some("status"), status);
//!
//! let connection = MockConnection;
//! let _ = server.serve_connection(connection);
//! ```
//!
//! ### Stateful handlers
//!
//! Handlers with state are plain structs implementing
//! [`server::Handler`]; the crate ships a few under [`server::handlers`]:
//!
//! ```rust,ignore
//! use microweb::server::handlers::RelayHandler;
//!
//! let mut server = Server::new();
//! server.register(Method::Any, Some("relays"), RelayHandler::new([2, 3, 4, 5]))?;
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![doc(html_root_url = "https://docs.rs/microweb/0.1.0")]

/// Transport abstraction the engine is generic over.
///
/// Sockets, embedded TCP stacks, serial links and test doubles all plug in
/// through the same small set of traits.
pub mod net;

/// HTTP request model: buffer, single-pass parser, and parsed-request views.
pub mod http;

/// Serving layer: route table, dispatcher, response writer, and the built-in
/// device handlers.
pub mod server;
