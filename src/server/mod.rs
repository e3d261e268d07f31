//! Request serving for embedded device APIs
//!
//! A [`Server`] owns an ordered, bounded table of routes and drives one
//! connection at a time through its full request cycle: buffer, parse,
//! dispatch, respond, close. Routes pair a method filter and a device name
//! with a [`Handler`]; every route that matches a request fires, in
//! registration order, and a request nobody claims is answered with
//! `400 Bad Request`.

#![deny(unsafe_code)]

use heapless::Vec;

pub mod handlers;
pub mod response;

pub use response::ResponseWriter;

use crate::http::{
    Method, Request, RequestBuffer, RequestParser, STATUS_BAD_REQUEST, STATUS_OK,
};
use crate::net::{Close, Connection, error::Error};

/// Maximum number of registered routes
pub const MAX_ROUTES: usize = 16;

/// Result type for request handlers
pub type HandlerResult = Result<(), Error>;

/// Function-pointer handler, for registries built from plain functions
pub type HandlerFn<C> = fn(&Request<'_>, &mut ResponseWriter<'_, C>) -> HandlerResult;

/// Errors raised while setting up a server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerError {
    /// The route table is full
    RegistryFull,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ServerError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ServerError::RegistryFull => defmt::write!(f, "RegistryFull"),
        }
    }
}

/// Request handler invoked for every route that matches.
///
/// A handler owns the deep validation of its requests: dispatch only checks
/// the method filter and the first path segment, so the handler inspects the
/// remaining path depth and argument shape itself and simply returns without
/// writing anything when the request is not for it. The dispatcher then
/// falls back to `400 Bad Request` if nobody responded.
///
/// Any `FnMut` with the right signature is a handler, so plain functions and
/// closures register directly; stateful handlers are structs implementing
/// this trait.
pub trait Handler<C: Connection> {
    /// Handle one matched request
    fn handle(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult;
}

impl<C, F> Handler<C> for F
where
    C: Connection,
    F: FnMut(&Request<'_>, &mut ResponseWriter<'_, C>) -> HandlerResult,
{
    fn handle(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        self(request, response)
    }
}

/// One route: a method filter, a device-name filter, and the handler.
///
/// `device` is matched against path segment 0; `None` is the wildcard and
/// matches every request including one with an empty path.
pub struct Route<H> {
    method: Method,
    device: Option<&'static str>,
    handler: H,
}

impl<H> Route<H> {
    /// The method filter
    pub fn method(&self) -> Method {
        self.method
    }

    /// The device-name filter, `None` for wildcard
    pub fn device(&self) -> Option<&'static str> {
        self.device
    }

    /// The handler behind this route
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler behind this route
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    fn matches(&self, request: &Request<'_>) -> bool {
        self.method.matches(request.method())
            && match self.device {
                None => true,
                Some(device) => request.segment_is(0, device),
            }
    }
}

impl<H> core::fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("device", &self.device)
            .finish()
    }
}

/// Route table and request dispatcher.
///
/// The table is append-only and keeps registration order; it is not
/// consulted concurrently because a server processes exactly one connection
/// to completion at a time.
pub struct Server<H> {
    routes: Vec<Route<H>, MAX_ROUTES>,
}

impl<H> Server<H> {
    /// Create a server with an empty route table
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Number of registered routes
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// The registered routes in dispatch order
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// Mutable access to the registered routes.
    ///
    /// Stateful handlers live inside the table once registered; this is how
    /// an application reads their state back between request cycles.
    pub fn routes_mut(&mut self) -> &mut [Route<H>] {
        &mut self.routes
    }

    /// Append a route to the table.
    ///
    /// No de-duplication happens here: registering the same method and
    /// device twice is legal and both handlers will fire, in this order.
    pub fn register(
        &mut self,
        method: Method,
        device: Option<&'static str>,
        handler: H,
    ) -> Result<(), ServerError> {
        self.routes
            .push(Route {
                method,
                device,
                handler,
            })
            .map_err(|_| ServerError::RegistryFull)
    }

    /// Dispatch a parsed request to every matching route.
    ///
    /// A request with no path segments and no arguments is the identify
    /// probe: it is answered `200 OK` directly and no handler runs. For
    /// anything else the table is walked in registration order with no
    /// early exit, so several handlers may observe one request; at most one
    /// of them should respond (they self-exclude on path and argument
    /// shape). A second response attempt is swallowed by the writer's
    /// header guard rather than corrupting the wire format. If the walk
    /// ends with no header sent, a `400 Bad Request` is written.
    pub fn dispatch<C>(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> Result<(), Error>
    where
        C: Connection,
        H: Handler<C>,
    {
        if request.segment_count() == 0 && request.arg_count() == 0 {
            return response.respond(STATUS_OK);
        }

        for route in self.routes.iter_mut() {
            if route.matches(request) {
                route.handler.handle(request, response)?;
            }
        }

        if !response.header_sent() {
            response.respond(STATUS_BAD_REQUEST)?;
        }
        Ok(())
    }

    /// Run one full request cycle on a freshly accepted connection.
    ///
    /// Buffers the request, parses it, dispatches, finishes the response
    /// and closes the connection. A request that fails to parse is answered
    /// `400 Bad Request` and reported as `Ok`: malformed input fails the
    /// request, never the server. Only transport faults surface as errors.
    pub fn serve_connection<C>(&mut self, mut conn: C) -> Result<(), Error>
    where
        C: Connection,
        H: Handler<C>,
    {
        let mut buffer = RequestBuffer::new();
        buffer.fill_from(&mut conn)?;

        let mut response = ResponseWriter::new(&mut conn);
        match RequestParser::parse(&buffer) {
            Ok(request) => self.dispatch(&request, &mut response)?,
            Err(_) => response.respond(STATUS_BAD_REQUEST)?,
        }
        response.finish()?;

        conn.close().map_err(|_| Error::ConnectionClosed)
    }
}

impl<H> Default for Server<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> core::fmt::Debug for Server<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Server")
            .field("routes", &self.routes.len())
            .finish()
    }
}

/// Macro to register multiple routes at once
#[macro_export]
macro_rules! register_routes {
    ($server:expr, $(($method:expr, $device:expr, $handler:expr)),+ $(,)?) => {
        $(
            $server.register($method, $device, $handler).expect("Failed to register route");
        )+
    };
}
