//! Single LED switch handler
//!
//! Serves a one-switch device, conventionally registered as `blink`:
//!
//! ```text
//! GET /blink            report the LED state
//! PUT /blink?state=on   switch on
//! PUT /blink?state=off  switch off
//! ```

use super::super::{Handler, HandlerResult, ResponseWriter};
use crate::http::{Method, Request, STATUS_OK};
use crate::net::Connection;

/// In-memory LED switch.
///
/// Register once with [`Method::Any`]; GET and PUT are answered, everything
/// else declines. The application reads [`is_on`](Self::is_on) after a
/// request cycle to drive the actual pin.
#[derive(Debug, Clone, Default)]
pub struct LedHandler {
    on: bool,
}

impl LedHandler {
    /// Create a handler with the LED off
    pub fn new() -> Self {
        Self { on: false }
    }

    /// Current LED state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Force the LED state, bypassing the request surface
    pub fn set(&mut self, on: bool) {
        self.on = on;
    }
}

impl<C: Connection> Handler<C> for LedHandler {
    fn handle(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        match request.method() {
            Method::Get => {
                if request.segment_count() > 1 || request.arg_count() > 0 {
                    return Ok(());
                }
                let body = if self.on { "Led = on\n" } else { "Led = off\n" };
                response.respond_with(STATUS_OK, "text/plain", body)
            }
            Method::Put => {
                if request.segment_count() > 1 || request.arg_count() > 2 {
                    return Ok(());
                }
                if request.arg_is("state", "on") {
                    self.on = true;
                    return response.respond_with(STATUS_OK, "text/plain", "Led switched on");
                }
                if request.arg_is("state", "off") {
                    self.on = false;
                    return response.respond_with(STATUS_OK, "text/plain", "Led switched off");
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
