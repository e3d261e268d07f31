//! Relay bank control handler
//!
//! Serves a `relays` device with the query surface of a typical relay
//! board:
//!
//! ```text
//! GET /relays              show status of all relays
//! GET /relays?state=on     show relays that are currently on
//! GET /relays/3            show status of relay 3
//! PUT /relays?state=off    switch all relays off
//! PUT /relays/3?state=on   switch relay 3 on
//! ```
//!
//! [`RelayHandler`] renders plain-text reports, [`JsonRelayHandler`] a JSON
//! array; both drive the same [`RelayBank`] model. A `state` value other
//! than `on`/`off` on a PUT declines, which surfaces to the client as
//! `400 Bad Request`.

use core::fmt::Write as _;

use heapless::{String, Vec};
use serde::Serialize;

use super::super::{Handler, HandlerResult, ResponseWriter};
use crate::http::{Method, Request, STATUS_OK};
use crate::net::{Connection, Write, error::Error};

/// Number of relays in a bank
pub const RELAY_COUNT: usize = 4;

const REPORT_CAPACITY: usize = 256;

/// On/off state of one relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// Relay contact closed
    On,
    /// Relay contact open
    Off,
}

impl RelayState {
    /// Command token for the state, as used in `state=` arguments
    pub fn as_str(self) -> &'static str {
        match self {
            RelayState::On => "on",
            RelayState::Off => "off",
        }
    }
}

/// Relay states and the output pins they stand for.
///
/// The bank is an in-memory model; applications mirror its state onto real
/// pins after a request cycle, or wrap the handler to do so inline.
#[derive(Debug, Clone)]
pub struct RelayBank {
    pins: [u8; RELAY_COUNT],
    states: [RelayState; RELAY_COUNT],
}

impl RelayBank {
    /// Create a bank with all relays off
    pub fn new(pins: [u8; RELAY_COUNT]) -> Self {
        Self {
            pins,
            states: [RelayState::Off; RELAY_COUNT],
        }
    }

    /// Pin number of relay `index`
    pub fn pin(&self, index: usize) -> Option<u8> {
        self.pins.get(index).copied()
    }

    /// State of relay `index`, `None` when out of range
    pub fn state(&self, index: usize) -> Option<RelayState> {
        self.states.get(index).copied()
    }

    /// Set relay `index`; returns whether the relay exists
    pub fn set(&mut self, index: usize, state: RelayState) -> bool {
        match self.states.get_mut(index) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    /// Set every relay in the bank
    pub fn set_all(&mut self, state: RelayState) {
        self.states = [state; RELAY_COUNT];
    }
}

/// Relay bank handler with plain-text reports.
///
/// Register once with [`Method::Any`]; the handler answers GET and PUT
/// itself and declines other methods.
#[derive(Debug, Clone)]
pub struct RelayHandler {
    bank: RelayBank,
}

impl RelayHandler {
    /// Create a handler over a fresh bank, all relays off
    pub fn new(pins: [u8; RELAY_COUNT]) -> Self {
        Self {
            bank: RelayBank::new(pins),
        }
    }

    /// The underlying bank
    pub fn bank(&self) -> &RelayBank {
        &self.bank
    }

    /// Mutable access to the underlying bank
    pub fn bank_mut(&mut self) -> &mut RelayBank {
        &mut self.bank
    }

    fn get<C: Write>(
        &self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        if !get_shape_ok(request) {
            return Ok(());
        }

        let mut report: String<REPORT_CAPACITY> = String::new();
        let rendered = match request.segment(1) {
            Some(index_text) => render_one(&self.bank, &mut report, index_text),
            None => render_filtered(&self.bank, &mut report, requested_state(request)),
        };
        rendered.map_err(|_| Error::WriteError)?;

        response.respond_with(STATUS_OK, "text/plain", &report)
    }
}

impl<C: Connection> Handler<C> for RelayHandler {
    fn handle(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        match request.method() {
            Method::Get => self.get(request, response),
            Method::Put => handle_put(&mut self.bank, request, response),
            _ => Ok(()),
        }
    }
}

/// Relay bank handler with JSON reports.
///
/// Same query surface as [`RelayHandler`]; GET renders an
/// `application/json` array of `{"relay": i, "state": "on"|"off"}`
/// objects, and an undefined relay renders as an empty array.
#[derive(Debug, Clone)]
pub struct JsonRelayHandler {
    bank: RelayBank,
}

#[derive(Serialize)]
struct RelayReport {
    relay: u8,
    state: &'static str,
}

impl JsonRelayHandler {
    /// Create a handler over a fresh bank, all relays off
    pub fn new(pins: [u8; RELAY_COUNT]) -> Self {
        Self {
            bank: RelayBank::new(pins),
        }
    }

    /// The underlying bank
    pub fn bank(&self) -> &RelayBank {
        &self.bank
    }

    /// Mutable access to the underlying bank
    pub fn bank_mut(&mut self) -> &mut RelayBank {
        &mut self.bank
    }

    fn get<C: Write>(
        &self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        if !get_shape_ok(request) {
            return Ok(());
        }

        let mut reports: Vec<RelayReport, RELAY_COUNT> = Vec::new();
        match request.segment(1) {
            Some(index_text) => {
                let index = parse_index(index_text);
                if let Some(state) = self.bank.state(index) {
                    // Cannot overflow: one report in a RELAY_COUNT vec
                    let _ = reports.push(RelayReport {
                        relay: index as u8,
                        state: state.as_str(),
                    });
                }
            }
            None => {
                let filter = requested_state(request);
                for index in 0..RELAY_COUNT {
                    let state = self.bank.states[index];
                    if filter.is_none() || filter == Some(state) {
                        let _ = reports.push(RelayReport {
                            relay: index as u8,
                            state: state.as_str(),
                        });
                    }
                }
            }
        }

        let mut buf = [0u8; REPORT_CAPACITY];
        let len =
            serde_json_core::to_slice(&reports[..], &mut buf).map_err(|_| Error::WriteError)?;
        let body = core::str::from_utf8(&buf[..len]).map_err(|_| Error::WriteError)?;

        response.respond_with(STATUS_OK, "application/json", body)
    }
}

impl<C: Connection> Handler<C> for JsonRelayHandler {
    fn handle(
        &mut self,
        request: &Request<'_>,
        response: &mut ResponseWriter<'_, C>,
    ) -> HandlerResult {
        match request.method() {
            Method::Get => self.get(request, response),
            Method::Put => handle_put(&mut self.bank, request, response),
            _ => Ok(()),
        }
    }
}

/// GET accepts `/relays`, `/relays?state=x` and `/relays/<i>`; an index
/// combined with arguments is not ours.
fn get_shape_ok(request: &Request<'_>) -> bool {
    let segments = request.segment_count();
    if segments < 1 || segments > 2 {
        return false;
    }
    if request.arg_count() > 1 {
        return false;
    }
    !(segments == 2 && request.arg_count() > 0)
}

/// PUT accepts `/relays?state=x` and `/relays/<i>?state=x`, one argument
/// exactly.
fn put_shape_ok(request: &Request<'_>) -> bool {
    let segments = request.segment_count();
    segments >= 1 && segments <= 2 && request.arg_count() == 1
}

/// The `state=` argument as a relay state, `None` when absent or neither
/// `on` nor `off`
fn requested_state(request: &Request<'_>) -> Option<RelayState> {
    if request.arg_is("state", "on") {
        return Some(RelayState::On);
    }
    if request.arg_is("state", "off") {
        return Some(RelayState::Off);
    }
    None
}

/// Relay index from a path segment; anything unparseable acts out of range
fn parse_index(text: &str) -> usize {
    text.parse().unwrap_or(usize::MAX)
}

fn handle_put<C: Write>(
    bank: &mut RelayBank,
    request: &Request<'_>,
    response: &mut ResponseWriter<'_, C>,
) -> HandlerResult {
    if !put_shape_ok(request) {
        return Ok(());
    }
    let Some(state) = requested_state(request) else {
        return Ok(());
    };

    match request.segment(1) {
        Some(index_text) => {
            // Out-of-range indices switch nothing and still succeed
            bank.set(parse_index(index_text), state);
        }
        None => bank.set_all(state),
    }
    response.respond(STATUS_OK)
}

fn render_one(
    bank: &RelayBank,
    out: &mut String<REPORT_CAPACITY>,
    index_text: &str,
) -> core::fmt::Result {
    let index = parse_index(index_text);
    match bank.state(index) {
        Some(state) => render_line(bank, out, index, state),
        None => write!(out, "# relay {} not defined\r\n", index_text),
    }
}

fn render_filtered(
    bank: &RelayBank,
    out: &mut String<REPORT_CAPACITY>,
    filter: Option<RelayState>,
) -> core::fmt::Result {
    for index in 0..RELAY_COUNT {
        let state = bank.states[index];
        if filter.is_none() || filter == Some(state) {
            render_line(bank, out, index, state)?;
        }
    }
    Ok(())
}

fn render_line(
    bank: &RelayBank,
    out: &mut String<REPORT_CAPACITY>,
    index: usize,
    state: RelayState,
) -> core::fmt::Result {
    write!(
        out,
        "# relay {} on pin {} = {}\r\n",
        index,
        bank.pins[index],
        state.as_str()
    )
}
