//! Built-in device handlers
//!
//! Ready-made handlers for the device shapes small boards serve most often:
//! a bank of relays and a single LED-style switch. Each validates its own
//! path depth and argument shape and declines anything unexpected, so they
//! compose with other routes under the dispatcher's 400 fallback. They keep
//! their state in memory; wiring the state changes to real output pins is
//! the application's job.

pub mod led;
pub mod relay;

pub use led::LedHandler;
pub use relay::{JsonRelayHandler, RELAY_COUNT, RelayBank, RelayHandler, RelayState};
