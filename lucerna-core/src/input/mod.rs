//! Input-side plumbing
//!
//! Raw falling edges arrive in interrupt context. The [`DebounceGate`]
//! filters contact bounce; the [`EdgePump`] turns accepted edges into
//! queued events for the main loop, which owns all bus traffic.

pub mod debounce;
pub mod pump;

pub use debounce::{Accepted, DebounceConfig, DebounceGate};
pub use pump::{EdgePump, BUTTON_LINES};
