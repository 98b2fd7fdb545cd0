//! Interrupt-side event pump
//!
//! The edge interrupt must complete quickly and never touch the shared
//! bus, so it only records: a gate check and, on acceptance, one queue
//! push. The main loop drains the queue and performs all state mutation
//! and bus I/O.

use heapless::spsc::Producer;

use super::debounce::DebounceGate;
use crate::state::{Button, InputEvent};

/// Number of debounced button lines
pub const BUTTON_LINES: usize = 2;

/// Interrupt-context half of the input path
///
/// Owns the debounce gate and the producer end of the single-consumer
/// event queue. The consumer end belongs to the main loop.
pub struct EdgePump<'q, const DEPTH: usize> {
    gate: DebounceGate<BUTTON_LINES>,
    events: Producer<'q, InputEvent, DEPTH>,
}

impl<'q, const DEPTH: usize> EdgePump<'q, DEPTH> {
    /// Create a pump over the producer end of the event queue
    pub fn new(gate: DebounceGate<BUTTON_LINES>, events: Producer<'q, InputEvent, DEPTH>) -> Self {
        Self { gate, events }
    }

    /// Record a falling edge seen on a button line.
    ///
    /// Call from the edge interrupt. Bounced edges are absorbed by the
    /// gate; accepted edges are queued for the main loop. A full queue
    /// drops the event, same policy as bounce.
    pub fn on_edge(&mut self, button: Button, now_us: u64) {
        if self.gate.on_edge(button.line(), now_us).is_some() {
            let _ = self.events.enqueue(InputEvent::Button(button));
        }
    }

    /// The gate, for inspecting per-line timestamps
    pub fn gate(&self) -> &DebounceGate<BUTTON_LINES> {
        &self.gate
    }
}
