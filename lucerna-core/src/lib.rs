//! Board-agnostic core logic for the Lucerna demo-board firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Input filtering (debounce gate, interrupt-side event pump)
//! - Shared application state and input events
//! - Seam traits for the display, matrix and status LEDs
//! - The controller dispatching events to the render paths

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod controller;
pub mod input;
pub mod state;
pub mod traits;
