//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the seams defined
//! in lucerna-core for the demo board's peripherals:
//!
//! - SSD1306 128x64 OLED (framebuffer, text drawing, page protocol)
//! - 5x5 WS2812 matrix renderer (digit glyphs, GRB wire encoding)
//! - GPIO-backed discrete status LEDs

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod led;
pub mod matrix;
pub mod ssd1306;
