//! Hardware seam traits
//!
//! The controller is generic over these; lucerna-drivers provides the
//! concrete implementations. Keeping the seams here lets the whole
//! dispatch path run on the host under test with mock peripherals.

pub mod display;
pub mod led;
pub mod matrix;

pub use display::StatusDisplay;
pub use led::StatusLed;
pub use matrix::DigitMatrix;
