//! Discrete status LED seam

/// A single on/off status LED
pub trait StatusLed {
    /// Drive the LED on or off
    fn set_on(&mut self, on: bool);

    /// Current logical state (true = lit)
    fn is_on(&self) -> bool;
}
