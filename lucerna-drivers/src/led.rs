//! GPIO status LEDs
//!
//! The board's discrete LEDs hang directly off GPIO pins. This wraps a
//! pin behind the [`StatusLed`] seam so the controller never sees pin
//! polarity.

use lucerna_core::traits::StatusLed;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;
}

/// GPIO-backed status LED
///
/// Active-high by default; the active-low constructor covers LEDs that
/// sink current into the pin.
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new GPIO status LED
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the LED
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        // LED starts dark
        led.set_on(false);
        led
    }

    /// Create a new LED with active-high wiring
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new LED with active-low wiring
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Access the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> StatusLed for GpioLed<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
