//! Shared application state
//!
//! A single small record read by the render paths. Only the controller,
//! on the main loop, mutates it; the interrupt side records events
//! instead of touching state directly.

mod events;

pub use events::{Button, InputEvent};

/// Application state driven by the input events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppState {
    /// Green status LED flag, toggled by button A
    pub led_green: bool,
    /// Blue status LED flag, toggled by button B
    pub led_blue: bool,
    /// Last byte received on the serial console
    pub last_byte: Option<u8>,
}

impl AppState {
    /// Boot state: both LEDs off, nothing received yet
    pub const fn new() -> Self {
        Self {
            led_green: false,
            led_blue: false,
            last_byte: None,
        }
    }

    /// Flip the LED flag paired with `button`, returning the new value
    pub fn toggle(&mut self, button: Button) -> bool {
        match button {
            Button::A => {
                self.led_green = !self.led_green;
                self.led_green
            }
            Button::B => {
                self.led_blue = !self.led_blue;
                self.led_blue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_the_paired_flag() {
        let mut state = AppState::new();
        assert!(state.toggle(Button::A));
        assert!(state.led_green);
        assert!(!state.led_blue);

        assert!(state.toggle(Button::B));
        assert!(state.led_blue);

        assert!(!state.toggle(Button::A));
        assert!(!state.led_green);
        assert!(state.led_blue);
    }
}
