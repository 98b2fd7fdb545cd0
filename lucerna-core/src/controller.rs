//! Event dispatch and render orchestration
//!
//! A thin controller reacting to two event sources: debounced button
//! presses and inbound serial bytes. Each event is handled to
//! completion on the main loop; the status display is redrawn on every
//! event and the matrix only when a byte arrives.

use core::fmt::Write;

use heapless::String;

use crate::state::{AppState, Button, InputEvent};
use crate::traits::{DigitMatrix, StatusDisplay, StatusLed};

/// Pixel rows of the three status lines (page aligned, 8 px glyphs)
const LINE_LED_A_Y: u8 = 8;
const LINE_LED_B_Y: u8 = 24;
const LINE_SERIAL_Y: u8 = 40;

/// Errors surfaced by the render paths
///
/// A failed transmission drops the frame; the next handled event
/// renders a fresh one. No retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError<D, M> {
    /// Status display transport failed
    Display(D),
    /// LED chain transport failed
    Matrix(M),
}

/// Event dispatcher tying the input path to the render paths
pub struct Controller<D, M, LG, LB> {
    display: D,
    matrix: M,
    led_green: LG,
    led_blue: LB,
    state: AppState,
}

impl<D, M, LG, LB> Controller<D, M, LG, LB>
where
    D: StatusDisplay,
    M: DigitMatrix,
    LG: StatusLed,
    LB: StatusLed,
{
    /// Create a controller in the boot state
    pub fn new(display: D, matrix: M, led_green: LG, led_blue: LB) -> Self {
        Self {
            display,
            matrix,
            led_green,
            led_blue,
            state: AppState::new(),
        }
    }

    /// Bring the peripherals to a known state: display initialized and
    /// showing the idle status frame, matrix dark, LEDs off.
    pub fn init(&mut self) -> Result<(), ControlError<D::Error, M::Error>> {
        self.led_green.set_on(false);
        self.led_blue.set_on(false);
        self.display.init().map_err(ControlError::Display)?;
        self.matrix.clear_all().map_err(ControlError::Matrix)?;
        self.redraw()
    }

    /// Handle one input event to completion
    pub fn handle(&mut self, event: InputEvent) -> Result<(), ControlError<D::Error, M::Error>> {
        match event {
            InputEvent::Button(button) => self.on_button(button),
            InputEvent::SerialByte(byte) => self.on_serial_byte(byte),
        }
    }

    /// Shared state, as the render paths see it
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn on_button(&mut self, button: Button) -> Result<(), ControlError<D::Error, M::Error>> {
        let on = self.state.toggle(button);
        match button {
            Button::A => self.led_green.set_on(on),
            Button::B => self.led_blue.set_on(on),
        }
        #[cfg(feature = "defmt")]
        defmt::info!("button {} pressed, led now {}", button, on);
        self.redraw()
    }

    fn on_serial_byte(&mut self, byte: u8) -> Result<(), ControlError<D::Error, M::Error>> {
        self.state.last_byte = Some(byte);
        #[cfg(feature = "defmt")]
        defmt::debug!("serial byte {=u8:#x}", byte);
        self.redraw()?;
        match byte {
            b'0'..=b'9' => self
                .matrix
                .render_digit(byte - b'0')
                .map_err(ControlError::Matrix),
            _ => self.matrix.clear_all().map_err(ControlError::Matrix),
        }
    }

    /// Rebuild and transmit the status frame
    fn redraw(&mut self) -> Result<(), ControlError<D::Error, M::Error>> {
        self.display.clear();
        self.draw_flag_line(LINE_LED_A_Y, "LED A", self.state.led_green);
        self.draw_flag_line(LINE_LED_B_Y, "LED B", self.state.led_blue);

        let mut line: String<21> = String::new();
        match self.state.last_byte {
            Some(byte) if byte.is_ascii_graphic() || byte == b' ' => {
                let _ = write!(line, "RX: {}", byte as char);
            }
            Some(_) => {
                let _ = write!(line, "RX: ?");
            }
            None => {
                let _ = write!(line, "RX: -");
            }
        }
        self.display.draw_string(0, LINE_SERIAL_Y, &line, 1, true);
        self.display.show().map_err(ControlError::Display)
    }

    fn draw_flag_line(&mut self, y: u8, label: &str, on: bool) {
        let mut line: String<21> = String::new();
        let _ = write!(line, "{}: {}", label, if on { "ON" } else { "OFF" });
        self.display.draw_string(0, y, &line, 1, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DebounceConfig, DebounceGate};
    use std::string::String as StdString;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockDisplay {
        inited: bool,
        lines: Vec<(u8, u8, StdString)>,
        shows: usize,
        fail_show: bool,
    }

    impl StatusDisplay for MockDisplay {
        type Error = ();

        fn init(&mut self) -> Result<(), ()> {
            self.inited = true;
            Ok(())
        }

        fn clear(&mut self) {
            self.lines.clear();
        }

        fn draw_string(&mut self, x: u8, y: u8, text: &str, _scale: u8, _on: bool) {
            self.lines.push((x, y, text.into()));
        }

        fn show(&mut self) -> Result<(), ()> {
            if self.fail_show {
                return Err(());
            }
            self.shows += 1;
            Ok(())
        }
    }

    impl MockDisplay {
        fn line_at(&self, y: u8) -> &str {
            self.lines
                .iter()
                .find(|(_, line_y, _)| *line_y == y)
                .map(|(_, _, text)| text.as_str())
                .unwrap_or("")
        }
    }

    #[derive(Default)]
    struct MockMatrix {
        digits: Vec<u8>,
        clears: usize,
    }

    impl DigitMatrix for MockMatrix {
        type Error = ();

        fn render_digit(&mut self, digit: u8) -> Result<(), ()> {
            self.digits.push(digit);
            Ok(())
        }

        fn clear_all(&mut self) -> Result<(), ()> {
            self.clears += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockLed {
        on: bool,
    }

    impl StatusLed for MockLed {
        fn set_on(&mut self, on: bool) {
            self.on = on;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    type TestController = Controller<MockDisplay, MockMatrix, MockLed, MockLed>;

    fn controller() -> TestController {
        Controller::new(
            MockDisplay::default(),
            MockMatrix::default(),
            MockLed::default(),
            MockLed::default(),
        )
    }

    #[test]
    fn test_init_reaches_known_state() {
        let mut ctl = controller();
        ctl.init().unwrap();

        assert!(ctl.display.inited);
        assert_eq!(ctl.matrix.clears, 1);
        assert_eq!(ctl.display.shows, 1);
        assert!(!ctl.led_green.is_on());
        assert!(!ctl.led_blue.is_on());
        assert_eq!(ctl.display.line_at(LINE_SERIAL_Y), "RX: -");
    }

    #[test]
    fn test_button_press_toggles_led_and_redraws() {
        let mut ctl = controller();
        ctl.handle(InputEvent::Button(Button::A)).unwrap();

        assert!(ctl.state.led_green);
        assert!(ctl.led_green.is_on());
        assert!(!ctl.led_blue.is_on());
        assert_eq!(ctl.display.shows, 1);
        assert_eq!(ctl.display.line_at(LINE_LED_A_Y), "LED A: ON");
        assert_eq!(ctl.display.line_at(LINE_LED_B_Y), "LED B: OFF");
    }

    #[test]
    fn test_second_press_toggles_back_off() {
        let mut ctl = controller();
        ctl.handle(InputEvent::Button(Button::B)).unwrap();
        ctl.handle(InputEvent::Button(Button::B)).unwrap();

        assert!(!ctl.state.led_blue);
        assert!(!ctl.led_blue.is_on());
        assert_eq!(ctl.display.shows, 2);
        assert_eq!(ctl.display.line_at(LINE_LED_B_Y), "LED B: OFF");
    }

    #[test]
    fn test_serial_digit_renders_matrix_and_status() {
        let mut ctl = controller();
        ctl.handle(InputEvent::SerialByte(b'7')).unwrap();

        assert_eq!(ctl.matrix.digits, [7]);
        assert_eq!(ctl.matrix.clears, 0);
        assert_eq!(ctl.display.line_at(LINE_SERIAL_Y), "RX: 7");
    }

    #[test]
    fn test_serial_non_digit_clears_matrix() {
        let mut ctl = controller();
        ctl.handle(InputEvent::SerialByte(b'7')).unwrap();
        ctl.handle(InputEvent::SerialByte(b'*')).unwrap();

        assert_eq!(ctl.matrix.digits, [7]);
        assert_eq!(ctl.matrix.clears, 1);
        assert_eq!(ctl.display.line_at(LINE_SERIAL_Y), "RX: *");
    }

    #[test]
    fn test_non_printable_byte_shown_as_placeholder() {
        let mut ctl = controller();
        ctl.handle(InputEvent::SerialByte(0x07)).unwrap();

        assert_eq!(ctl.display.line_at(LINE_SERIAL_Y), "RX: ?");
        assert_eq!(ctl.matrix.clears, 1);
    }

    #[test]
    fn test_display_fault_drops_frame_and_recovers() {
        let mut ctl = controller();
        ctl.display.fail_show = true;
        assert_eq!(
            ctl.handle(InputEvent::Button(Button::A)),
            Err(ControlError::Display(()))
        );
        // State already flipped; the next event renders it
        assert!(ctl.state.led_green);

        ctl.display.fail_show = false;
        ctl.handle(InputEvent::SerialByte(b'1')).unwrap();
        assert_eq!(ctl.display.line_at(LINE_LED_A_Y), "LED A: ON");
    }

    #[test]
    fn test_debounced_press_scenario() {
        // Falling edges at t=0 (accepted), t=50ms (bounce), t=250ms
        // (accepted) with the standard 200ms window.
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        let mut ctl = controller();

        for (t_us, expect_on) in [(0u64, true), (50_000, true), (250_000, false)] {
            if gate.on_edge(Button::A.line(), t_us).is_some() {
                ctl.handle(InputEvent::Button(Button::A)).unwrap();
            }
            assert_eq!(ctl.state.led_green, expect_on);
            assert_eq!(ctl.led_green.is_on(), expect_on);
        }
        assert_eq!(ctl.display.shows, 2);
    }
}
