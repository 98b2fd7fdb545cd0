//! 5x5 WS2812 matrix renderer
//!
//! Maps digit glyphs onto a serpentine-wired chain of 25 addressable
//! LEDs. Each render computes all 25 colors, repacks them into the
//! chain's GRB wire order and hands the transport one contiguous burst;
//! pixel colors are never retained between frames.

pub mod glyphs;

use lucerna_core::traits::DigitMatrix;
use smart_leds::RGB8;

pub use glyphs::{Glyph, DIGIT_GLYPHS};

/// Matrix geometry: 5 columns x 5 rows on a single serial chain
pub const MATRIX_SIZE: usize = 5;

/// LEDs on the chain
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Bytes per frame burst (three color bytes per LED)
pub const BURST_LEN: usize = LED_COUNT * 3;

/// Dim blue default; 25 LEDs at full white would brown out a USB supply
pub const DEFAULT_ON_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 16 };

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Single-wire LED chain transport
///
/// Implementations own the bit timing: every byte goes out MSB first at
/// the chain's fixed ~800 kHz bit rate with no gaps inside the burst.
/// The chain latches the frame once the line idles for longer than one
/// bit period, so the whole slice must be written back to back.
pub trait ChainWriter {
    /// Transport error type
    type Error;

    /// Push one frame's bytes down the chain as a single burst
    fn write_burst(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Color of lit cells
    pub on_color: RGB8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            on_color: DEFAULT_ON_COLOR,
        }
    }
}

/// Repack a color from the RGB API order to the chain's GRB wire order
pub fn pack_grb(color: RGB8) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// Recover the API-order color from a GRB wire triple
pub fn unpack_grb(wire: [u8; 3]) -> RGB8 {
    RGB8 {
        r: wire[1],
        g: wire[0],
        b: wire[2],
    }
}

/// Map a chain position to its (row, col) cell.
///
/// The chain enters at the top-left cell; even rows run left to right,
/// odd rows right to left. The wiring convention lives here, in one
/// place.
fn chain_to_cell(index: usize) -> (usize, usize) {
    let row = index / MATRIX_SIZE;
    let col = index % MATRIX_SIZE;
    if row % 2 == 0 {
        (row, col)
    } else {
        (row, MATRIX_SIZE - 1 - col)
    }
}

/// 5x5 addressable-LED matrix renderer
pub struct Ws2812Matrix<W> {
    chain: W,
    config: MatrixConfig,
}

impl<W: ChainWriter> Ws2812Matrix<W> {
    /// Create a renderer with the default on-color
    pub fn new(chain: W) -> Self {
        Self::with_config(chain, MatrixConfig::default())
    }

    /// Create a renderer with an explicit configuration
    pub fn with_config(chain: W, config: MatrixConfig) -> Self {
        Self { chain, config }
    }

    /// Change the lit-cell color for subsequent frames
    pub fn set_on_color(&mut self, color: RGB8) {
        self.config.on_color = color;
    }

    /// Release the underlying chain transport
    pub fn release(self) -> W {
        self.chain
    }

    /// Render the glyph for `digit`.
    ///
    /// Digits above 9 are ignored without touching the chain.
    pub fn render_digit(&mut self, digit: u8) -> Result<(), W::Error> {
        let Some(glyph) = DIGIT_GLYPHS.get(digit as usize) else {
            return Ok(());
        };

        let mut burst = [0u8; BURST_LEN];
        for index in 0..LED_COUNT {
            let (row, col) = chain_to_cell(index);
            let color = if glyphs::cell(glyph, row, col) {
                self.config.on_color
            } else {
                OFF
            };
            burst[index * 3..index * 3 + 3].copy_from_slice(&pack_grb(color));
        }
        self.chain.write_burst(&burst)
    }

    /// Black out every LED on the chain
    pub fn clear_all(&mut self) -> Result<(), W::Error> {
        self.chain.write_burst(&[0; BURST_LEN])
    }
}

impl<W: ChainWriter> DigitMatrix for Ws2812Matrix<W> {
    type Error = W::Error;

    fn render_digit(&mut self, digit: u8) -> Result<(), Self::Error> {
        Ws2812Matrix::render_digit(self, digit)
    }

    fn clear_all(&mut self) -> Result<(), Self::Error> {
        Ws2812Matrix::clear_all(self)
    }
}
