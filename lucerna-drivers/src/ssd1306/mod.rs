//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. A full frame
//! lives in memory; drawing primitives edit the frame only, and `show`
//! pushes it to the controller one 8-pixel page at a time.

mod font;

use embedded_hal::i2c::I2c;
use lucerna_core::traits::StatusDisplay;

/// SSD1306 I2C address (typically 0x3C, some modules strap 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;
const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Control-prefix bytes for the 2-byte transfer pattern
mod control {
    /// A single command byte follows
    pub const COMMAND: u8 = 0x00;
    /// Raw frame data follows
    pub const DATA: u8 = 0x40;
}

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const ADDRESSING_MODE: u8 = 0x20;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_LEVEL: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up command sequence, sent byte-wise by `init`.
///
/// Horizontal addressing, remapped scan so (0, 0) is the top-left
/// corner, full contrast, internal charge pump. The order is the
/// controller's initialization contract; display-on comes last.
#[rustfmt::skip]
const INIT_SEQUENCE: [u8; 28] = [
    cmd::DISPLAY_OFF,
    cmd::ADDRESSING_MODE, 0x00,
    cmd::SET_PAGE_ADDR,
    cmd::COM_SCAN_DEC,
    cmd::SET_LOW_COLUMN,
    cmd::SET_HIGH_COLUMN,
    cmd::SET_START_LINE,
    cmd::SET_CONTRAST, 0xFF,
    cmd::SET_SEG_REMAP,
    cmd::SET_NORMAL,
    cmd::SET_MUX_RATIO, 0x3F,
    cmd::RESUME_FROM_RAM,
    cmd::SET_DISPLAY_OFFSET, 0x00,
    cmd::SET_CLOCK_DIV, 0x80,
    cmd::SET_PRECHARGE, 0xF1,
    cmd::SET_COM_PINS, 0x12,
    cmd::SET_VCOM_LEVEL, 0x20,
    cmd::SET_CHARGE_PUMP, 0x14,
    cmd::DISPLAY_ON,
];

/// SSD1306 display driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer: bit (y % 8) of byte x + (y / 8) * WIDTH
    buffer: [u8; BUFFER_SIZE],
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver at the default I2C address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at an explicit I2C address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [0; BUFFER_SIZE],
        }
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send the power-up sequence. Draw calls are invisible before this.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for &byte in INIT_SEQUENCE.iter() {
            self.command(byte)?;
        }
        Ok(())
    }

    /// Send a single command byte
    fn command(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[control::COMMAND, byte])
    }

    /// Zero the frame. The device is untouched until `show`.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Set or clear one pixel. Out-of-range coordinates are ignored.
    pub fn draw_pixel(&mut self, x: u8, y: u8, on: bool) {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = x + (y / 8) * WIDTH;
        let mask = 1 << (y % 8);
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Read one pixel back from the frame. Out of range reads as off.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[x + (y / 8) * WIDTH] & (1 << (y % 8)) != 0
    }

    /// Draw one 5x8 glyph with its origin at (x, y).
    ///
    /// `scale` replicates every glyph pixel into a scale x scale block.
    /// Codepoints outside the printable range and a zero scale are
    /// skipped silently.
    pub fn draw_char(&mut self, x: u8, y: u8, ch: char, scale: u8, on: bool) {
        if scale == 0 {
            return;
        }
        let Some(glyph) = font::glyph(ch) else {
            return;
        };
        let scale = scale as u16;
        for (col, &bits) in glyph.iter().enumerate() {
            for row in 0u16..8 {
                if bits & (1u8 << row) == 0 {
                    continue;
                }
                let px = x as u16 + col as u16 * scale;
                let py = y as u16 + row * scale;
                for sx in 0..scale {
                    for sy in 0..scale {
                        let (tx, ty) = (px + sx, py + sy);
                        if tx < WIDTH as u16 && ty < HEIGHT as u16 {
                            self.draw_pixel(tx as u8, ty as u8, on);
                        }
                    }
                }
            }
        }
    }

    /// Draw a string, advancing 6 * scale pixels per character
    /// (5 glyph columns plus 1 spacing column).
    pub fn draw_string(&mut self, x: u8, y: u8, text: &str, scale: u8, on: bool) {
        if scale == 0 {
            return;
        }
        let advance = 6 * scale as u16;
        let mut cursor = x as u16;
        for ch in text.chars() {
            if cursor >= WIDTH as u16 {
                break;
            }
            self.draw_char(cursor as u8, y, ch, scale, on);
            cursor += advance;
        }
    }

    /// Transmit the frame, one 8-pixel page at a time.
    ///
    /// Each page's data burst is preceded by the page-select and
    /// column-reset commands; that ordering is the controller's
    /// addressing contract.
    pub fn show(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut burst = [0u8; WIDTH + 1];
            burst[0] = control::DATA;
            burst[1..].copy_from_slice(&self.buffer[page * WIDTH..(page + 1) * WIDTH]);
            self.i2c.write(self.address, &burst)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Invert display colors without touching the frame
    pub fn set_invert(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        self.command(if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        })
    }

    /// Turn the panel on or off
    pub fn set_power(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })
    }
}

impl<I2C: I2c> StatusDisplay for Ssd1306<I2C> {
    type Error = I2C::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ssd1306::init(self)
    }

    fn clear(&mut self) {
        Ssd1306::clear(self)
    }

    fn draw_string(&mut self, x: u8, y: u8, text: &str, scale: u8, on: bool) {
        Ssd1306::draw_string(self, x, y, text, scale, on)
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        Ssd1306::show(self)
    }
}
