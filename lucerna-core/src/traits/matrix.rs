//! Digit matrix seam

/// 5x5 addressable-LED digit matrix
pub trait DigitMatrix {
    /// Transport error type
    type Error;

    /// Render the glyph for `digit`.
    ///
    /// Values above 9 are ignored without touching the chain.
    fn render_digit(&mut self, digit: u8) -> Result<(), Self::Error>;

    /// Black out the whole matrix.
    fn clear_all(&mut self) -> Result<(), Self::Error>;
}
