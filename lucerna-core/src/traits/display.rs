//! Status display seam

/// Monochrome status display
///
/// Drawing primitives mutate an in-memory frame only; [`show`] pushes
/// the frame over the transport in one go. Out-of-range geometry is
/// clipped silently, matching the drawing-primitive contract.
///
/// [`show`]: StatusDisplay::show
pub trait StatusDisplay {
    /// Transport error type
    type Error;

    /// Send the controller initialization sequence.
    ///
    /// Must complete once before the first [`show`](StatusDisplay::show);
    /// draw calls before that are harmless but invisible.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Zero the frame. No effect on the physical device until `show`.
    fn clear(&mut self);

    /// Draw `text` left to right with its origin at pixel (x, y).
    ///
    /// `scale` is a pixel replication factor; the cursor advances
    /// 6 * scale pixels per character.
    fn draw_string(&mut self, x: u8, y: u8, text: &str, scale: u8, on: bool);

    /// Transmit the frame to the physical controller.
    fn show(&mut self) -> Result<(), Self::Error>;
}
