//! Display driver trait for the status OLED

/// Trait for text output on the monochrome display
///
/// The panel is treated as a text grid: columns are 6 px wide and rows
/// 10 px tall, so a 128x64 module fits 21 columns and 6 full rows. Rows
/// past the bottom edge are accepted and clipped by the implementation.
pub trait DisplayDriver {
    /// Error type for display operations
    type Error;

    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw text at a grid position
    ///
    /// - `row`: text row (10 px tall)
    /// - `col`: text column (6 px wide)
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), Self::Error>;

    /// Push the frame buffer to the panel
    fn show(&mut self) -> Result<(), Self::Error>;
}
