//! SSD1306 OLED text display
//!
//! Drives a 128x64 SSD1306 module in buffered graphics mode and exposes
//! it as the text grid the renderer draws into: 6 px columns, 10 px
//! rows. Text that runs past the panel edges is clipped by the frame
//! buffer, so offscreen rows are accepted silently.

use display_interface::DisplayError;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use prosopon_core::traits::DisplayDriver;

/// Glyph cell dimensions of the 6x10 font
const CHAR_WIDTH: i32 = 6;
const CHAR_HEIGHT: i32 = 10;

/// 128x64 SSD1306 status display
pub struct Oled<I2C> {
    display: Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<I2C> Oled<I2C>
where
    I2C: I2c,
{
    /// Create a driver for a panel at the default address (0x3C)
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { display }
    }

    /// Run the panel's power-up sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init()
    }

    fn text_style() -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build()
    }
}

impl<I2C> DisplayDriver for Oled<I2C>
where
    I2C: I2c,
{
    type Error = DisplayError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.display.clear_buffer();
        Ok(())
    }

    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), Self::Error> {
        let origin = Point::new(col as i32 * CHAR_WIDTH, row as i32 * CHAR_HEIGHT);
        Text::with_baseline(text, origin, Self::text_style(), Baseline::Top)
            .draw(&mut self.display)?;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.display.flush()
    }
}
