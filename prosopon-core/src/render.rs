//! Screen rendering
//!
//! Builds the text screen for a decoded face list and pushes it to a
//! display driver. The display refresh is a full overwrite: every draw
//! clears the panel and redraws all lines, never an incremental update.

use core::fmt::Write;

use heapless::String;
use prosopon_protocol::Face;

use crate::traits::DisplayDriver;

/// Rows tracked by the screen buffer
///
/// A 128x64 panel shows six full 10-px text rows; rows beyond that are
/// stored anyway and clipped by the display driver, so a fourth face
/// (rows 8 and 9) is accepted and simply falls off the panel.
pub const SCREEN_ROWS: usize = 10;

/// Longest line the renderer produces ("4:conf=255,Facing=False")
pub const MAX_LINE_LEN: usize = 24;

/// A screen buffer that can be drawn to the display
#[derive(Debug, Clone)]
pub struct Screen {
    lines: [String<MAX_LINE_LEN>; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
        }
    }

    /// Clear all lines
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Set the text of a row
    ///
    /// Rows outside the buffer are ignored; text is truncated to the
    /// line capacity.
    pub fn set_line(&mut self, row: u8, text: &str) {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].clear();
            // Truncate if too long
            let text = if text.len() > MAX_LINE_LEN {
                &text[..MAX_LINE_LEN]
            } else {
                text
            };
            let _ = self.lines[row as usize].push_str(text);
        }
    }

    /// Get a line of text
    pub fn get_line(&self, row: u8) -> &str {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].as_str()
        } else {
            ""
        }
    }

    /// Draw this screen to a display
    ///
    /// Clears the panel, draws every non-empty line at column 0 of its
    /// row, and flushes.
    pub fn draw<D: DisplayDriver>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear()?;

        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                display.text(row as u8, 0, line.as_str())?;
            }
        }

        display.show()
    }
}

/// Render the face list screen
///
/// Row 0 carries the count. Each face then gets two rows: a summary
/// line at row 2i and its bounding box corners at row 2i+1, leaving a
/// blank row between the count and the first face.
pub fn render_faces(faces: &[Face]) -> Screen {
    let mut screen = Screen::new();

    let mut line = String::<MAX_LINE_LEN>::new();
    let _ = write!(line, "Number of faces {}", faces.len());
    screen.set_line(0, &line);

    for (i, face) in faces.iter().enumerate() {
        let n = i + 1;

        line.clear();
        let facing = if face.facing() { "True" } else { "False" };
        let _ = write!(line, "{}:conf={},Facing={}", n, face.box_confidence, facing);
        screen.set_line((2 * n) as u8, &line);

        line.clear();
        let _ = write!(
            line,
            "  ({},{}), ({},{})",
            face.box_left, face.box_top, face.box_right, face.box_bottom
        );
        screen.set_line((2 * n + 1) as u8, &line);
    }

    screen
}

/// Render the boot banner shown before the first poll
pub fn render_splash() -> Screen {
    let mut screen = Screen::new();
    screen.set_line(0, "Prosopon");
    screen.set_line(1, "Person Sensor v0.1");
    screen
}
