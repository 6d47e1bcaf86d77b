use smart_leds::RGB8;

use crate::display::document::ColorDocument;

/// strip contents and dedup bookkeeping for the render loop.
/// the cells only change through `apply`, so a tick that sees no new
/// document leaves the strip untouched.
pub struct DisplayState {
    cells: Vec<RGB8>,
    last_write_id: Option<i64>,
}

impl DisplayState {
    pub fn new(led_count: usize) -> Self {
        Self {
            cells: vec![RGB8::new(0, 0, 0); led_count],
            last_write_id: None,
        }
    }

    pub fn cells(&self) -> &[RGB8] {
        &self.cells
    }

    /// render `document` into the cells unless its write id was already
    /// applied. returns whether the strip has to be committed.
    pub fn apply(&mut self, document: &ColorDocument) -> bool {
        if let Some(last) = self.last_write_id {
            // the producer assigns ids monotonically, so anything not
            // newer than the last applied document was seen already
            if document.write_id <= last {
                return false;
            }
        }
        self.last_write_id = Some(document.write_id);

        for (cell, entry) in self.cells.iter_mut().zip(&document.colors) {
            if entry.len() != 3 {
                // a malformed entry ends the whole pass; cells after it
                // keep their previous colors
                break;
            }
            // the producer writes [r, g, b], the strip wants the first
            // two channels swapped
            *cell = RGB8::new(scale(entry[1]), scale(entry[0]), scale(entry[2]));
        }
        true
    }
}

/// fraction in [0, 1] to one 8 bit channel
fn scale(channel: f64) -> u8 {
    (channel * 255.0) as u8
}
