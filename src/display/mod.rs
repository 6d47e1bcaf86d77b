pub mod document;
pub mod output;
pub mod pacing;
pub mod state;

use std::path::Path;
use std::thread::sleep;
use std::time::Instant;

use crate::constants::display::{DATA_PATH, UPDATES_PER_SECOND};
use crate::display::output::StripDriver;
use crate::display::pacing::TickSchedule;
use crate::display::state::DisplayState;

/// poll the shared document at a fixed rate and keep the strip in sync
/// with it. never returns; every failure mode is an expected race with
/// the producer and just skips the tick.
pub fn run(mut driver: impl StripDriver, led_count: usize) -> ! {
    let mut state = DisplayState::new(led_count);
    let mut schedule = TickSchedule::new(UPDATES_PER_SECOND, Instant::now());

    loop {
        sleep(schedule.next_delay(Instant::now()));

        // the producer may not have written yet, or may be mid-write
        let Some(snapshot) = document::read(Path::new(DATA_PATH)) else {
            continue;
        };

        if state.apply(&snapshot) {
            driver.write(state.cells());
        }
    }
}
