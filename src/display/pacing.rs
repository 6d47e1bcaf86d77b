use std::time::{Duration, Instant};

use crate::constants::display::MIN_DELAY_FACTOR;

/// fixed-rate tick schedule with drift correction.
///
/// the target for the next tick normally advances by exactly one period,
/// so a tick that woke up a little late gets a shorter delay and the rate
/// stays at the target on average. once less than `MIN_DELAY_FACTOR` of a
/// period is left (the loop fell behind, e.g. on a slow read), the delay
/// is clamped to that floor and the schedule restarts from the current
/// time instead of bursting through the backlog.
pub struct TickSchedule {
    period: Duration,
    min_delay: Duration,
    next_tick: Instant,
}

impl TickSchedule {
    pub fn new(updates_per_second: u32, start: Instant) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(updates_per_second));
        Self {
            period,
            min_delay: period.mul_f64(MIN_DELAY_FACTOR),
            next_tick: start,
        }
    }

    /// advance the schedule by one tick and return how long to sleep for it
    pub fn next_delay(&mut self, now: Instant) -> Duration {
        self.next_tick += self.period;
        let delay = self.next_tick.saturating_duration_since(now);

        if delay < self.min_delay {
            self.next_tick = now + self.min_delay;
            return self.min_delay;
        }
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_schedule_ticks_wait_one_period() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(10, start);
        assert_eq!(schedule.next_delay(start), schedule.period);
    }

    #[test]
    fn a_late_wakeup_shortens_the_next_delay() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(10, start);
        let period = schedule.period;
        schedule.next_delay(start);
        // woke up half a period late: the next tick compensates
        let late = start + period + period / 2;
        assert_eq!(schedule.next_delay(late), period / 2);
    }

    #[test]
    fn delays_below_the_floor_are_clamped() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(10, start);
        // only a tenth of a period left until the target
        let late = start + schedule.period.mul_f64(0.9);
        assert_eq!(schedule.next_delay(late), schedule.min_delay);
    }

    #[test]
    fn falling_behind_never_yields_a_zero_delay() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(10, start);
        // multiple periods behind schedule
        let late = start + Duration::from_secs(1);
        let delay = schedule.next_delay(late);
        assert_eq!(delay, schedule.min_delay);
        assert!(delay > Duration::ZERO);
    }

    #[test]
    fn the_backlog_is_dropped_after_falling_behind() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(10, start);
        schedule.next_delay(start + Duration::from_secs(1));
        // once caught up, ticks return to the normal period instead of
        // replaying the missed ones
        let caught_up = start + Duration::from_secs(1) + schedule.min_delay;
        assert_eq!(schedule.next_delay(caught_up), schedule.period);
    }
}
