pub mod display {
    /// strip refreshes per second the render loop aims for
    pub const UPDATES_PER_SECOND: u32 = 30;
    /// fraction of one tick period used as the sleep floor once the loop
    /// runs behind. keeps a slow tick from triggering a catch-up burst.
    pub const MIN_DELAY_FACTOR: f64 = 0.2;
    /// color snapshot the control process overwrites, in shared memory
    pub const DATA_PATH: &str = "/dev/shm/roomLightData.json";
}

pub mod desktop {
    use std::time::Duration;
    /// network options endpoint of the control server
    pub const OPTIONS_URL: &str = "http://10.0.0.52:8088/networkOptions.json";
    /// pause after a failed capture or push before trying again
    pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);
}
