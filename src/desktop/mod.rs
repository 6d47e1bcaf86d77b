pub mod screen;

use std::thread::sleep;

use xcap::Monitor;

use crate::constants::desktop::{OPTIONS_URL, RETRY_INTERVAL};
use crate::util;
use crate::util::api_request;

/// capture the primary monitor, average its color and push it to the
/// control server, over and over. the capture itself paces the loop;
/// only failures wait extra.
pub async fn run() -> Result<(), &'static str> {
    let Ok(monitors) = Monitor::all() else {
        return Err("listing monitors failed");
    };
    let monitor = monitors
        .iter()
        .find(|monitor| monitor.is_primary())
        .or_else(|| monitors.first())
        .ok_or("no monitor to capture")?;

    util::log(&format!("syncing desktop color from \"{}\"", monitor.name()));

    let client = reqwest::Client::new();

    loop {
        let image = match monitor.capture_image() {
            Ok(image) => image,
            Err(_) => {
                util::log("capturing the screen failed, retrying");
                sleep(RETRY_INTERVAL);
                continue;
            }
        };

        let Some(color) = screen::average_color(image.as_raw()) else {
            continue;
        };

        let body = serde_json::json!({ "deskNet": color });
        match api_request::put_json(&client, OPTIONS_URL, body).await {
            Ok(status) if status.is_success() => {}
            Ok(status) => {
                util::log(&format!("server rejected the color update ({status})"));
                sleep(RETRY_INTERVAL);
            }
            Err(message) => {
                util::log(&format!("{message}, retrying"));
                sleep(RETRY_INTERVAL);
            }
        }
    }
}
