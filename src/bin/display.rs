use room_lights::constants::display::UPDATES_PER_SECOND;
use room_lights::display;
use room_lights::util;

fn main() {
    let led_count: usize = std::env::args()
        .nth(1)
        .expect("missing led count argument, usage: display <led count>")
        .parse()
        .expect("led count has to be a whole number");

    util::log(&format!(
        "displaying {led_count} leds at {UPDATES_PER_SECOND} updates per second"
    ));

    #[cfg(feature = "preview")]
    display::run(display::output::PreviewStrip, led_count);

    #[cfg(not(feature = "preview"))]
    {
        let strip = display::output::SpiStrip::open().expect("opening the spi strip failed");
        display::run(strip, led_count);
    }
}
