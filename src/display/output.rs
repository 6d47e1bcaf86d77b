use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use smart_leds::{SmartLedsWrite, RGB8};
use ws2812_spi::Ws2812;

/// clock rate the ws2812 bit patterns are encoded for
const SPI_CLOCK_HZ: u32 = 3_000_000;

/// where rendered cells end up. one `write` call shows a whole frame at
/// once; nothing is visible between calls.
pub trait StripDriver {
    fn write(&mut self, cells: &[RGB8]);
}

/// ws2812 strip on the raspberry pi's main spi bus (data line on mosi)
pub struct SpiStrip {
    strip: Ws2812<Spi>,
}

impl SpiStrip {
    pub fn open() -> Result<Self, rppal::spi::Error> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        Ok(Self {
            strip: Ws2812::new(spi),
        })
    }
}

impl StripDriver for SpiStrip {
    fn write(&mut self, cells: &[RGB8]) {
        // an spi hiccup only costs this frame, the next one overwrites it
        let _ = self.strip.write(cells.iter().copied());
    }
}

/// prints every cell as a colored `@`, like the control server's dev mode
pub struct PreviewStrip;

impl StripDriver for PreviewStrip {
    fn write(&mut self, cells: &[RGB8]) {
        let mut line = String::from("\x1b[2J\x1b[H");
        for cell in cells {
            line.push_str(&format!("\x1b[38;2;{};{};{}m@", cell.r, cell.g, cell.b));
        }
        println!("{line}\x1b[0m");
    }
}
