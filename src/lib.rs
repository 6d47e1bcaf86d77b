//! satellite programs for my room's led strip: `display` keeps the strip
//! in sync with the color file written by the control server, and
//! `desktop-sync` pushes the desktop's average color back to the server.

pub mod constants;
pub mod desktop;
pub mod display;
pub mod util;
