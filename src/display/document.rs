use std::fs;
use std::path::Path;

use serde::Deserialize;

/// one snapshot of the strip published by the control process
#[derive(Debug, Deserialize)]
pub struct ColorDocument {
    #[serde(rename = "writeId")]
    pub write_id: i64,
    /// [r, g, b] fractions in [0, 1]. kept as plain vectors because a
    /// wrong channel count is handled during rendering, not parsing.
    pub colors: Vec<Vec<f64>>,
}

/// `None` unless `bytes` is a complete, valid document. the producer
/// overwrites the file without locking, so a torn read is normal here.
pub fn parse(bytes: &[u8]) -> Option<ColorDocument> {
    serde_json::from_slice(bytes).ok()
}

/// read and parse the shared document, closing the file right away.
/// `None` if the file is missing (the producer may not have written yet),
/// unreadable or torn.
pub fn read(path: &Path) -> Option<ColorDocument> {
    parse(&fs::read(path).ok()?)
}
