/// mean color of rgba pixel data, as the [0, 1] channel fractions the
/// control server works with. `None` for an empty capture.
pub fn average_color(rgba: &[u8]) -> Option<[f64; 3]> {
    let mut sums = [0u64; 3];
    let mut pixels = 0u64;

    for pixel in rgba.chunks_exact(4) {
        sums[0] += u64::from(pixel[0]);
        sums[1] += u64::from(pixel[1]);
        sums[2] += u64::from(pixel[2]);
        pixels += 1;
    }

    if pixels == 0 {
        return None;
    }
    // the server expects fractions of 256, not 255
    Some(sums.map(|sum| sum as f64 / pixels as f64 / 256.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_averages_to_its_color() {
        let rgba = [[64u8, 128, 255, 255]; 4].concat();
        assert_eq!(
            average_color(&rgba),
            Some([64.0 / 256.0, 128.0 / 256.0, 255.0 / 256.0])
        );
    }

    #[test]
    fn mixed_pixels_average_per_channel() {
        let rgba = [[0u8, 100, 30, 255], [200, 100, 50, 255]].concat();
        assert_eq!(
            average_color(&rgba),
            Some([100.0 / 256.0, 100.0 / 256.0, 40.0 / 256.0])
        );
    }

    #[test]
    fn alpha_does_not_affect_the_average() {
        let opaque = [10u8, 20, 30, 255];
        let transparent = [10u8, 20, 30, 0];
        assert_eq!(average_color(&opaque), average_color(&transparent));
    }

    #[test]
    fn empty_capture_has_no_average() {
        assert_eq!(average_color(&[]), None);
    }
}
