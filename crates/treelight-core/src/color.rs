//! Colour model: HSV conversion and the sky palette.

use ratatui::style::Color;

/// Dark blue behind everything drawn.
pub const SKY_BASE: Color = Color::Rgb(6, 10, 40);

const SKY_BASE_RGB: (f64, f64, f64) = (6.0, 10.0, 40.0);
const SKY_GLOW_TINT: (f64, f64, f64) = (40.0, 50.0, 80.0);

/// Convert HSV to an RGB color.
///
/// `h` is in degrees and wraps, `s` and `v` are in `0.0..=1.0`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::Rgb(channel(r + m), channel(g + m), channel(b + m))
}

/// Sky background raised towards a lighter tint by `brightness`.
pub fn sky_glow(brightness: f64) -> Color {
    let (r, g, b) = SKY_BASE_RGB;
    let (tr, tg, tb) = SKY_GLOW_TINT;
    Color::Rgb(
        (r + brightness * tr).min(255.0) as u8,
        (g + brightness * tg).min(255.0) as u8,
        (b + brightness * tb).min(255.0) as u8,
    )
}

/// Near-white foreground for a sky star of the given brightness.
pub fn sky_star_fg(brightness: f64) -> Color {
    let level = (200.0 + brightness * 55.0).clamp(0.0, 255.0) as u8;
    Color::Rgb(level, level, level)
}

fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Color::Rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_hsv_periodic() {
        for h in [0.0, 30.0, 90.0, 150.0, 210.0, 275.0, 330.0] {
            assert_eq!(hsv_to_rgb(h, 1.0, 1.0), hsv_to_rgb(h + 360.0, 1.0, 1.0));
            assert_eq!(hsv_to_rgb(h, 1.0, 1.0), hsv_to_rgb(h - 360.0, 1.0, 1.0));
        }
    }

    #[test]
    fn test_hsv_secondary_and_gray() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Color::Rgb(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
        assert_eq!(hsv_to_rgb(90.0, 1.0, 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_sky_glow_bounds() {
        assert_eq!(sky_glow(0.0), SKY_BASE);
        assert_eq!(sky_glow(1.0), Color::Rgb(46, 60, 120));
        assert_eq!(sky_glow(10.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_sky_star_fg() {
        assert_eq!(sky_star_fg(0.4), Color::Rgb(222, 222, 222));
        assert_eq!(sky_star_fg(1.0), Color::Rgb(255, 255, 255));
    }
}
