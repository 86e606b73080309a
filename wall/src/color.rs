//! HSL and hex color helpers for tag badges.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, digit) in out.iter_mut().zip(hex.chars()) {
                *slot = channel(&digit.to_string().repeat(2))?;
            }
            Some((out[0], out[1], out[2]))
        }
        6 => Some((channel(hex.get(0..2)?)?, channel(hex.get(2..4)?)?, channel(hex.get(4..6)?)?)),
        _ => None,
    }
}

fn channel(digits: &str) -> Option<u8> {
    match u8::from_str_radix(digits, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Format RGB channels as lowercase `#rrggbb`.
#[must_use]
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`) to RGB.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h {
        h if h < 1.0 => (chroma, x, 0.0),
        h if h < 2.0 => (x, chroma, 0.0),
        h if h < 3.0 => (0.0, chroma, x),
        h if h < 4.0 => (0.0, x, chroma),
        h if h < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// HSL lightness (`0..=1`) of an RGB color.
#[must_use]
pub fn lightness(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (f64::from(max) + f64::from(min)) / 510.0
}

/// Multiply every channel of a hex color by `factor`. Invalid input is returned unchanged.
#[must_use]
pub fn shade(hex: &str, factor: f64) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => {
            let f = factor.clamp(0.0, 1.0);
            to_hex(
                to_channel(f64::from(r) / 255.0 * f),
                to_channel(f64::from(g) / 255.0 * f),
                to_channel(f64::from(b) / 255.0 * f),
            )
        }
        None => hex.to_owned(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}
