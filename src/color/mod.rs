//! Hex parsing and channel conversions shared by the format compilers.

use serde::Serialize;

use crate::registry::{ColorGroupKind, TokenKey};

/// Returned by [`get_color`] when a group or token cannot be found.
pub const FALLBACK_HEX: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn normalized(self) -> NormalizedRgb {
        NormalizedRgb {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }
}

/// Channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NormalizedRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl NormalizedRgb {
    pub fn with_alpha(self, a: f64) -> NormalizedRgba {
        NormalizedRgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn to_color(self) -> Color {
        Color::new(to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NormalizedRgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Strict parser: `#abc`, `abc`, `#aabbcc` or `aabbcc`.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    Some(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lenient conversion: anything unparsable becomes black (`{0, 0, 0}`).
///
/// Exporters rely on this always producing a value.
pub fn hex_to_rgb_normalized(hex: &str) -> NormalizedRgb {
    parse_hex(hex).map(Color::normalized).unwrap_or_default()
}

pub fn rgba_css(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or(Color::new(0, 0, 0)).rgb();
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Looks up `token` in a flat group, `None` when the group is missing,
/// functional, or lacks the token.
pub fn try_color(group: Option<&ColorGroupKind>, token: TokenKey) -> Option<&'static str> {
    match group? {
        ColorGroupKind::Flat(group) => group
            .colors
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.value),
        ColorGroupKind::Functional(_) => None,
    }
}

/// Like [`try_color`] but degrades to [`FALLBACK_HEX`] instead of failing.
pub fn get_color(group: Option<&ColorGroupKind>, token: TokenKey) -> &'static str {
    try_color(group, token).unwrap_or_else(|| {
        tracing::debug!(%token, "color lookup fell back to {FALLBACK_HEX}");
        FALLBACK_HEX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn six_digit_hex_normalizes_each_channel() {
        let rgb = hex_to_rgb_normalized("#4B4AD5");
        assert!(close(rgb.r, 75.0 / 255.0));
        assert!(close(rgb.g, 74.0 / 255.0));
        assert!(close(rgb.b, 213.0 / 255.0));
    }

    #[test]
    fn shorthand_hex_expands_each_nibble() {
        assert_eq!(parse_hex("#abc"), parse_hex("#aabbcc"));
        let rgb = hex_to_rgb_normalized("#fff");
        assert!(close(rgb.r, 1.0) && close(rgb.g, 1.0) && close(rgb.b, 1.0));
        assert_eq!(parse_hex("0f0"), Some(Color::new(0, 255, 0)));
    }

    #[test]
    fn unparsable_hex_falls_back_to_black() {
        for input in ["", "#", "#12", "#12345", "#1234567", "#ggg", "blue", "#4B4AD5FF"] {
            assert_eq!(hex_to_rgb_normalized(input), NormalizedRgb::default(), "{input}");
        }
    }

    #[test]
    fn every_primitive_round_trips_through_normalized_channels() {
        for scale in registry().color_scales() {
            for entry in scale.colors {
                let original = parse_hex(entry.value).expect("registry hex parses");
                let back = hex_to_rgb_normalized(entry.value).to_color();
                for (a, b) in [
                    (original.r, back.r),
                    (original.g, back.g),
                    (original.b, back.b),
                ] {
                    assert!(a.abs_diff(b) <= 1, "{} {}", scale.name, entry.token);
                }
                assert_eq!(back.to_hex(), entry.value.to_ascii_uppercase());
            }
        }
    }

    #[test]
    fn get_color_reads_flat_groups() {
        let registry = registry();
        assert_eq!(get_color(registry.group("primary"), TokenKey::Step(500)), "#4B4AD5");
        assert_eq!(get_color(registry.group("gradient"), TokenKey::Name("start")), "#4B4AD5");
    }

    #[test]
    fn get_color_degrades_to_sentinel() {
        let registry = registry();
        assert_eq!(get_color(None, TokenKey::Step(500)), FALLBACK_HEX);
        assert_eq!(get_color(registry.group("primary"), TokenKey::Step(950)), FALLBACK_HEX);
        assert_eq!(get_color(registry.group("functional"), TokenKey::Step(500)), FALLBACK_HEX);
        assert_eq!(try_color(None, TokenKey::Step(500)), None);
    }

    #[test]
    fn rgba_css_uses_decimal_channels() {
        assert_eq!(rgba_css("#0F172A", 0.1), "rgba(15, 23, 42, 0.1)");
        assert_eq!(rgba_css("nope", 1.0), "rgba(0, 0, 0, 1)");
    }
}
