//! Palette tokens

use crate::theme::{ThemeEntry, ThemeSection, TokenValue};

/// Dark foreground used on light palette colors
const DARK_FOREGROUND: &str = "#212121";
/// Light foreground used on dark palette colors
const LIGHT_FOREGROUND: &str = "#ffffff";

/// Suffixes of derived palette keys
const DERIVED_SUFFIXES: [&str; 3] = ["Tint", "Shade", "Inverted"];

/// An sRGB color parsed from palette hex values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    ///
    /// ```rust
    /// use fanny_theme::Color;
    ///
    /// assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
    /// assert_eq!(Color::from_hex("#574feb"), Some(Color::rgb(0x57, 0x4f, 0xeb)));
    /// assert_eq!(Color::from_hex("red"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend toward `other` by `t` (0.0 = self, 1.0 = other)
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    /// Relative luminance (WCAG)
    pub fn luminance(self) -> f32 {
        let linear = |c: u8| {
            let c = c as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Lighter variant for subtle backgrounds
    pub fn tint(self) -> Color {
        self.mix(Color::WHITE, 0.85)
    }

    /// Darker variant for hover and pressed states
    pub fn shade(self) -> Color {
        self.mix(Color::BLACK, 0.15)
    }

    /// Foreground that stays readable on this color
    pub fn readable_foreground(self) -> &'static str {
        if self.luminance() > 0.4 {
            DARK_FOREGROUND
        } else {
            LIGHT_FOREGROUND
        }
    }
}

/// Default palette
pub fn palette() -> ThemeSection {
    super::table(&[
        ("text", "#212121"),
        ("textInverted", "#ffffff"),
        ("background", "#ffffff"),
        ("white", "#ffffff"),
        ("black", "#000000"),
        ("default", "#e8e8e8"),
        ("gray", "#737373"),
        ("primary", "#574feb"),
        ("secondary", "#4b4b5b"),
        ("success", "#0a7d33"),
        ("danger", "#da1717"),
        ("warning", "#ed9c22"),
        ("info", "#1e67d5"),
    ])
}

/// Fill in `<name>Tint`, `<name>Shade`, and `<name>Inverted` for hex colors
///
/// Keys the caller already supplied are kept as they are.
pub fn derive_palette(palette: &mut ThemeSection) {
    let mut derived = Vec::new();
    for (key, entry) in palette.iter() {
        if DERIVED_SUFFIXES.iter().any(|suffix| key.ends_with(suffix)) {
            continue;
        }
        let Some(color) = entry
            .as_token()
            .and_then(TokenValue::as_text)
            .and_then(Color::from_hex)
        else {
            continue;
        };
        derived.push((format!("{key}Tint"), color.tint().to_hex()));
        derived.push((format!("{key}Shade"), color.shade().to_hex()));
        derived.push((format!("{key}Inverted"), color.readable_foreground().to_string()));
    }
    for (key, value) in derived {
        if !palette.contains_key(&key) {
            palette.insert(key, ThemeEntry::Token(TokenValue::Text(value)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_foreground() {
        assert_eq!(Color::WHITE.readable_foreground(), DARK_FOREGROUND);
        assert_eq!(Color::BLACK.readable_foreground(), LIGHT_FOREGROUND);
        assert_eq!(
            Color::from_hex("#574feb").unwrap().readable_foreground(),
            LIGHT_FOREGROUND
        );
        assert_eq!(
            Color::from_hex("#e8e8e8").unwrap().readable_foreground(),
            DARK_FOREGROUND
        );
    }

    #[test]
    fn test_mix_endpoints() {
        let color = Color::rgb(10, 20, 30);
        assert_eq!(color.mix(Color::WHITE, 0.0), color);
        assert_eq!(color.mix(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(color.mix(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_derive_palette_keeps_explicit_keys() {
        let mut palette = ThemeSection::new()
            .token("primary", "#000000")
            .token("primaryTint", "#123456")
            .token("brand", "not-a-color");
        derive_palette(&mut palette);

        assert_eq!(
            palette.get_path("primaryTint").and_then(ThemeEntry::as_token),
            Some(&TokenValue::from("#123456"))
        );
        assert_eq!(
            palette.get_path("primaryShade").and_then(ThemeEntry::as_token),
            Some(&TokenValue::from("#000000"))
        );
        assert_eq!(
            palette.get_path("primaryInverted").and_then(ThemeEntry::as_token),
            Some(&TokenValue::from(LIGHT_FOREGROUND))
        );
        assert!(!palette.contains_key("brandTint"));
        assert!(!palette.contains_key("primaryTintTint"));
    }
}
