//! Colours and the widget style palette.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    /// Build from `0.0..=1.0` channel fractions, saturating outside that range.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const MID_GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

/// Series 0 draws in black, every later series in mid grey.
pub const SERIES_COLORS: [Color; 2] = [BLACK, MID_GRAY];

/// Named colours a host style provides for the current widget state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Background fill.
    pub mid: Color,
    /// Border.
    pub fg: Color,
    /// Tick gridlines.
    pub dark: Color,
    /// Line colour of the cell renderer.
    pub text: Color,
    pub series: Vec<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            mid: Color::rgb(0xC3, 0xC3, 0xC3),
            fg: BLACK,
            dark: Color::rgb(0x9A, 0x9A, 0x9A),
            text: BLACK,
            series: SERIES_COLORS.to_vec(),
        }
    }
}

impl Style {
    /// Colour for series `index`; the last palette entry repeats.
    pub fn series_color(&self, index: usize) -> Color {
        match self.series.get(index).or(self.series.last()) {
            Some(color) => *color,
            None => self.fg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_repeats_last_entry() {
        let style = Style::default();
        assert_eq!(style.series_color(0), BLACK);
        assert_eq!(style.series_color(1), MID_GRAY);
        assert_eq!(style.series_color(5), MID_GRAY);
    }

    #[test]
    fn empty_palette_falls_back_to_fg() {
        let style = Style {
            series: Vec::new(),
            ..Style::default()
        };
        assert_eq!(style.series_color(0), style.fg);
    }

    #[test]
    fn unit_channels_saturate() {
        assert_eq!(Color::from_unit(1.0, 0.5, -2.0), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_unit(0.0, 0.0, 1.0), Color::rgb(0, 0, 255));
    }
}
