use crate::algorithms::{classify, jenks};
use crate::error::BreaksError;
use crate::limits;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color { Color { r, g, b, a: 255 } }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Color> {
        let h = s.strip_prefix('#').unwrap_or(s);
        if !h.is_ascii() || (h.len() != 6 && h.len() != 8) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        let a = if h.len() == 8 { byte(6)? } else { 255 };
        Some(Color { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String { c.to_hex() }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Color, String> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color '{}'", s))
    }
}

/// Ordered class colors plus the color used for entities with no class.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    classes: Vec<Color>,
    no_data: Color,
}

impl Palette {
    /// Returns `None` unless the class count is within `2..=MAX_CLASSES`.
    pub fn new(classes: Vec<Color>, no_data: Color) -> Option<Palette> {
        if !limits::in_class_bounds(classes.len()) {
            return None;
        }
        Some(Palette { classes, no_data })
    }

    pub fn from_hex(classes: &[&str], no_data: &str) -> Option<Palette> {
        let colors = classes
            .iter()
            .map(|s| Color::from_hex(s))
            .collect::<Option<Vec<_>>>()?;
        Palette::new(colors, Color::from_hex(no_data)?)
    }

    pub fn num_classes(&self) -> usize { self.classes.len() }
    pub fn no_data(&self) -> Color { self.no_data }
    pub fn colors(&self) -> &[Color] { &self.classes }

    pub fn color_for(&self, class: Option<usize>) -> Color {
        class
            .and_then(|i| self.classes.get(i).copied())
            .unwrap_or(self.no_data)
    }
}

impl Default for Palette {
    /// Six-step yellow to red ramp on a white no-data fill.
    fn default() -> Palette {
        Palette {
            classes: vec![
                Color::rgb(0xff, 0xff, 0xcc),
                Color::rgb(0xff, 0xcc, 0x00),
                Color::rgb(0xff, 0x99, 0x00),
                Color::rgb(0xff, 0x66, 0x00),
                Color::rgb(0xff, 0x33, 0x00),
                Color::rgb(0xcc, 0x00, 0x00),
            ],
            no_data: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// One class interval; `max == None` is the open-ended final class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassRange {
    pub index: usize,
    pub min: f64,
    pub max: Option<f64>,
    pub color: Color,
}

/// Natural-breaks result: the K class start values plus the observed maximum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Breaks {
    starts: Vec<f64>,
    max: f64,
}

impl Breaks {
    /// Computes the Fisher-Jenks partition of `values` into `k` classes.
    pub fn compute(values: &[f64], k: usize) -> Result<Breaks, BreaksError> {
        let starts = jenks::compute_breaks(values, k)?;
        // compute_breaks already rejected empty and non-finite input
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Breaks { starts, max })
    }

    pub fn num_classes(&self) -> usize { self.starts.len() }
    /// Class start values `b0..b(K-1)`; `b0` is the minimum observation.
    pub fn starts(&self) -> &[f64] { &self.starts }
    pub fn min(&self) -> f64 { self.starts.first().copied().unwrap_or(self.max) }
    pub fn max(&self) -> f64 { self.max }

    /// All K+1 bounds `b0..bK`.
    pub fn bounds(&self) -> Vec<f64> {
        let mut b = self.starts.clone();
        b.push(self.max);
        b
    }

    pub fn classify(&self, value: Option<f64>) -> Option<usize> {
        classify::classify(value, &self.starts)
    }

    /// Pairs each class with its palette color; the last class is open-ended.
    pub fn ranges(&self, palette: &Palette) -> Vec<ClassRange> {
        let k = self.starts.len();
        (0..k)
            .map(|i| ClassRange {
                index: i,
                min: self.starts[i],
                max: if i + 1 < k { Some(self.starts[i + 1]) } else { None },
                color: palette.color_for(Some(i)),
            })
            .collect()
    }
}
