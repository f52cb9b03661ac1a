use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

pub const N_UNIT_COLORS: usize = 6;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgPlanTheme,
    ///Outline every cell of the grid, including the empty ones
    #[serde(default)]
    pub grid_lines: bool,
    ///Draw the placed units on top of the plan
    #[serde(default)]
    pub units: bool,
    ///Print the plan dimensions and unit counts above the plan
    #[serde(default)]
    pub label: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPlanTheme::default(),
            grid_lines: true,
            units: true,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPlanTheme {
    pub stroke_width_multiplier: f64,
    pub footprint_fill: Color,
    pub empty_fill: Color,
    pub unit_fill: [Color; N_UNIT_COLORS],
    pub unit_fill_opac: f64,
}

impl Default for SvgPlanTheme {
    fn default() -> Self {
        SvgPlanTheme::EARTH_TONES
    }
}

impl SvgPlanTheme {
    pub const EARTH_TONES: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.0,
        footprint_fill: Color(0xCC, 0x82, 0x4A),
        empty_fill: Color(0xFF, 0xFF, 0xFF),
        unit_fill: [
            Color(0xFF, 0xC8, 0x79), // SAND
            Color(0x8F, 0xB3, 0x9A), // SAGE
            Color(0x6C, 0x8E, 0xBF), // SLATE
            Color(0xD9, 0x6C, 0x5F), // BRICK
            Color(0xB5, 0x9C, 0xD6), // LILAC
            Color(0xC7, 0xA9, 0x00), // DARK YELLOW
        ],
        unit_fill_opac: 0.5,
    };

    pub const GRAY: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.5,
        footprint_fill: Color(0xD3, 0xD3, 0xD3),
        empty_fill: Color(0xFF, 0xFF, 0xFF),
        unit_fill: [
            Color(0x7A, 0x7A, 0x7A),
            Color(0x63, 0x63, 0x63),
            Color(0x4D, 0x4D, 0x4D),
            Color(0x9A, 0x9A, 0x9A),
            Color(0x36, 0x36, 0x36),
            Color(0xB0, 0xB0, 0xB0),
        ],
        unit_fill_opac: 0.7,
    };

    /// Fill color of the `i`th unit type, cycling through the palette.
    pub fn unit_color(&self, i: usize) -> Color {
        self.unit_fill[i % N_UNIT_COLORS]
    }
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    append_rect(Data::new(), rect)
}

/// Appends the outline of `rect` as a closed subpath of `data`.
pub fn append_rect(data: Data, rect: &Rect) -> Data {
    let (x_min, y_min) = (rect.x_min as f32, rect.y_min as f32);
    let (x_max, y_max) = (rect.x_max as f32, rect.y_max as f32);
    data.move_to((x_min, y_min))
        .line_to((x_max, y_min))
        .line_to((x_max, y_max))
        .line_to((x_min, y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
