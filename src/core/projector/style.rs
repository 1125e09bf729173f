use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::VisitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0x2e, g: 0xcc, b: 0x71 };
    pub const LIGHT_GRAY: Color = Color { r: 0xcc, g: 0xcc, b: 0xcc };
    pub const RED: Color = Color { r: 0xff, g: 0, b: 0 };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How one region is painted. A `fill` of `None` is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionStyle {
    pub fill: Option<Color>,
    pub fill_opacity: f32,
    pub stroke: Color,
    pub weight: f32,
}

impl RegionStyle {
    pub const VISITED: RegionStyle = RegionStyle {
        fill: Some(Color::GREEN),
        fill_opacity: 0.7,
        stroke: Color::BLACK,
        weight: 1.0,
    };

    pub const NOT_VISITED: RegionStyle = RegionStyle {
        fill: None,
        fill_opacity: 0.0,
        stroke: Color::LIGHT_GRAY,
        weight: 1.0,
    };

    /// Outline drawn on top of the selected country.
    pub const HIGHLIGHT: RegionStyle = RegionStyle {
        fill: None,
        fill_opacity: 0.0,
        stroke: Color::RED,
        weight: 3.0,
    };

    pub fn for_status(status: VisitStatus) -> RegionStyle {
        match status {
            VisitStatus::Visited => RegionStyle::VISITED,
            VisitStatus::NotVisited => RegionStyle::NOT_VISITED,
        }
    }
}
