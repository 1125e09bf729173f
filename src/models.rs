use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a country has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisitStatus {
    #[serde(rename = "visited")]
    Visited,
    #[default]
    #[serde(rename = "not visited")]
    NotVisited,
}

impl VisitStatus {
    pub fn is_visited(self) -> bool {
        matches!(self, VisitStatus::Visited)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisitStatus::Visited => "visited",
            VisitStatus::NotVisited => "not visited",
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitStatus {
    type Err = anyhow::Error;

    /// Accepts the persisted spelling as well as the CLI spellings
    /// (`not-visited`, `not_visited`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visited" => Ok(VisitStatus::Visited),
            "not visited" | "not-visited" | "not_visited" => Ok(VisitStatus::NotVisited),
            other => Err(anyhow::anyhow!("Invalid visit status: {}", other)),
        }
    }
}

/// Visited count over the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub visited: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.visited as f32 / self.total as f32
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} countries", self.visited, self.total)
    }
}

/// Geographic extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn from_point(lon: f64, lat: f64) -> Self {
        Self {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn extend_point(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_lon: self.min_lon.min(other.min_lon),
            min_lat: self.min_lat.min(other.min_lat),
            max_lon: self.max_lon.max(other.max_lon),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// `[lat, lon]` of the south-west corner.
    pub fn south_west(&self) -> [f64; 2] {
        [self.min_lat, self.min_lon]
    }

    /// `[lat, lon]` of the north-east corner.
    pub fn north_east(&self) -> [f64; 2] {
        [self.max_lat, self.max_lon]
    }
}
