mod style;

pub use style::{Color, RegionStyle};

use serde::Serialize;

use crate::core::geo::GeoDataset;
use crate::models::{Bounds, VisitStatus};

/// Screen padding, in pixels, applied when fitting the viewport to a focus box.
pub const FOCUS_PADDING: [u32; 2] = [30, 30];

/// A dataset feature with the style to draw it in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRegion {
    /// Index of the feature in the dataset.
    pub feature: usize,
    pub name: String,
    pub style: RegionStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// Area the map should fit its viewport to. Corners are `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusBox {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
    pub padding: [u32; 2],
}

impl FocusBox {
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            south_west: bounds.south_west(),
            north_east: bounds.north_east(),
            padding: FOCUS_PADDING,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_lat: self.south_west[0],
            min_lon: self.south_west[1],
            max_lat: self.north_east[0],
            max_lon: self.north_east[1],
        }
    }
}

/// Everything the map surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    /// One entry per feature, in dataset order.
    pub base: Vec<StyledRegion>,
    /// Drawn after `base`.
    pub overlay: Vec<StyledRegion>,
    pub focus: Option<FocusBox>,
}

impl RenderSpec {
    pub fn base_for(&self, name: &str) -> impl Iterator<Item = &StyledRegion> {
        self.base.iter().filter(move |region| region.name == name)
    }
}

/// Style every feature by status and, when `selection` names a feature,
/// outline it and focus on its extent.
pub fn project<F>(dataset: &GeoDataset, status_of: F, selection: Option<&str>) -> RenderSpec
where
    F: Fn(&str) -> VisitStatus,
{
    let base = dataset
        .regions()
        .iter()
        .enumerate()
        .map(|(feature, region)| StyledRegion {
            feature,
            name: region.name.clone(),
            style: RegionStyle::for_status(status_of(&region.name)),
            tooltip: Some(region.name.clone()),
        })
        .collect();

    let mut overlay = Vec::new();
    let mut focus: Option<Bounds> = None;
    if let Some(selected) = selection {
        for (feature, region) in dataset.features_named(selected) {
            overlay.push(StyledRegion {
                feature,
                name: region.name.clone(),
                style: RegionStyle::HIGHLIGHT,
                tooltip: None,
            });
            if let Some(bounds) = region.bounds() {
                focus = Some(match focus {
                    Some(acc) => acc.union(&bounds),
                    None => bounds,
                });
            }
        }
        if overlay.is_empty() {
            log::debug!("Selection {:?} matches no feature; nothing to focus", selected);
        }
    }

    RenderSpec {
        base,
        overlay,
        focus: focus.as_ref().map(FocusBox::from_bounds),
    }
}
