mod source;

pub use source::{DEFAULT_DATASET_URL, DatasetLoader, DatasetSource};

use std::str::FromStr;

use geojson::GeoJson;

use crate::core::error::DataError;
use crate::models::Bounds;

/// A closed ring of `[lon, lat]` positions.
pub type Ring = Vec<[f64; 2]>;

/// Outer ring followed by its holes.
pub type Polygon = Vec<Ring>;

/// One named feature of the world dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub polygons: Vec<Polygon>,
}

impl Region {
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    /// Extent over every ring, or `None` for an empty geometry.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.polygons.iter().flatten().flatten();
        let first = points.next()?;
        let mut bounds = Bounds::from_point(first[0], first[1]);
        for point in points {
            bounds.extend_point(point[0], point[1]);
        }
        Some(bounds)
    }

    /// Even-odd hit test; holes are rings like any other.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.polygons.iter().any(|polygon| {
            polygon
                .iter()
                .filter(|ring| ring_contains(ring, lon, lat))
                .count()
                % 2
                == 1
        })
    }
}

fn ring_contains(ring: &[[f64; 2]], lon: f64, lat: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// The world boundary dataset, in feature order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoDataset {
    regions: Vec<Region>,
}

impl GeoDataset {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Every feature carrying `name`, with its index.
    pub fn features_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Region)> + 'a {
        self.regions
            .iter()
            .enumerate()
            .filter(move |(_, region)| region.name == name)
    }

    /// Topmost region under a point; later features win.
    pub fn region_at(&self, lon: f64, lat: f64) -> Option<&Region> {
        self.regions
            .iter()
            .rev()
            .filter(|region| region.bounds().is_some_and(|b| b.contains(lon, lat)))
            .find(|region| region.contains(lon, lat))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.regions
            .iter()
            .filter_map(Region::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn from_geojson(geojson: GeoJson) -> Result<Self, DataError> {
        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(DataError::NotFeatureCollection),
        };

        let mut regions = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.iter().enumerate() {
            let name = feature
                .property("name")
                .and_then(|value| value.as_str())
                .ok_or(DataError::MissingName { index })?;
            let mut polygons = Vec::new();
            if let Some(geometry) = &feature.geometry {
                collect_polygons(&geometry.value, &mut polygons);
            }
            regions.push(Region::new(name, polygons));
        }
        Ok(Self { regions })
    }
}

impl FromStr for GeoDataset {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let geojson: GeoJson = s.parse()?;
        Self::from_geojson(geojson)
    }
}

fn collect_polygons(value: &geojson::Value, out: &mut Vec<Polygon>) {
    match value {
        geojson::Value::Polygon(rings) => out.push(convert_rings(rings)),
        geojson::Value::MultiPolygon(polygons) => {
            out.extend(polygons.iter().map(|rings| convert_rings(rings)))
        }
        geojson::Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_polygons(&geometry.value, out);
            }
        }
        // Points and lines have no area to fill.
        _ => {}
    }
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Polygon {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .filter(|position| position.len() >= 2)
                .map(|position| [position[0], position[1]])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Ring {
        vec![[min, min], [max, min], [max, max], [min, max], [min, min]]
    }

    #[test]
    fn parses_polygons_and_multipolygons() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "A"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type": "Feature", "properties": {"name": "B"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[2,2],[3,2],[3,3],[2,2]]],
                    [[[5,5],[6,5],[6,6],[5,5]]]
                 ]}}
            ]
        }"#;
        let dataset: GeoDataset = text.parse().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.regions()[0].polygons.len(), 1);
        assert_eq!(dataset.regions()[1].polygons.len(), 2);
        let bounds = dataset.regions()[1].bounds().unwrap();
        assert_eq!(bounds.south_west(), [2.0, 2.0]);
        assert_eq!(bounds.north_east(), [6.0, 6.0]);
    }

    #[test]
    fn missing_name_is_a_data_error() {
        let text = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"id": 3}, "geometry": null}
        ]}"#;
        let err = text.parse::<GeoDataset>().unwrap_err();
        assert!(matches!(err, DataError::MissingName { index: 0 }));
    }

    #[test]
    fn non_collection_is_rejected() {
        let text = r#"{"type": "Point", "coordinates": [1, 2]}"#;
        let err = text.parse::<GeoDataset>().unwrap_err();
        assert!(matches!(err, DataError::NotFeatureCollection));
    }

    #[test]
    fn hit_test_respects_holes() {
        let region = Region::new("Donut", vec![vec![square(0.0, 10.0), square(4.0, 6.0)]]);
        assert!(region.contains(2.0, 2.0));
        assert!(!region.contains(5.0, 5.0));
        assert!(!region.contains(11.0, 5.0));
    }

    #[test]
    fn region_at_prefers_later_features() {
        let dataset = GeoDataset::new(vec![
            Region::new("Big", vec![vec![square(0.0, 10.0)]]),
            Region::new("Small", vec![vec![square(2.0, 3.0)]]),
        ]);
        assert_eq!(dataset.region_at(2.5, 2.5).map(|r| r.name.as_str()), Some("Small"));
        assert_eq!(dataset.region_at(8.0, 8.0).map(|r| r.name.as_str()), Some("Big"));
        assert!(dataset.region_at(20.0, 20.0).is_none());
    }
}
