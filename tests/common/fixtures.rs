use std::cell::Cell;
use std::path::PathBuf;

use visitmap::core::{
    Catalog, GeoDataset, StatusRecord, StatusRepository, StatusStore, StoreError,
};

/// Three countries; Japan is two islands spanning `[[30,129],[46,146]]`.
pub const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "id": "FRA", "properties": {"name": "France"},
     "geometry": {"type": "Polygon", "coordinates": [
       [[-5.0, 42.0], [8.0, 42.0], [8.0, 51.0], [-5.0, 51.0], [-5.0, 42.0]]
     ]}},
    {"type": "Feature", "id": "DEU", "properties": {"name": "Germany"},
     "geometry": {"type": "Polygon", "coordinates": [
       [[6.0, 47.0], [15.0, 47.0], [15.0, 55.0], [6.0, 55.0], [6.0, 47.0]]
     ]}},
    {"type": "Feature", "id": "JPN", "properties": {"name": "Japan"},
     "geometry": {"type": "MultiPolygon", "coordinates": [
       [[[129.0, 30.0], [136.0, 30.0], [136.0, 35.0], [129.0, 35.0], [129.0, 30.0]]],
       [[[139.0, 38.0], [146.0, 38.0], [146.0, 46.0], [139.0, 46.0], [139.0, 38.0]]]
     ]}}
  ]
}"#;

pub fn sample_dataset() -> GeoDataset {
    SAMPLE_GEOJSON
        .parse()
        .expect("Sample dataset should parse")
}

pub fn sample_catalog() -> Catalog {
    Catalog::build(&sample_dataset()).expect("Sample catalog should build")
}

/// Creates a StatusStore pointing at a not-yet-existing file in a temp dir.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (StatusStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let store = StatusStore::new(dir.path().join("country_status.json"));
    (store, dir)
}

/// Writes the sample dataset to `dir` and returns its path.
pub fn write_sample_dataset(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("world.geojson");
    std::fs::write(&path, SAMPLE_GEOJSON).expect("Failed to write sample dataset");
    path
}

/// In-memory repository whose writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl StatusRepository for FlakyStore {
    fn load(&self, catalog: &Catalog) -> Result<StatusRecord, StoreError> {
        Ok(StatusRecord::fresh(catalog))
    }

    fn persist(&self, _record: &StatusRecord) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write {
                path: PathBuf::from("flaky.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
