use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::error::DataError;

use super::GeoDataset;

pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/python-visualization/folium/main/examples/data/world-countries.json";

const CACHE_DIR_NAME: &str = "visitmap";

/// Where the world boundaries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Path(PathBuf),
    Url(String),
}

impl FromStr for DatasetSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DatasetSource::Url(s.to_string()))
        } else {
            Ok(DatasetSource::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => f.write_str(url),
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Url(DEFAULT_DATASET_URL.to_string())
    }
}

/// Reads a dataset from disk or downloads it, keeping a copy of
/// downloads in the cache directory.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    source: DatasetSource,
    cache_dir: Option<PathBuf>,
}

impl DatasetLoader {
    /// Loader using the platform cache directory for downloads.
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            cache_dir: dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME)),
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: Option<PathBuf>) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Path the download of `url` is cached at, if caching is enabled.
    pub fn cache_path(&self, url: &str) -> Option<PathBuf> {
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
                    .collect::<String>()
            })
            .unwrap_or_else(|| "dataset.geojson".to_string());
        self.cache_dir.as_ref().map(|dir| dir.join(file_name))
    }

    pub fn load(&self) -> Result<GeoDataset, DataError> {
        let text = match &self.source {
            DatasetSource::Path(path) => read_dataset(path)?,
            DatasetSource::Url(url) => self.fetch_cached(url)?,
        };
        let dataset: GeoDataset = text.parse()?;
        log::info!("Loaded {} features from {}", dataset.len(), self.source);
        Ok(dataset)
    }

    fn fetch_cached(&self, url: &str) -> Result<String, DataError> {
        let cache_path = self.cache_path(url);

        if let Some(path) = cache_path.as_ref().filter(|p| p.is_file()) {
            match fs::read_to_string(path) {
                Ok(text) => {
                    log::debug!("Dataset cache hit: {:?}", path);
                    return Ok(text);
                }
                Err(e) => log::warn!("Ignoring unreadable dataset cache {:?}: {}", path, e),
            }
        }

        log::info!("Downloading dataset from {}", url);
        let text = download(url)?;

        if let Some(path) = cache_path {
            if let Err(e) = write_cache(&path, &text) {
                log::warn!("Failed to cache dataset at {:?}: {}", path, e);
            }
        }
        Ok(text)
    }
}

fn read_dataset(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn download(url: &str) -> Result<String, DataError> {
    let wrap = |source| DataError::Download {
        url: url.to_string(),
        source,
    };
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(wrap)
}

fn write_cache(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}
