use crate::error::{AtlasError, Result};
use crate::map::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, MapView, TileLayer};
use crate::model::Coordinate;
use crate::storage::DEFAULT_STORAGE_KEY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".atlas.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub atlas: AtlasSettings,

    #[serde(default)]
    pub map: MapSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasSettings {
    /// Data directory, relative to the project root
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_path() -> String {
    ".atlas".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    /// Initial center as `[lat, lng]`
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,
}

fn default_center() -> [f64; 2] {
    [20.0, 0.0]
}

fn default_zoom() -> u8 {
    3
}

fn default_tile_url() -> String {
    DEFAULT_TILE_URL.to_string()
}

fn default_attribution() -> String {
    DEFAULT_ATTRIBUTION.to_string()
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

impl MapSettings {
    pub fn initial_view(&self) -> Result<MapView> {
        let [lat, lng] = self.center;
        let center = Coordinate::new(lat, lng)
            .map_err(|e| AtlasError::Config(format!("map.center: {}", e)))?;
        Ok(MapView::new(center, self.zoom))
    }

    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.tile_url.clone(),
            attribution: self.attribution.clone(),
        }
    }
}

impl AtlasConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: AtlasConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| AtlasError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(AtlasError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.atlas.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where memories live when no project file is found.
pub fn user_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "atlas")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AtlasError::Config("Could not determine a home directory".to_string()))
}

/// Configuration plus the data directory it resolves to.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AtlasConfig,
    pub data_dir: PathBuf,
}

impl ResolvedConfig {
    /// Project config found upward from `start_path`, else defaults with the
    /// user data directory. `data_dir_override` wins over both.
    pub fn resolve(start_path: &Path, data_dir_override: Option<PathBuf>) -> Result<Self> {
        let (config, data_dir) = match AtlasConfig::load(start_path) {
            Ok((config, root)) => {
                let data_dir = config.data_path(&root);
                (config, data_dir)
            }
            Err(AtlasError::NotInitialized) => {
                let data_dir = match &data_dir_override {
                    Some(dir) => dir.clone(),
                    None => user_data_dir()?,
                };
                (AtlasConfig::default(), data_dir)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            config,
            data_dir: data_dir_override.unwrap_or(data_dir),
        })
    }
}
