//! Content factory for building the map oracle and config from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, RoomMap};

use crate::loaders::{ConfigLoader, LoadResult, MapFormat, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── maps/
///     ├── playground.ron
///     └── level1.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Like [`load_config`](Self::load_config), but a missing `config.toml`
    /// yields the default configuration. A file that exists and fails to
    /// parse is still an error.
    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(GameConfig::default())
        }
    }

    /// Resolve `maps/{name}.ron`, falling back to `maps/{name}.json`.
    pub fn map_path(&self, name: &str) -> Option<PathBuf> {
        let maps = self.data_dir.join("maps");
        MapFormat::ALL
            .iter()
            .map(|format| maps.join(format!("{name}.{}", format.extension())))
            .find(|path| path.exists())
    }

    /// Load a map by name from the `maps/` directory.
    pub fn load_map(&self, name: &str) -> LoadResult<RoomMap> {
        let path = self.map_path(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Map '{}' not found in {}",
                name,
                self.data_dir.join("maps").display()
            )
        })?;
        MapLoader::load(&path)
    }
}
