use crate::core::dirs::get_config_directory;
use crate::core::error::RepoStatError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configured repository set and tag associations.
///
/// Stored as `config.json` in the platform config directory. Tags map a
/// short opaque name to the repository paths it applies to.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RepoConfig {
    pub repositories: Vec<PathBuf>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<PathBuf>>,
}

impl RepoConfig {
    pub fn load_or_create() -> Result<Self, RepoStatError> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<(), RepoStatError> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    /// All tags whose path list contains `path`, in tag-name order
    pub fn tags_for(&self, path: &Path) -> Vec<String> {
        self.tags
            .iter()
            .filter(|(_, paths)| paths.iter().any(|tagged| tagged == path))
            .map(|(tag, _)| tag.clone())
            .collect()
    }
}
