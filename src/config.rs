use crate::keyword_loader::MANUAL_KEYWORD_FILES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the manual keyword files.
    pub keyword_dir: String,
    /// Manual keyword files to load, in order.
    pub manual_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keyword_dir: "keywords".to_string(),
            manual_files: MANUAL_KEYWORD_FILES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
