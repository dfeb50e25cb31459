use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyLimits {
    pub headline_max: usize,
    pub primary_text_max: usize,
    pub keywords_min: usize,
    pub keywords_max: usize,
    pub hashtags_min: usize,
    pub hashtags_max: usize,
    pub emojis_min: usize,
    pub emojis_max: usize,
    pub suggestions: usize,
    pub hashtag_cap: usize,
}

impl Default for CopyLimits {
    fn default() -> Self {
        Self {
            headline_max: 40,
            primary_text_max: 100,
            keywords_min: 25,
            keywords_max: 30,
            hashtags_min: 15,
            hashtags_max: 20,
            emojis_min: 8,
            emojis_max: 12,
            suggestions: 3,
            hashtag_cap: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBands {
    pub performance_min: f64,
    pub performance_max: f64,
    pub ctr_min: f64,
    pub ctr_max: f64,
    pub cpc_min: f64,
    pub cpc_max: f64,
    pub improvement_min: f64,
    pub improvement_max: f64,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            performance_min: 75.0,
            performance_max: 95.0,
            ctr_min: 2.0,
            ctr_max: 5.0,
            cpc_min: 1.0,
            cpc_max: 3.0,
            improvement_min: 5.0,
            improvement_max: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_ms: 8000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub limits: CopyLimits,
    pub bands: ScoreBands,
    pub provider: ProviderConfig,
}

impl GeneratorConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                GeneratorConfig::default()
            }
        } else {
            GeneratorConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("ADCOPY_PROVIDER_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.provider.endpoint = endpoint;
            }
        }
        if let Ok(model) = env::var("ADCOPY_PROVIDER_MODEL") {
            if !model.trim().is_empty() {
                self.provider.model = model;
            }
        }
        if let Ok(timeout) = env::var("ADCOPY_PROVIDER_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.provider.timeout_ms = value;
            }
        }
        if let Ok(cap) = env::var("ADCOPY_HASHTAG_CAP") {
            if let Ok(value) = cap.parse::<usize>() {
                self.limits.hashtag_cap = value.max(1);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ADCOPY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/generator.toml")))
}
