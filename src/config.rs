use crate::controller::ControllerOptions;
use crate::error::{ConfigError, Result};
use crate::registry::{SectionDescriptor, SectionRegistry};
use crate::url::{FilterParam, KEYWORD_PARAM, SECTION_PARAM, SORT_PARAM};
use crate::layout;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub visibility: VisibilityConfig,
    pub sticky: StickyConfig,
    pub sections: Vec<SectionConfig>,
    pub filters: Vec<FilterConfig>,
}

/// Guard, cooldown and debounce windows (milliseconds)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// How long scroll-driven section changes are ignored after a programmatic scroll
    pub guard_ms: u64,
    /// Minimum quiet time between two scroll-driven section changes
    pub cooldown_ms: u64,
    /// Time a new candidate must stay stable before it is committed
    pub debounce_ms: u64,
    /// Delay before scrolling to a deep-linked section on start-up
    pub initial_scroll_delay_ms: u64,
}

/// Section auto-detection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Anchors at or below this intersection ratio are never candidates
    pub min_ratio: f32,
    /// Set to false to disable auto-detection entirely
    pub enabled: bool,
}

/// Sticky nav hysteresis (pixels, sentinel top relative to the viewport)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StickyConfig {
    pub enter_at: f32,
    pub exit_at: f32,
    /// Space left above an anchor when scrolling to it
    pub scroll_offset: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SectionConfig {
    pub id: String,
    pub anchor: String,
    /// Tab label; defaults to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// Catalog field name
    pub category: String,
    /// URL fragment parameter
    pub param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            guard_ms: layout::NAVIGATION_GUARD_MS,
            cooldown_ms: layout::SECTION_COOLDOWN_MS,
            debounce_ms: layout::SECTION_DEBOUNCE_MS,
            initial_scroll_delay_ms: layout::INITIAL_SCROLL_DELAY_MS,
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        VisibilityConfig {
            min_ratio: layout::MIN_INTERSECTION_RATIO,
            enabled: true,
        }
    }
}

impl Default for StickyConfig {
    fn default() -> Self {
        StickyConfig {
            enter_at: layout::STICKY_ENTER_AT,
            exit_at: layout::STICKY_EXIT_AT,
            scroll_offset: layout::SCROLL_OFFSET,
        }
    }
}

impl SectionConfig {
    fn new(id: &str, anchor: &str, label: &str) -> Self {
        SectionConfig {
            id: id.to_string(),
            anchor: anchor.to_string(),
            label: Some(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl FilterConfig {
    fn new(category: &str, param: &str, label: &str) -> Self {
        FilterConfig {
            category: category.to_string(),
            param: param.to_string(),
            label: Some(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.category)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timing: TimingConfig::default(),
            visibility: VisibilityConfig::default(),
            sticky: StickyConfig::default(),
            sections: vec![
                SectionConfig::new("featured", "featured", "Featured"),
                SectionConfig::new("accelerators", "accelerators", "All accelerators"),
                SectionConfig::new("differentiators", "differentiators", "Differentiators"),
                SectionConfig::new("how-it-works", "how-it-works", "How it works"),
                SectionConfig::new("success-stories", "customer-trust", "Success stories"),
            ],
            filters: vec![
                FilterConfig::new("productsAndServices", "productsAndServices", "Products and Services"),
                FilterConfig::new("industries", "industries", "Industries"),
                FilterConfig::new("programmingLanguages", "languages", "Languages"),
            ],
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "catalog-nav")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}");
                log::warn!("Using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.sticky.enter_at >= self.sticky.exit_at {
            return invalid(format!(
                "sticky.enter_at ({}) must be below sticky.exit_at ({})",
                self.sticky.enter_at, self.sticky.exit_at
            ));
        }
        if !(0.0..1.0).contains(&self.visibility.min_ratio) {
            return invalid(format!("visibility.min_ratio {} is outside [0, 1)", self.visibility.min_ratio));
        }
        if self.timing.guard_ms == 0 || self.timing.debounce_ms == 0 {
            return invalid("timing.guard_ms and timing.debounce_ms must be positive".into());
        }

        let mut ids = HashSet::new();
        let mut anchors = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() || section.anchor.trim().is_empty() {
                return invalid("section id and anchor must not be empty".into());
            }
            if !ids.insert(section.id.as_str()) {
                return invalid(format!("duplicate section id '{}'", section.id));
            }
            if !anchors.insert(section.anchor.as_str()) {
                return invalid(format!("duplicate section anchor '{}'", section.anchor));
            }
        }

        let mut params = HashSet::new();
        for filter in &self.filters {
            if [SECTION_PARAM, SORT_PARAM, KEYWORD_PARAM].contains(&filter.param.as_str()) {
                return invalid(format!("filter param '{}' is reserved", filter.param));
            }
            if filter.param.is_empty() || filter.param.contains(['=', '&', '#']) {
                return invalid(format!("filter param '{}' is not a valid name", filter.param));
            }
            if !params.insert(filter.param.as_str()) {
                return invalid(format!("duplicate filter param '{}'", filter.param));
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::new(
            self.sections
                .iter()
                .map(|s| SectionDescriptor::new(&s.id, &s.anchor)),
        )
    }

    pub fn filter_params(&self) -> Vec<FilterParam> {
        self.filters
            .iter()
            .map(|f| FilterParam::new(&f.category, &f.param))
            .collect()
    }

    pub fn filter_label<'a>(&'a self, category: &'a str) -> &'a str {
        self.filters
            .iter()
            .find(|f| f.category == category)
            .map_or(category, FilterConfig::label)
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            guard: Duration::from_millis(self.timing.guard_ms),
            cooldown: Duration::from_millis(self.timing.cooldown_ms),
            debounce: Duration::from_millis(self.timing.debounce_ms),
            initial_scroll_delay: Duration::from_millis(self.timing.initial_scroll_delay_ms),
            min_ratio: self.visibility.min_ratio,
            enter_at: self.sticky.enter_at,
            exit_at: self.sticky.exit_at,
            observation_available: self.visibility.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.guard_ms, 1500);
        assert_eq!(config.timing.cooldown_ms, 500);
        assert_eq!(config.timing.debounce_ms, 300);
        assert_eq!(config.sticky.enter_at, -8.0);
        assert_eq!(config.sticky.exit_at, 12.0);
        assert_eq!(config.registry().len(), 5);
        assert_eq!(config.filter_label("programmingLanguages"), "Languages");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::from_toml_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml_str("[timing]\nguard_ms = 1000\n").expect("valid config");
        assert_eq!(config.timing.guard_ms, 1000);
        assert_eq!(config.timing.debounce_ms, 300);
        assert_eq!(config.sections.len(), 5);
        assert_eq!(config.controller_options().guard, Duration::from_millis(1000));
    }

    #[test]
    fn test_invalid_configs() {
        let inverted = "[sticky]\nenter_at = 12.0\nexit_at = -8.0\n";
        assert!(matches!(Config::from_toml_str(inverted), Err(ConfigError::Invalid(_))));

        let reserved = "[[filters]]\ncategory = \"industries\"\nparam = \"sort\"\n";
        assert!(matches!(Config::from_toml_str(reserved), Err(ConfigError::Invalid(_))));

        let duplicate = "[[sections]]\nid = \"a\"\nanchor = \"x\"\n[[sections]]\nid = \"b\"\nanchor = \"x\"\n";
        assert!(matches!(Config::from_toml_str(duplicate), Err(ConfigError::Invalid(_))));

        assert!(matches!(Config::from_toml_str("timing = 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.visibility.enabled = false;
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert!(!loaded.controller_options().observation_available);
        assert!(matches!(
            Config::load_from(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
