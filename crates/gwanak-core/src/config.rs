use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the TUI log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while the page is idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate used while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Duration of the fade-in played when a section is revealed
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            reveal_duration_ms: default_reveal_duration(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by page scrolling and section reveals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate page scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines moved by a single scroll key press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: true,
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

/// Timing of the campus carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Interval between automatic advances
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Pause after a manual navigation before autoplay resumes
    #[serde(default = "default_cooldown")]
    pub cooldown_ms: u64,
    /// Share of the carousel that must be on-screen to activate it
    #[serde(default = "default_carousel_threshold")]
    pub visibility_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            cooldown_ms: default_cooldown(),
            visibility_threshold: default_carousel_threshold(),
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.autoplay_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.cooldown_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.cooldown_ms must be greater than zero".to_string(),
            ));
        }
        validate_threshold("carousel.visibility_threshold", self.visibility_threshold)
    }
}

/// Count-up animation of the statistics section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_count_duration")]
    pub count_duration_ms: u64,
    /// Number of discrete increments between zero and the final value
    #[serde(default = "default_count_steps")]
    pub count_steps: u32,
    #[serde(default = "default_stats_threshold")]
    pub visibility_threshold: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            count_duration_ms: default_count_duration(),
            count_steps: default_count_steps(),
            visibility_threshold: default_stats_threshold(),
        }
    }
}

impl StatsConfig {
    pub fn count_duration(&self) -> Duration {
        Duration::from_millis(self.count_duration_ms)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.count_steps == 0 {
            return Err(crate::Error::Config(
                "stats.count_steps must be greater than zero".to_string(),
            ));
        }
        validate_threshold("stats.visibility_threshold", self.visibility_threshold)
    }
}

fn validate_threshold(name: &str, value: f64) -> crate::Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(crate::Error::Config(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )))
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a table with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "snu-dark", "snu-light")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a table with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name = None;
                let mut colors = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Hex color overrides ("#c9a227" or "c9a227")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub selection: Option<String>,
    pub border: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "G", "<C-d>", "<CR>", "<Esc>", "<Tab>", "<S-Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_help")]
    pub help: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Smooth-scroll to the next section anchor
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    // Section interaction
    /// Move focus to the next interactive section
    #[serde(default = "default_key_focus_next")]
    pub focus_next: String,
    #[serde(default = "default_key_focus_prev")]
    pub focus_prev: String,
    /// Previous card / tab / slide in the focused section
    #[serde(default = "default_key_item_left")]
    pub item_left: String,
    /// Next card / tab / slide in the focused section
    #[serde(default = "default_key_item_right")]
    pub item_right: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            help: default_key_help(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            focus_next: default_key_focus_next(),
            focus_prev: default_key_focus_prev(),
            item_left: default_key_item_left(),
            item_right: default_key_item_right(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_help() -> String { "?".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "]".to_string() }
fn default_key_prev_section() -> String { "[".to_string() }
fn default_key_focus_next() -> String { "<Tab>".to_string() }
fn default_key_focus_prev() -> String { "<S-Tab>".to_string() }
fn default_key_item_left() -> String { "h".to_string() }
fn default_key_item_right() -> String { "l".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gwanak")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_theme_name() -> String {
    "snu-dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_reveal_duration() -> u64 {
    700
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_autoplay_interval() -> u64 {
    5000
}

fn default_cooldown() -> u64 {
    10_000
}

fn default_carousel_threshold() -> f64 {
    0.2
}

fn default_count_duration() -> u64 {
    2000
}

fn default_count_steps() -> u32 {
    60
}

fn default_stats_threshold() -> f64 {
    0.3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.carousel.validate()?;
        self.stats.validate()
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Always ~/.config/gwanak/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("gwanak")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("gwanak.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(config.carousel.cooldown(), Duration::from_secs(10));
        assert!((config.carousel.visibility_threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.stats.count_steps, 60);
        assert_eq!(config.ui.theme.name, "snu-dark");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [carousel]
            cooldown_ms = 3000

            [ui]
            theme = "snu-light"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.cooldown_ms, 3000);
        assert_eq!(config.carousel.autoplay_interval_ms, 5000);
        assert_eq!(config.ui.theme.name, "snu-light");
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_theme_table_with_overrides() {
        let config = AppConfig::from_toml_str(
            r##"
            [ui.theme]
            name = "gruvbox-dark"
            [ui.theme.colors]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
        assert!(config.ui.theme.colors.background.is_none());
    }

    #[test]
    fn test_easing_names() {
        let config = AppConfig::from_toml_str(
            r#"
            [ui.scroll]
            easing = "ease_out"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut config = AppConfig::default();
        config.carousel.autoplay_interval_ms = 0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut config = AppConfig::default();
        config.stats.visibility_threshold = 1.5;
        assert!(config.validate().is_err());

        config.stats.visibility_threshold = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = AppConfig::from_toml_str("[carousel\ncooldown_ms = ");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
