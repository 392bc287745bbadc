//! Application configuration.
//!
//! Loaded from a TOML file once at startup:
//!
//! ```toml
//! [todoist]
//! api_token = "0123abcd..."      # or CHORE_BOARD_TODOIST_TOKEN
//! project_id = "2203306141"
//!
//! [weather]
//! latitude = 39.7456
//! longitude = -97.0892
//!
//! [storage]
//! tally_path = "/home/pi/fam_chores/task_tally.json"
//!
//! [display]
//! output_dir = "/run/chore-board"
//! title = "Family Chores"
//!
//! [fonts]
//! task = "8x13"
//! ```
//!
//! Everything except the Todoist token, the project id and the coordinates
//! has a default.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chores_common::config::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_TITLE};
use chores_common::{Board, FontSet, RenderError};
use directories::ProjectDirs;
use embedded_graphics::geometry::Size;
use serde::Deserialize;

/// Environment variable that overrides `todoist.api_token`.
pub const TOKEN_ENV: &str = "CHORE_BOARD_TODOIST_TOKEN";

/// Default time between cycles (15 minutes).
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(900);

/// Default HTTP timeout per request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(20);

const CONFIG_FILE: &str = "config.toml";

/// Configuration problems, reported once at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing `{0}` (set it in the config file)")]
    Missing(&'static str),

    #[error("invalid `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("invalid font settings: {0}")]
    Fonts(#[from] RenderError),

    #[error("no home directory to place the default config in")]
    NoHome,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub todoist: TodoistConfig,
    pub weather: WeatherConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Role key to font name, see `chores_common::fonts`.
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoistConfig {
    #[serde(default)]
    pub api_token: String,
    pub project_id: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_weather_base")]
    pub api_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub tally_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tally_path: data_dir().join("task_tally.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Landscape composition width, before rotation.
    pub width: u32,
    /// Landscape composition height, before rotation.
    pub height: u32,
    pub title: String,
    /// Where the plane buffers and preview are written.
    pub output_dir: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            title: DEFAULT_TITLE.to_owned(),
            output_dir: data_dir().join("frames"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub refresh_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            refresh_secs: DEFAULT_REFRESH.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT.as_secs(),
        }
    }
}

fn default_api_base() -> String { "https://api.todoist.com".to_owned() }

fn default_weather_base() -> String { "https://api.weather.gov".to_owned() }

fn default_user_agent() -> String { format!("chore-board/{}", env!("CARGO_PKG_VERSION")) }

fn project_dirs() -> Option<ProjectDirs> { ProjectDirs::from("", "", "chore-board") }

fn data_dir() -> PathBuf {
    project_dirs().map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
}

/// Default config file location (`~/.config/chore-board/config.toml` on Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(ConfigError::NoHome)
}

impl Config {
    /// Read, parse and validate `path`, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.todoist.api_token = token;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without validation or overrides.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> { toml::from_str(raw) }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.todoist.api_token.trim().is_empty() {
            return Err(ConfigError::Missing("todoist.api_token"));
        }
        if self.todoist.project_id.trim().is_empty() {
            return Err(ConfigError::Missing("todoist.project_id"));
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            return Err(ConfigError::Invalid {
                key: "weather.latitude",
                reason: format!("{} is outside -90..=90", self.weather.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            return Err(ConfigError::Invalid {
                key: "weather.longitude",
                reason: format!("{} is outside -180..=180", self.weather.longitude),
            });
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::Invalid {
                key: "display",
                reason: "width and height must be non-zero".to_owned(),
            });
        }
        if self.schedule.refresh_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "schedule.refresh_secs",
                reason: "must be at least 1".to_owned(),
            });
        }
        self.font_set()?;
        Ok(())
    }

    /// Font table with the `[fonts]` overrides applied.
    pub fn font_set(&self) -> Result<FontSet, RenderError> {
        FontSet::from_overrides(self.fonts.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Board geometry and title.
    pub fn board(&self) -> Board {
        Board::new(Size::new(self.display.width, self.display.height)).with_title(self.display.title.clone())
    }

    pub const fn refresh_interval(&self) -> Duration { Duration::from_secs(self.schedule.refresh_secs) }

    pub const fn http_timeout(&self) -> Duration { Duration::from_secs(self.http.timeout_secs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [todoist]
        api_token = "secret"
        project_id = "2203306141"

        [weather]
        latitude = 39.7456
        longitude = -97.0892
    "#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = Config::parse(MINIMAL).unwrap();
        config.validate().unwrap();

        assert_eq!(config.todoist.api_base, "https://api.todoist.com");
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 480);
        assert_eq!(config.display.title, "Family Chores");
        assert_eq!(config.refresh_interval(), Duration::from_secs(900));
        assert_eq!(config.http_timeout(), Duration::from_secs(20));
        assert!(config.weather.user_agent.starts_with("chore-board/"));
        assert!(config.storage.tally_path.ends_with("task_tally.json"));
    }

    #[test]
    fn test_full_config() {
        let raw = r#"
            [todoist]
            api_token = "secret"
            project_id = "42"
            api_base = "http://localhost:9000"

            [weather]
            latitude = 1.5
            longitude = 2.5

            [storage]
            tally_path = "/tmp/tally.json"

            [display]
            width = 400
            height = 300
            title = "Chores"
            output_dir = "/tmp/frames"

            [fonts]
            task = "6x10"

            [schedule]
            refresh_secs = 60

            [http]
            timeout_secs = 5
        "#;
        let config = Config::parse(raw).unwrap();
        config.validate().unwrap();

        assert_eq!(config.storage.tally_path, PathBuf::from("/tmp/tally.json"));
        assert_eq!(config.board().size(), Size::new(400, 300));
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert!(config.font_set().is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let raw = MINIMAL.replace(r#"api_token = "secret""#, "");
        let config = Config::parse(&raw).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Missing("todoist.api_token"))));
    }

    #[test]
    fn test_missing_project_is_parse_error() {
        let raw = MINIMAL.replace(r#"project_id = "2203306141""#, "");
        assert!(Config::parse(&raw).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let raw = format!("{MINIMAL}\n[display]\ncolour = \"red\"\n");
        assert!(Config::parse(&raw).is_err());
    }

    #[test]
    fn test_bad_latitude_rejected() {
        let raw = MINIMAL.replace("39.7456", "139.0");
        let config = Config::parse(&raw).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { key: "weather.latitude", .. })));
    }

    #[test]
    fn test_unknown_font_rejected() {
        let raw = format!("{MINIMAL}\n[fonts]\ntitle = \"papyrus\"\n");
        let config = Config::parse(&raw).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Fonts(RenderError::UnknownFont(_)))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, MINIMAL).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.todoist.project_id, "2203306141");

        let missing = Config::load(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
