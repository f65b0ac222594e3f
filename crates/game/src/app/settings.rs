use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

pub(crate) const SETTINGS_ENV_VAR: &str = "BLASTER_SETTINGS";
const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Optional launch settings. Anything missing, unreadable, or malformed
/// falls back to defaults; a broken settings file must never keep the
/// game from starting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) max_render_fps: Option<u32>,
    pub(crate) practice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            max_render_fps: None,
            practice: true,
        }
    }
}

pub(crate) fn load_settings() -> Settings {
    let path = env::var(SETTINGS_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));
    load_settings_from(&path)
}

pub(crate) fn load_settings_from(path: &Path) -> Settings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "settings_file_absent");
            return Settings::default();
        }
        Err(error) => {
            warn!(path = %path.display(), error = %error, "settings_read_failed");
            return Settings::default();
        }
    };

    let deserializer = &mut serde_json::Deserializer::from_str(&raw);
    match serde_path_to_error::deserialize::<_, Settings>(deserializer) {
        Ok(settings) => sanitize(settings),
        Err(error) => {
            warn!(
                path = %path.display(),
                field = %error.path(),
                error = %error,
                "settings_parse_failed"
            );
            Settings::default()
        }
    }
}

fn sanitize(settings: Settings) -> Settings {
    if settings.window_width == 0 || settings.window_height == 0 {
        warn!(
            window_width = settings.window_width,
            window_height = settings.window_height,
            "settings_window_size_invalid"
        );
        return Settings {
            window_width: Settings::default().window_width,
            window_height: Settings::default().window_height,
            ..settings
        };
    }
    settings
}
