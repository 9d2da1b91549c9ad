//! Game settings and preferences
//!
//! Read-only: loaded from LocalStorage on the web, never written back. Physics constants live in
//! [`crate::consts`] and are not configurable.

use serde::{Deserialize, Serialize};

/// Fill colors, as CSS color strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub net: String,
    /// Left paddle and ball
    pub left: String,
    pub right: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#2e026d".to_string(),
            net: "#fff".to_string(),
            left: "#ff00ff".to_string(),
            right: "#00ffff".to_string(),
        }
    }
}

/// Key names (as reported by `KeyboardEvent.key`) for each paddle move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,
    pub keys: KeyBindings,
    /// Frames pumped by the native headless run
    pub headless_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            keys: KeyBindings::default(),
            headless_frames: 600,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "vaporwave_pong_settings";

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring corrupt settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
