// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Small JSON document of UI preferences. A missing or corrupt file reads as
//! an empty configuration, and write failures are swallowed: preferences
//! must never interrupt application flow.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub last_month: Option<String>,
    pub window_geometry: Option<WindowGeometry>,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_month: None,
            window_geometry: None,
            theme: "light".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com.alphavelocity", "LedgerLite", "ledgerlite")?;
    Some(proj.config_dir().join("ledgerlite_config.json"))
}

impl Config {
    /// Load from the per-user config file, degrading to defaults on any
    /// failure.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Best-effort save; errors are dropped.
    pub fn save(&self) {
        if let Some(path) = config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(dir) = path.parent() {
            if fs::create_dir_all(dir).is_err() {
                return;
            }
        }
        if let Ok(raw) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, raw);
        }
    }
}
