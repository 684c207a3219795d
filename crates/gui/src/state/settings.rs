//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// What a commit click does when the pointer cannot be projected onto the picking plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMissPolicy {
    /// Ignore the click and keep the face selected
    #[default]
    KeepSelection,
    /// Drop the selection without committing
    CancelSelection,
    /// Commit the last point the preview was able to project
    ReuseLastPreview,
}

impl CommitMissPolicy {
    pub fn all() -> &'static [CommitMissPolicy] {
        &[
            CommitMissPolicy::KeepSelection,
            CommitMissPolicy::CancelSelection,
            CommitMissPolicy::ReuseLastPreview,
        ]
    }
}

/// Extrusion tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionSettings {
    /// Smallest allowed width, height or depth
    pub min_dimension: f64,
    /// Commit behavior on a pick miss
    pub commit_miss: CommitMissPolicy,
    /// Color of the selected face (RGB)
    pub highlight_color: [u8; 3],
}

impl Default for ExtrusionSettings {
    fn default() -> Self {
        Self {
            min_dimension: 0.01,
            commit_miss: CommitMissPolicy::default(),
            highlight_color: [0, 0, 255],
        }
    }
}

impl ExtrusionSettings {
    pub fn highlight_rgb(&self) -> [f32; 3] {
        let c = self.highlight_color;
        [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0]
    }
}

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid cell size
    pub size: f32,
    /// Number of grid lines in each direction from origin
    pub range: i32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 1.0,
            range: 10,
            opacity: 0.6,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Show axes
    pub visible: bool,
    /// Axis line length
    pub length: f32,
    /// Axis line thickness
    pub thickness: f32,
    /// Show axis labels (X, Y, Z)
    pub show_labels: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 5.0,
            thickness: 2.0,
            show_labels: true,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Committed solid color RGB
    pub solid_color: [u8; 3],
    /// Preview solid color RGB
    pub preview_color: [u8; 3],
    /// Preview solid opacity (0.0 - 1.0)
    pub preview_alpha: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            solid_color: [150, 150, 160],
            preview_color: [0, 0, 128],
            preview_alpha: 0.4,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::En,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub extrusion: ExtrusionSettings,
    pub grid: GridSettings,
    pub axes: AxisSettings,
    pub viewport: ViewportSettings,
    pub ui: UiSettings,
}

impl AppSettings {
    /// Location of settings.json in the platform config directory
    pub fn path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "boxtrude", "boxtrude")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring malformed settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Cannot create config dir {}: {e}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Failed to write settings to {}: {e}", path.display());
                } else {
                    tracing::info!("Saved settings to {}", path.display());
                }
            }
            Err(e) => tracing::warn!("Failed to serialize settings: {e}"),
        }
    }
}
