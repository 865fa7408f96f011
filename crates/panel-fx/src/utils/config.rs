//! Configuration file management.
//!
//! Handles loading effect tuning from `~/.panel-fx.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use panel_fx_api::RgbFFI;

use crate::field::EnergyBand;

const CONFIG_TEMPLATE: &str = r#"# panel-fx configuration file

# Maximum live sources per effect (default: 1)
# capacity = 1

# Source lifetime in ticks (default: 5)
# source_lifetime = 5

# Radial expansion speed in layout units per second (default: 1000)
# expansion_speed = 1000.0

# Travel speed for drifting sources (default: 400)
# drift_speed = 400.0

# Shell hit tolerance in layout units (default: 50)
# shell_thickness = 50.0

# Additive brightness falloff radius (default: 150)
# falloff_radius = 150.0

# Fade-to-black transition in tenths of a second (default: 3)
# fade_transition = 3

# Color spawned on beats, [r, g, b]
# beat_color = [255, 255, 255]

# Energy bands for band-triggered effects: rows of min/max/color.
# Bands are half-open; a reading equal to max falls in the next band up.
#
# [[energy_bands]]
# min = 500
# max = 700
# color = [0, 180, 255]
#
# [[energy_bands]]
# min = 700
# max = 1200
# color = [255, 0, 200]
"#;

/// One energy band row in the config file
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct EnergyBandRow {
    pub min: u32,
    pub max: u32,
    pub color: [u8; 3],
}

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub capacity: Option<usize>,
    pub source_lifetime: Option<i32>,
    pub expansion_speed: Option<f32>,
    pub drift_speed: Option<f32>,
    pub shell_thickness: Option<f32>,
    pub falloff_radius: Option<f32>,
    pub fade_transition: Option<u16>,
    pub beat_color: Option<[u8; 3]>,
    pub energy_bands: Option<Vec<EnergyBandRow>>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".panel-fx.toml"))
    }

    pub fn load() -> Self {
        let path = match Self::path() {
            Some(p) => p,
            None => return Self::default(),
        };

        // Create template file if it doesn't exist
        if !path.exists() {
            let _ = fs::write(&path, CONFIG_TEMPLATE);
            println!("Created config template at {:?}", path);
        }

        fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(1)
    }

    pub fn source_lifetime(&self) -> i32 {
        self.source_lifetime.unwrap_or(5)
    }

    pub fn expansion_speed(&self) -> f32 {
        self.expansion_speed.unwrap_or(1000.0)
    }

    pub fn drift_speed(&self) -> f32 {
        self.drift_speed.unwrap_or(400.0)
    }

    pub fn shell_thickness(&self) -> f32 {
        self.shell_thickness.unwrap_or(50.0)
    }

    pub fn falloff_radius(&self) -> f32 {
        self.falloff_radius.unwrap_or(150.0)
    }

    pub fn fade_transition(&self) -> u16 {
        self.fade_transition.unwrap_or(3)
    }

    pub fn beat_color(&self) -> RgbFFI {
        let [r, g, b] = self.beat_color.unwrap_or([255, 255, 255]);
        RgbFFI::rgb(r, g, b)
    }

    /// Band table with defaults when the file configures none.
    pub fn energy_bands(&self) -> Vec<EnergyBand> {
        self.energy_bands
            .clone()
            .unwrap_or_else(default_bands)
            .iter()
            .map(|row| EnergyBand {
                min: row.min,
                max: row.max,
                color: RgbFFI::rgb(row.color[0], row.color[1], row.color[2]),
            })
            .collect()
    }
}

fn default_bands() -> Vec<EnergyBandRow> {
    vec![
        EnergyBandRow {
            min: 500,
            max: 700,
            color: [0, 180, 255],
        },
        EnergyBandRow {
            min: 700,
            max: 1200,
            color: [255, 0, 200],
        },
    ]
}
