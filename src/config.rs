//! # Simulation Configuration
//!
//! This module defines the tunable parameters of the simulation core and
//! how they are loaded.
//!
//! ## Sources
//!
//! Configuration comes from a JSON file (see [`SimConfig::from_file`]) with
//! every field optional; missing fields fall back to the built-in defaults.
//! The demo loop uses [`SimConfig::load_or_default`], which logs and falls
//! back rather than failing, since a missing config file is the normal case.
//!
//! ## Runtime Mutability
//!
//! `render_radius` may be changed while the simulation is running; the
//! streaming pass reads it fresh every tick, so the new value takes effect
//! on the next tick without resetting resident chunks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Tunable parameters for the simulation core.
///
/// The defaults reproduce the demo's reference behavior: 16-voxel chunks
/// streamed two chunks out in every direction, standard gravity, and a
/// walking pace that clears a one-block step with a jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Chebyshev distance, in chunks, within which chunks must be resident.
    /// Must be at least 1.
    pub render_radius: i32,
    /// Edge length of a chunk's column grid, in voxels.
    pub chunk_size: i32,
    /// Downward acceleration applied every tick, in voxels per second squared.
    pub gravity: f32,
    /// Horizontal acceleration scale for movement input, in voxels per second squared.
    pub move_speed: f32,
    /// Vertical velocity applied when a grounded player jumps, in voxels per second.
    pub jump_speed: f32,
    /// Per-tick multiplier applied to horizontal velocity to emulate drag.
    pub damping_factor: f32,
    /// Seed for the terrain noise field. Fixed for the lifetime of a world.
    pub noise_seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            render_radius: 2,
            chunk_size: 16,
            gravity: 9.81,
            move_speed: 5.0,
            jump_speed: 5.0,
            damping_factor: 0.9,
            noise_seed: 0,
        }
    }
}

/// Errors that can occur while loading a configuration file.
///
/// This is the only fallible surface in the crate; the simulation core
/// itself never fails (absent voxels, re-requested chunks, and degenerate
/// input are all handled by policy).
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file was read but did not contain valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config file: {}", err),
            ConfigError::Parse(err) => write!(f, "failed to parse config file: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl SimConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    ///
    /// # Returns
    /// The parsed configuration, or a [`ConfigError`] if the file could not
    /// be read or parsed. Fields absent from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration from a JSON file, falling back to defaults.
    ///
    /// A missing or malformed file is logged at `warn` level and the
    /// defaults are used instead; this never fails.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.as_ref().display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Using default config ({}): {}",
                    path.as_ref().display(),
                    err
                );
                SimConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let config = SimConfig::default();
        assert_eq!(config.render_radius, 2);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.jump_speed, 5.0);
        assert_eq!(config.damping_factor, 0.9);
        assert_eq!(config.noise_seed, 0);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "render_radius": 4, "noise_seed": 99 }"#).unwrap();
        assert_eq!(config.render_radius, 4);
        assert_eq!(config.noise_seed, 99);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.damping_factor, 0.9);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result: Result<SimConfig, _> = serde_json::from_str("not json");
        assert!(result.is_err());
    }

    #[test]
    fn load_or_default_survives_missing_file() {
        let config = SimConfig::load_or_default("/nonexistent/voxel-sim.json");
        assert_eq!(config.chunk_size, SimConfig::default().chunk_size);
    }
}
