//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field has a default, so a file only needs to
//! list the values it overrides.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags of the host binary (override both)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 800
//! height = 600
//! initial_population = 20
//! seed = 42
//!
//! [metabolism]
//! movement_cost = 0.01
//! reproduction_threshold = 100.0
//!
//! [ecosystem]
//! food_spawn_rate = 0.1
//! ```

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::path::Path;

/// Upper bound for frame pacing, shared by `target_fps` and host overrides.
pub const MAX_TARGET_FPS: u64 = 240;

/// World-level simulation configuration.
///
/// Defines the playing field, the founding population and the capture
/// distance used when bots feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub initial_population: usize,
    pub initial_food: usize,
    /// Upper bound on live food items. `None` means unbounded.
    pub max_food: Option<usize>,
    pub bot_radius: f64,
    pub food_radius: f64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            initial_population: 20,
            initial_food: 40,
            max_food: None,
            bot_radius: 5.0,
            food_radius: 5.0,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Maximum centre-to-centre distance at which a bot can eat.
    #[must_use]
    pub fn capture_radius(&self) -> f64 {
        self.bot_radius + self.food_radius
    }
}

/// Bot energy accounting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    pub initial_energy: f64,
    /// Energy burned per unit of speed per tick.
    pub movement_cost: f64,
    pub reproduction_threshold: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            initial_energy: 50.0,
            movement_cost: 0.01,
            reproduction_threshold: 100.0,
        }
    }
}

/// Heritable traits and how they drift between generations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Half-width of the uniform heading perturbation, in radians.
    pub heading_jitter: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub initial_speed_min: f64,
    pub initial_speed_max: f64,
    pub diet_mutation_rate: f64,
    pub speed_mutation_rate: f64,
    pub speed_mutation_amount: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            heading_jitter: 0.5,
            min_speed: 0.5,
            max_speed: 5.0,
            initial_speed_min: 1.0,
            initial_speed_max: 3.0,
            diet_mutation_rate: 0.1,
            speed_mutation_rate: 0.1,
            speed_mutation_amount: 0.5,
        }
    }
}

impl EvolutionConfig {
    /// Clamps a speed into the allowed range. Non-finite input maps to the minimum.
    #[must_use]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed.is_finite() {
            speed.max(self.min_speed).min(self.max_speed)
        } else {
            self.min_speed
        }
    }
}

/// Food supply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EcosystemConfig {
    /// Per-tick probability that one plant appears.
    pub food_spawn_rate: f64,
    pub food_amount_min: u32,
    pub food_amount_max: u32,
    /// Dead bots leave a meat item where they fell.
    pub corpse_to_meat: bool,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            food_spawn_rate: 0.1,
            food_amount_min: 10,
            food_amount_max: 20,
            corpse_to_meat: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub metabolism: MetabolismConfig,
    pub evolution: EvolutionConfig,
    pub ecosystem: EcosystemConfig,
    pub target_fps: u64,
    /// Emit a `Snapshot` event every N ticks. Zero disables snapshots.
    pub snapshot_interval: u64,
    /// Most events a world holds between drains; older ones are dropped
    /// first. Zero turns event recording off.
    pub event_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            metabolism: MetabolismConfig::default(),
            evolution: EvolutionConfig::default(),
            ecosystem: EcosystemConfig::default(),
            target_fps: 60,
            snapshot_interval: 0,
            event_capacity: 4096,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - World dimensions must be positive and at most 10000
    /// - Every float must be finite
    /// - Radii, costs and energies must be non-negative (threshold and initial energy positive)
    /// - Probabilities must lie in `[0.0, 1.0]`, heading jitter in `[0.0, 2π]`
    /// - Speed ranges must be ordered and nested inside `[min_speed, max_speed]`
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(
            self.world.width <= 10000,
            "World width too large (max 10000)"
        );
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= 10000,
            "World height too large (max 10000)"
        );
        anyhow::ensure!(
            finite_non_negative(self.world.bot_radius)
                && finite_non_negative(self.world.food_radius),
            "Bot and food radii must be finite and non-negative"
        );

        // Metabolism validation
        anyhow::ensure!(
            finite_positive(self.metabolism.initial_energy),
            "Initial energy must be finite and positive"
        );
        anyhow::ensure!(
            finite_non_negative(self.metabolism.movement_cost),
            "Movement cost must be finite and non-negative"
        );
        anyhow::ensure!(
            finite_positive(self.metabolism.reproduction_threshold),
            "Reproduction threshold must be finite and positive"
        );

        // Evolution validation
        let evo = &self.evolution;
        anyhow::ensure!(
            finite_non_negative(evo.heading_jitter) && evo.heading_jitter <= TAU,
            "Heading jitter must be in [0.0, 2π]"
        );
        anyhow::ensure!(
            finite_positive(evo.min_speed) && evo.max_speed.is_finite(),
            "Speeds must be finite and the minimum positive"
        );
        anyhow::ensure!(
            evo.min_speed <= evo.max_speed,
            "Minimum speed must not exceed maximum speed"
        );
        anyhow::ensure!(
            evo.initial_speed_min <= evo.initial_speed_max,
            "Initial speed range is inverted"
        );
        anyhow::ensure!(
            evo.initial_speed_min >= evo.min_speed && evo.initial_speed_max <= evo.max_speed,
            "Initial speed range must lie within [min_speed, max_speed]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&evo.diet_mutation_rate),
            "Diet mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&evo.speed_mutation_rate),
            "Speed mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            finite_non_negative(evo.speed_mutation_amount)
                && evo.speed_mutation_amount <= evo.max_speed,
            "Speed mutation amount must be finite, non-negative and at most max_speed"
        );

        // Ecosystem validation
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.ecosystem.food_spawn_rate),
            "Food spawn rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.ecosystem.food_amount_min <= self.ecosystem.food_amount_max,
            "Food amount range is inverted"
        );

        // Target FPS validation
        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(
            self.target_fps <= MAX_TARGET_FPS,
            "Target FPS too high (max {MAX_TARGET_FPS})"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config
            .validate()
            .map_err(|e| SimError::invalid(e.to_string()))?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| e.with_context(format!("loading {}", path.display())))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Short hash identifying the rule set, independent of world size and seed.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.ecosystem).as_bytes());
        hasher.update(
            format!("{:?}", (self.world.bot_radius, self.world.food_radius)).as_bytes(),
        );
        hex::encode(hasher.finalize())
    }
}

fn finite_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
