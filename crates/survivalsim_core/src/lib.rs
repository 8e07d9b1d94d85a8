//! # SurvivalSim Core
//!
//! Rules of the SurvivalSim population model: bots wander a wrap-around
//! field, eat food with diet-dependent efficiency, and split in two when they
//! have stored enough energy.
//!
//! This crate contains:
//! - Bot behaviour (`BotLogic`) on the plain data types from `survivalsim_data`
//! - Strongly-typed configuration with TOML loading and validation
//! - Constructors for founders and food (`lifecycle`)
//! - The per-tick passes (spawning, movement, feeding, reproduction, stats)
//! - Metrics collection and structured logging
//!
//! All randomness is drawn from a caller-supplied `Rng`, so a seeded
//! `ChaCha8Rng` reproduces a run exactly.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use survivalsim_core::config::AppConfig;
//! use survivalsim_core::lifecycle;
//! use survivalsim_core::BotLogic;
//! use survivalsim_data::{Diet, FoodKind};
//!
//! let config = AppConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut bot = lifecycle::create_bot_with_rng(10.0, 10.0, Diet::Herbivore, &config, 0, &mut rng);
//!
//! bot.move_forward(&config, &mut rng);
//! assert!(bot.eat(10, FoodKind::Plant));
//! assert!(bot.energy > 50.0);
//! ```

/// Bot behaviour trait
pub mod bot;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for configuration and I/O
pub mod error;
/// Bot and food construction
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Per-tick simulation passes
pub mod systems;
/// Wrap-around geometry
pub mod torus;

pub use bot::BotLogic;
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
