//! Plain data types shared by the simulation core, the world engine and hosts.

pub mod data;

pub use data::bot::{Bot, Diet, Position};
pub use data::environment::{LiveEvent, PopulationStats};
pub use data::food::{Food, FoodKind, ParseFoodKindError};
