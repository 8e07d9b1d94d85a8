use super::food::FoodKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// World position on the toroidal field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared straight-line distance. Does not wrap across field edges.
    #[must_use]
    pub fn distance_sq(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Dietary specialization of a bot.
///
/// The numeric specialization (`0.0`, `0.5`, `1.0`) is kept only as a
/// presentation value; all behaviour dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Herbivore,
    Omnivore,
    Carnivore,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Herbivore, Diet::Omnivore, Diet::Carnivore];

    /// Numeric specialization on the herbivore (0.0) to carnivore (1.0) axis.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Diet::Herbivore => 0.0,
            Diet::Omnivore => 0.5,
            Diet::Carnivore => 1.0,
        }
    }

    /// Maps a numeric specialization back to its variant.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| (d.value() - value).abs() < f64::EPSILON)
    }

    /// Fraction of a food item's nutrients this diet can extract.
    #[must_use]
    pub fn efficiency(self, kind: FoodKind) -> f64 {
        match (self, kind) {
            (Diet::Herbivore, FoodKind::Plant) => 1.0,
            (Diet::Carnivore, FoodKind::Meat) => 1.0,
            (Diet::Omnivore, _) => 0.7,
            _ => 0.2,
        }
    }

    /// Render colour used by hosts.
    #[must_use]
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Diet::Herbivore => (0, 0, 255),
            Diet::Omnivore => (128, 0, 128),
            Diet::Carnivore => (255, 0, 0),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
            Diet::Carnivore => "carnivore",
        };
        f.write_str(name)
    }
}

/// A wandering agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: Position,
    /// Heading in radians.
    pub heading: f64,
    pub speed: f64,
    pub diet: Diet,
    pub energy: f64,
    pub alive: bool,
    pub generation: u32,
    pub birth_tick: u64,
}

impl Bot {
    /// Whether the bot may still act this tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive && self.energy > 0.0
    }

    #[must_use]
    pub fn age(&self, current_tick: u64) -> u64 {
        current_tick.saturating_sub(self.birth_tick)
    }
}
