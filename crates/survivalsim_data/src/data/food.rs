use super::bot::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of nutrient a food item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodKind {
    #[default]
    Plant,
    Meat,
}

impl FoodKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FoodKind::Plant => "plant",
            FoodKind::Meat => "meat",
        }
    }

    #[must_use]
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            FoodKind::Plant => (0, 255, 0),
            FoodKind::Meat => (255, 0, 0),
        }
    }
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown food kind: {0:?}")]
pub struct ParseFoodKindError(pub String);

impl FromStr for FoodKind {
    type Err = ParseFoodKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plant" => Ok(FoodKind::Plant),
            "meat" => Ok(FoodKind::Meat),
            other => Err(ParseFoodKindError(other.to_string())),
        }
    }
}

/// A static resource item. Consumed whole by the first bot that reaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
    /// Nutrient value before diet efficiency is applied.
    pub amount: u32,
}

impl Food {
    #[must_use]
    pub fn new(x: f64, y: f64, kind: FoodKind, amount: u32) -> Self {
        Self {
            position: Position { x, y },
            kind,
            amount,
        }
    }
}
