use super::bot::Diet;
use super::food::FoodKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate population figures for the status overlay and reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub tick: u64,
    pub population: usize,
    pub food_count: usize,
    pub herbivores: usize,
    pub omnivores: usize,
    pub carnivores: usize,
    pub plant_food: usize,
    pub meat_food: usize,
    pub avg_energy: f64,
    pub avg_speed: f64,
    pub max_generation: u32,
    /// Cumulative births since the world was created.
    pub births: u64,
    /// Cumulative deaths since the world was created.
    pub deaths: u64,
    /// Cumulative food items consumed.
    pub meals: u64,
}

/// Tagged union of simulation events emitted during a tick.
///
/// Serialised with `#[serde(tag = "event")]` for streaming JSONL output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: Uuid,
        parent_id: Option<Uuid>,
        gen: u32,
        diet: Diet,
        tick: u64,
        timestamp: String,
    },
    Death {
        id: Uuid,
        age: u64,
        generation: u32,
        cause: String,
        tick: u64,
        timestamp: String,
        x: f64,
        y: f64,
    },
    Meal {
        bot_id: Uuid,
        kind: FoodKind,
        amount: u32,
        gained: f64,
        tick: u64,
        timestamp: String,
    },
    /// The last bot died.
    Extinction { tick: u64, timestamp: String },
    Snapshot {
        stats: PopulationStats,
        tick: u64,
        timestamp: String,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            LiveEvent::Birth { tick, .. }
            | LiveEvent::Death { tick, .. }
            | LiveEvent::Meal { tick, .. }
            | LiveEvent::Extinction { tick, .. }
            | LiveEvent::Snapshot { tick, .. } => *tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagged_json() {
        let event = LiveEvent::Extinction {
            tick: 7,
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"Extinction\""));
        assert_eq!(event.tick(), 7);
    }
}
