use crate::model::world::World;
use chrono::Utc;
use std::time::Instant;
use survivalsim_core::systems::ecological;
use survivalsim_core::systems::feeding::Meal;
use survivalsim_data::{Bot, LiveEvent};

impl World {
    pub(crate) fn record_meals(&mut self, meals: Vec<Meal>) {
        if meals.is_empty() {
            return;
        }
        let tick = self.tick;
        let timestamp = Utc::now().to_rfc3339();
        self.pop_stats.meals += meals.len() as u64;
        self.metrics.add_to_counter("meals", meals.len() as u64);
        for meal in meals {
            self.emit(LiveEvent::Meal {
                bot_id: meal.bot_id,
                kind: meal.kind,
                amount: meal.amount,
                gained: meal.gained,
                tick,
                timestamp: timestamp.clone(),
            });
        }
    }

    /// Adds offspring, removes the dead and refreshes statistics.
    pub(crate) fn finalize_tick(
        &mut self,
        offspring: Vec<Bot>,
        population_before: usize,
        started: Instant,
    ) {
        let tick = self.tick;
        let timestamp = Utc::now().to_rfc3339();

        self.pop_stats.births += offspring.len() as u64;
        self.metrics
            .add_to_counter("births", offspring.len() as u64);
        for child in &offspring {
            tracing::trace!(id = %child.id, diet = %child.diet, gen = child.generation, "Birth");
            self.emit(LiveEvent::Birth {
                id: child.id,
                parent_id: child.parent_id,
                gen: child.generation,
                diet: child.diet,
                tick,
                timestamp: timestamp.clone(),
            });
        }
        self.bots.extend(offspring);

        let (living, dead): (Vec<Bot>, Vec<Bot>) = std::mem::take(&mut self.bots)
            .into_iter()
            .partition(Bot::is_active);
        self.bots = living;

        self.pop_stats.deaths += dead.len() as u64;
        self.metrics.add_to_counter("deaths", dead.len() as u64);
        for corpse in &dead {
            self.bury(corpse, tick, &timestamp);
        }

        self.refresh_stats();
        self.metrics
            .record_tick(started.elapsed(), self.bots.len(), self.foods.len());

        if population_before > 0 && self.bots.is_empty() {
            tracing::warn!(tick, "Population extinct");
            self.emit(LiveEvent::Extinction {
                tick,
                timestamp: timestamp.clone(),
            });
        }

        let interval = self.config.snapshot_interval;
        if interval > 0 && tick % interval == 0 {
            self.emit(LiveEvent::Snapshot {
                stats: self.pop_stats.clone(),
                tick,
                timestamp,
            });
        }
    }

    fn bury(&mut self, corpse: &Bot, tick: u64, timestamp: &str) {
        let cause = if corpse.energy <= 0.0 {
            "starvation"
        } else {
            "expired"
        };
        tracing::debug!(id = %corpse.id, cause, age = corpse.age(tick), "Death");
        self.emit(LiveEvent::Death {
            id: corpse.id,
            age: corpse.age(tick),
            generation: corpse.generation,
            cause: cause.to_string(),
            tick,
            timestamp: timestamp.to_string(),
            x: corpse.position.x,
            y: corpse.position.y,
        });

        let room = self
            .config
            .world
            .max_food
            .map_or(true, |max| self.foods.len() < max);
        if room {
            if let Some(meat) = ecological::corpse_food(corpse, &self.config, &mut self.rng) {
                self.foods.push(meat);
            }
        }
    }
}
