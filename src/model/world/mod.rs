use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use survivalsim_core::config::AppConfig;
use survivalsim_core::Metrics;
use survivalsim_data::{Bot, Food, LiveEvent, PopulationStats};

pub mod finalize;
pub mod init;
pub mod update;

/// The simulation: every bot and food item, the random source and the
/// bookkeeping that accumulates across ticks.
///
/// A world is advanced with [`World::step`] and read back through the
/// accessors; hosts never hold references into it between steps.
pub struct World {
    pub width: u16,
    pub height: u16,
    pub tick: u64,
    pub bots: Vec<Bot>,
    pub foods: Vec<Food>,
    pub config: AppConfig,
    pub pop_stats: PopulationStats,
    pub metrics: Metrics,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) pending_events: VecDeque<LiveEvent>,
}

impl World {
    #[must_use]
    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    #[must_use]
    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }

    #[must_use]
    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    #[must_use]
    pub fn stats(&self) -> &PopulationStats {
        &self.pop_stats
    }

    /// Text for the host's status overlay.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Bots: {} Food: {}", self.bot_count(), self.food_count())
    }

    #[must_use]
    pub fn find_bot(&self, id: uuid::Uuid) -> Option<&Bot> {
        self.bots.iter().find(|b| b.id == id)
    }

    /// Events emitted since the last drain, oldest first.
    ///
    /// Holds at most `config.event_capacity` events; the oldest are dropped
    /// when a host does not drain.
    #[must_use]
    pub fn pending_events(&self) -> &VecDeque<LiveEvent> {
        &self.pending_events
    }

    pub fn drain_events(&mut self) -> Vec<LiveEvent> {
        self.pending_events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: LiveEvent) {
        let capacity = self.config.event_capacity;
        if capacity == 0 {
            return;
        }
        while self.pending_events.len() >= capacity {
            self.pending_events.pop_front();
        }
        self.pending_events.push_back(event);
    }

    /// Inserts a bot. Its position is wrapped onto the field and its speed
    /// clamped into the configured range.
    pub fn spawn_bot(&mut self, mut bot: Bot) {
        bot.position = self.wrap_position(bot.position);
        bot.speed = self.config.evolution.clamp_speed(bot.speed);
        self.bots.push(bot);
        self.refresh_stats();
    }

    /// Inserts a food item as-is. Its position is wrapped onto the field.
    pub fn spawn_food(&mut self, mut food: Food) {
        food.position = self.wrap_position(food.position);
        self.foods.push(food);
        self.refresh_stats();
    }

    fn wrap_position(&self, pos: survivalsim_data::Position) -> survivalsim_data::Position {
        use survivalsim_core::torus::wrap;
        survivalsim_data::Position {
            x: wrap(pos.x, f64::from(self.width)),
            y: wrap(pos.y, f64::from(self.height)),
        }
    }

    pub(crate) fn refresh_stats(&mut self) {
        survivalsim_core::systems::stats::update_population_stats(
            survivalsim_core::systems::stats::StatsContext {
                stats: &mut self.pop_stats,
                bots: &self.bots,
                foods: &self.foods,
                tick: self.tick,
            },
        );
    }
}
