use crate::model::world::World;
use std::time::Instant;
use survivalsim_core::systems::{biological, ecological, feeding, social};

impl World {
    /// Advances the simulation by one tick.
    ///
    /// In order: maybe spawn one plant, move every living bot, let each
    /// living bot eat at most one reachable food item, collect offspring from
    /// bots above the reproduction threshold, then add the offspring and
    /// drop every dead or exhausted bot.
    ///
    /// Events produced along the way are buffered; see [`World::drain_events`].
    pub fn step(&mut self) {
        let started = Instant::now();
        self.tick += 1;
        let tick = self.tick;
        let population_before = self.bots.len();

        if ecological::spawn_food_pass(&mut self.foods, &self.config, &mut self.rng) {
            tracing::trace!(tick, food = self.foods.len(), "Plant spawned");
        }

        let exhausted = biological::movement_pass(&mut self.bots, &self.config, &mut self.rng);
        if exhausted > 0 {
            tracing::debug!(tick, exhausted, "Bots ran out of energy");
        }

        let meals = feeding::feeding_pass(&mut self.bots, &mut self.foods, &self.config);
        self.record_meals(meals);

        let offspring =
            social::reproduction_pass(&mut self.bots, &self.config, tick, &mut self.rng);

        self.finalize_tick(offspring, population_before, started);
    }

    /// Runs `ticks` steps back to back.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }
}
