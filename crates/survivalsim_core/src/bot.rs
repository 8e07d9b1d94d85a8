//! Bot behaviour: wandering, feeding, reproduction and death.

use crate::config::AppConfig;
use crate::lifecycle;
use crate::torus;
use rand::Rng;
use std::f64::consts::TAU;
use survivalsim_data::{Bot, FoodKind};
use uuid::Uuid;

/// Behaviour attached to the plain [`Bot`] data type.
pub trait BotLogic {
    /// Perturbs the heading, advances one step along it with wraparound and
    /// pays the movement cost. Dead bots do nothing. An out-of-range speed is
    /// clamped first, so movement never pays back energy.
    fn move_forward<R: Rng>(&mut self, config: &AppConfig, rng: &mut R);

    /// Consumes a whole food item. Returns `false` only when the bot is dead.
    fn eat(&mut self, amount: u32, kind: FoodKind) -> bool;

    /// Splits off one offspring when energy exceeds the reproduction threshold.
    fn reproduce<R: Rng>(&mut self, config: &AppConfig, tick: u64, rng: &mut R) -> Option<Bot>;

    /// Marks the bot dead. Idempotent.
    fn die(&mut self);
}

impl BotLogic for Bot {
    fn move_forward<R: Rng>(&mut self, config: &AppConfig, rng: &mut R) {
        if !self.alive {
            return;
        }
        self.speed = config.evolution.clamp_speed(self.speed);

        let jitter = config.evolution.heading_jitter;
        if jitter > 0.0 {
            self.heading += rng.gen_range(-jitter..=jitter);
        }
        self.heading = self.heading.rem_euclid(TAU);

        let width = f64::from(config.world.width);
        let height = f64::from(config.world.height);
        self.position.x = torus::wrap(self.position.x + self.heading.cos() * self.speed, width);
        self.position.y = torus::wrap(self.position.y + self.heading.sin() * self.speed, height);

        self.energy -= config.metabolism.movement_cost * self.speed;
        if self.energy <= 0.0 {
            self.die();
        }
    }

    fn eat(&mut self, amount: u32, kind: FoodKind) -> bool {
        if !self.alive {
            return false;
        }
        self.energy += f64::from(amount) * self.diet.efficiency(kind);
        true
    }

    fn reproduce<R: Rng>(&mut self, config: &AppConfig, tick: u64, rng: &mut R) -> Option<Bot> {
        if self.energy <= config.metabolism.reproduction_threshold {
            return None;
        }

        let evo = &config.evolution;
        let mut diet = self.diet;
        let mut speed = self.speed;
        if rng.gen_bool(evo.diet_mutation_rate) {
            diet = lifecycle::random_diet(rng);
        }
        if rng.gen_bool(evo.speed_mutation_rate) {
            let amount = evo.speed_mutation_amount;
            let noise = if amount > 0.0 {
                rng.gen_range(-amount..=amount)
            } else {
                0.0
            };
            speed = evo.clamp_speed(self.speed + noise);
        }

        self.energy /= 2.0;

        Some(Bot {
            id: Uuid::from_u128(rng.gen::<u128>()),
            parent_id: Some(self.id),
            position: self.position,
            heading: rng.gen_range(0.0..TAU),
            speed,
            diet,
            energy: self.energy,
            alive: true,
            generation: self.generation + 1,
            birth_tick: tick,
        })
    }

    fn die(&mut self) {
        self.alive = false;
    }
}
