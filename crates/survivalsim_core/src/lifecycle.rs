use crate::config::AppConfig;
use rand::Rng;
use std::f64::consts::TAU;
use survivalsim_data::{Bot, Diet, Food, FoodKind, Position};
use uuid::Uuid;

/// Picks one of the three diets with equal probability.
pub fn random_diet<R: Rng>(rng: &mut R) -> Diet {
    Diet::ALL[rng.gen_range(0..Diet::ALL.len())]
}

/// Uniformly random point on the field.
pub fn random_position<R: Rng>(config: &AppConfig, rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(0.0..f64::from(config.world.width)),
        y: rng.gen_range(0.0..f64::from(config.world.height)),
    }
}

/// Creates a founder bot with a random heading and an initial speed drawn
/// from the configured starting range.
pub fn create_bot_with_rng<R: Rng>(
    x: f64,
    y: f64,
    diet: Diet,
    config: &AppConfig,
    tick: u64,
    rng: &mut R,
) -> Bot {
    let evo = &config.evolution;
    let speed = if evo.initial_speed_min < evo.initial_speed_max {
        rng.gen_range(evo.initial_speed_min..=evo.initial_speed_max)
    } else {
        evo.initial_speed_min
    };
    Bot {
        id: Uuid::from_u128(rng.gen::<u128>()),
        parent_id: None,
        position: Position { x, y },
        heading: rng.gen_range(0.0..TAU),
        speed: evo.clamp_speed(speed),
        diet,
        energy: config.metabolism.initial_energy,
        alive: true,
        generation: 0,
        birth_tick: tick,
    }
}

pub fn create_bot(x: f64, y: f64, diet: Diet, config: &AppConfig) -> Bot {
    let mut rng = rand::thread_rng();
    create_bot_with_rng(x, y, diet, config, 0, &mut rng)
}

/// Founder at a random position with a random diet.
pub fn create_random_bot<R: Rng>(config: &AppConfig, tick: u64, rng: &mut R) -> Bot {
    let pos = random_position(config, rng);
    let diet = random_diet(rng);
    create_bot_with_rng(pos.x, pos.y, diet, config, tick, rng)
}

/// Creates a food item whose nutrient amount is drawn from the configured range.
pub fn spawn_food_with_rng<R: Rng>(
    x: f64,
    y: f64,
    kind: FoodKind,
    config: &AppConfig,
    rng: &mut R,
) -> Food {
    let eco = &config.ecosystem;
    let amount = rng.gen_range(eco.food_amount_min..=eco.food_amount_max);
    Food::new(x, y, kind, amount)
}

pub fn spawn_food(x: f64, y: f64, kind: FoodKind, config: &AppConfig) -> Food {
    let mut rng = rand::thread_rng();
    spawn_food_with_rng(x, y, kind, config, &mut rng)
}

/// Food item of `kind` at a random position.
pub fn spawn_random_food<R: Rng>(kind: FoodKind, config: &AppConfig, rng: &mut R) -> Food {
    let pos = random_position(config, rng);
    spawn_food_with_rng(pos.x, pos.y, kind, config, rng)
}
