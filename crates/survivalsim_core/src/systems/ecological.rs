use crate::config::AppConfig;
use crate::lifecycle;
use rand::Rng;
use survivalsim_data::{Bot, Food, FoodKind};

/// Rolls the per-tick spawn chance and adds at most one plant.
///
/// Returns `true` when a plant was added.
pub fn spawn_food_pass<R: Rng>(foods: &mut Vec<Food>, config: &AppConfig, rng: &mut R) -> bool {
    if let Some(max) = config.world.max_food {
        if foods.len() >= max {
            return false;
        }
    }
    if !rng.gen_bool(config.ecosystem.food_spawn_rate) {
        return false;
    }
    foods.push(lifecycle::spawn_random_food(FoodKind::Plant, config, rng));
    true
}

/// Meat left behind by a dead bot, if the ecosystem recycles corpses.
pub fn corpse_food<R: Rng>(bot: &Bot, config: &AppConfig, rng: &mut R) -> Option<Food> {
    if !config.ecosystem.corpse_to_meat {
        return None;
    }
    Some(lifecycle::spawn_food_with_rng(
        bot.position.x,
        bot.position.y,
        FoodKind::Meat,
        config,
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use survivalsim_data::Diet;

    #[test]
    fn test_spawn_rate_one_always_spawns_plants() {
        let mut config = AppConfig::default();
        config.ecosystem.food_spawn_rate = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut foods = Vec::new();
        for _ in 0..10 {
            assert!(spawn_food_pass(&mut foods, &config, &mut rng));
        }
        assert_eq!(foods.len(), 10);
        assert!(foods.iter().all(|f| f.kind == FoodKind::Plant));
    }

    #[test]
    fn test_spawn_rate_zero_never_spawns() {
        let mut config = AppConfig::default();
        config.ecosystem.food_spawn_rate = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut foods = Vec::new();
        for _ in 0..100 {
            spawn_food_pass(&mut foods, &config, &mut rng);
        }
        assert!(foods.is_empty());
    }

    #[test]
    fn test_spawn_respects_max_food() {
        let mut config = AppConfig::default();
        config.ecosystem.food_spawn_rate = 1.0;
        config.world.max_food = Some(3);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut foods = Vec::new();
        for _ in 0..10 {
            spawn_food_pass(&mut foods, &config, &mut rng);
        }
        assert_eq!(foods.len(), 3);
    }

    #[test]
    fn test_corpse_food_toggle() {
        let mut config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let bot = lifecycle::create_bot_with_rng(3.0, 4.0, Diet::Herbivore, &config, 0, &mut rng);
        assert!(corpse_food(&bot, &config, &mut rng).is_none());

        config.ecosystem.corpse_to_meat = true;
        let meat = corpse_food(&bot, &config, &mut rng).unwrap();
        assert_eq!(meat.kind, FoodKind::Meat);
        assert_eq!(meat.position, bot.position);
    }
}
