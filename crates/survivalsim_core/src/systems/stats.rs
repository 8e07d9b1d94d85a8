use survivalsim_data::{Bot, Diet, Food, FoodKind, PopulationStats};

pub struct StatsContext<'a> {
    pub stats: &'a mut PopulationStats,
    pub bots: &'a [Bot],
    pub foods: &'a [Food],
    pub tick: u64,
}

/// Recomputes the per-tick figures. Cumulative counters are left untouched.
pub fn update_population_stats(ctx: StatsContext) {
    let stats = ctx.stats;
    stats.tick = ctx.tick;
    stats.population = ctx.bots.len();
    stats.food_count = ctx.foods.len();
    stats.herbivores = 0;
    stats.omnivores = 0;
    stats.carnivores = 0;
    stats.plant_food = 0;
    stats.meat_food = 0;
    stats.avg_energy = 0.0;
    stats.avg_speed = 0.0;
    stats.max_generation = 0;

    for food in ctx.foods {
        match food.kind {
            FoodKind::Plant => stats.plant_food += 1,
            FoodKind::Meat => stats.meat_food += 1,
        }
    }

    if ctx.bots.is_empty() {
        return;
    }

    let mut energy = 0.0;
    let mut speed = 0.0;
    for bot in ctx.bots {
        match bot.diet {
            Diet::Herbivore => stats.herbivores += 1,
            Diet::Omnivore => stats.omnivores += 1,
            Diet::Carnivore => stats.carnivores += 1,
        }
        energy += bot.energy;
        speed += bot.speed;
        stats.max_generation = stats.max_generation.max(bot.generation);
    }
    let n = ctx.bots.len() as f64;
    stats.avg_energy = energy / n;
    stats.avg_speed = speed / n;
}
