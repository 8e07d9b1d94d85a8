pub mod macros;

use rand::SeedableRng;
use survivalsim_lib::model::config::AppConfig;
use survivalsim_lib::model::lifecycle;
use survivalsim_lib::model::state::{Bot, Diet, Food, FoodKind};
use survivalsim_lib::model::world::World;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    bots: Vec<Bot>,
    foods: Vec<Food>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// Empty, seeded world with no spontaneous food.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_population = 0;
        config.world.initial_food = 0;
        config.world.seed = Some(1234);
        config.ecosystem.food_spawn_rate = 0.0;
        Self {
            config,
            bots: Vec::new(),
            foods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_bot(mut self, bot: Bot) -> Self {
        self.bots.push(bot);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, kind: FoodKind, amount: u32) -> Self {
        self.foods.push(Food::new(x, y, kind, amount));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for food in self.foods {
            world.spawn_food(food);
        }
        for bot in self.bots {
            world.spawn_bot(bot);
        }
        world
    }
}

#[allow(dead_code)]
pub struct BotBuilder {
    x: f64,
    y: f64,
    diet: Diet,
    energy: f64,
    speed: Option<f64>,
    heading: Option<f64>,
    generation: u32,
}

#[allow(dead_code)]
impl BotBuilder {
    pub fn new() -> Self {
        Self {
            x: 10.0,
            y: 10.0,
            diet: Diet::Omnivore,
            energy: 50.0,
            speed: None,
            heading: None,
            generation: 0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    pub fn energy(mut self, amount: f64) -> Self {
        self.energy = amount;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    pub fn build(self) -> Bot {
        // Seed from the position so every test bot is reproducible.
        let seed = (self.x.to_bits() ^ self.y.to_bits()).wrapping_mul(0x517CC1B727220A95);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let config = AppConfig::default();
        let mut bot = lifecycle::create_bot_with_rng(self.x, self.y, self.diet, &config, 0, &mut rng);
        bot.energy = self.energy;
        bot.generation = self.generation;
        if let Some(speed) = self.speed {
            bot.speed = config.evolution.clamp_speed(speed);
        }
        if let Some(heading) = self.heading {
            bot.heading = heading;
        }
        bot
    }
}
