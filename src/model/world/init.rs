use crate::model::world::World;
use rand::SeedableRng;
use std::collections::VecDeque;
use rand_chacha::ChaCha8Rng;
use survivalsim_core::config::AppConfig;
use survivalsim_core::lifecycle;
use survivalsim_core::Metrics;
use survivalsim_data::{FoodKind, PopulationStats};

impl World {
    /// Builds a world from `config`, seeding the random source from
    /// `config.world.seed` or from OS entropy when no seed is set.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Builds a world with explicit field size and starting populations,
    /// overriding those values in `config`.
    pub fn initialize(
        width: u16,
        height: u16,
        num_bots: usize,
        num_food: usize,
        mut config: AppConfig,
    ) -> anyhow::Result<Self> {
        config.world.width = width;
        config.world.height = height;
        config.world.initial_population = num_bots;
        config.world.initial_food = num_food;
        Self::new(config)
    }

    /// Builds a world drawing all randomness from `rng`.
    pub fn with_rng(config: AppConfig, mut rng: ChaCha8Rng) -> anyhow::Result<Self> {
        config.validate()?;

        let bots = (0..config.world.initial_population)
            .map(|_| lifecycle::create_random_bot(&config, 0, &mut rng))
            .collect();
        let foods = (0..config.world.initial_food)
            .map(|_| lifecycle::spawn_random_food(FoodKind::Plant, &config, &mut rng))
            .collect();

        let fingerprint = config.fingerprint();
        tracing::info!(
            width = config.world.width,
            height = config.world.height,
            bots = config.world.initial_population,
            food = config.world.initial_food,
            seed = ?config.world.seed,
            fingerprint = %&fingerprint[..12],
            "World created"
        );

        let mut world = Self {
            width: config.world.width,
            height: config.world.height,
            tick: 0,
            bots,
            foods,
            config,
            pop_stats: PopulationStats::default(),
            metrics: Metrics::new(),
            rng,
            pending_events: VecDeque::new(),
        };
        world.refresh_stats();
        Ok(world)
    }
}
