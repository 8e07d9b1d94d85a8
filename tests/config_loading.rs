use std::io::Write;
use survivalsim_lib::model::config::AppConfig;
use survivalsim_lib::model::world::World;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.world.width, 800);
    assert_eq!(config.world.initial_population, 20);
}

#[test]
fn test_partial_file_overrides_only_given_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[world]\nwidth = 320\nheight = 240\nseed = 5\n\n[ecosystem]\ncorpse_to_meat = true\n"
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.world.width, 320);
    assert_eq!(config.world.height, 240);
    assert_eq!(config.world.seed, Some(5));
    assert!(config.ecosystem.corpse_to_meat);
    assert_eq!(config.metabolism.reproduction_threshold, 100.0);

    let world = World::new(config).unwrap();
    assert_eq!((world.width, world.height), (320, 240));
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ecosystem]\nfood_spawn_rate = 1.5\n").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("spawn rate"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[world\nwidth = ").unwrap();
    assert!(AppConfig::load(file.path()).is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = AppConfig::default();
    config.world.max_food = Some(64);
    config.snapshot_interval = 25;
    let text = config.to_toml().unwrap();
    let back = AppConfig::from_toml(&text).unwrap();
    assert_eq!(back.world.max_food, Some(64));
    assert_eq!(back.snapshot_interval, 25);
    assert_eq!(back.fingerprint(), config.fingerprint());
}

#[test]
fn test_infinite_jitter_is_rejected_before_stepping() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[evolution]\nheading_jitter = inf\n").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Heading jitter"));

    let mut config = AppConfig::default();
    config.evolution.heading_jitter = f64::INFINITY;
    assert!(World::new(config).is_err());
}

#[test]
fn test_extreme_but_valid_config_steps_cleanly() {
    let mut config = AppConfig::default();
    config.world.seed = Some(8);
    config.evolution.heading_jitter = std::f64::consts::TAU;
    config.evolution.max_speed = 1.0e6;
    config.evolution.initial_speed_max = 1.0e6;
    config.evolution.speed_mutation_rate = 1.0;
    config.evolution.speed_mutation_amount = 1.0e6;
    config.metabolism.movement_cost = 0.0;
    config.metabolism.reproduction_threshold = 60.0;
    config.ecosystem.food_spawn_rate = 1.0;

    let mut world = World::new(config).unwrap();
    world.run(50);

    for bot in world.bots() {
        assert!(bot.speed.is_finite());
        assert!(bot.position.x >= 0.0 && bot.position.x < 800.0);
        assert!(bot.position.y >= 0.0 && bot.position.y < 600.0);
    }
}
