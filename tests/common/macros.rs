/// Asserts that the bot with the given ID has energy within `1e-9` of `expected`.
#[macro_export]
macro_rules! assert_energy_near {
    ($world:expr, $id:expr, $expected:expr) => {
        let bot = $world.find_bot($id).expect("Bot not found in world");
        assert!(
            (bot.energy - $expected).abs() < 1e-9,
            "Bot {} energy {} is not {}",
            $id,
            bot.energy,
            $expected
        );
    };
}

/// Asserts that a bot with the given ID is NOT present in the world (dead/culled).
#[macro_export]
macro_rules! assert_bot_absent {
    ($world:expr, $id:expr) => {
        assert!(
            $world.find_bot($id).is_none(),
            "Bot {} should be gone but was found",
            $id
        );
    };
}

/// Asserts that the bot count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.bot_count(), $count, "Population count mismatch");
    };
}
