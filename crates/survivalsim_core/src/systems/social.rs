use crate::bot::BotLogic;
use crate::config::AppConfig;
use rand::Rng;
use survivalsim_data::Bot;

/// Offers every living bot a chance to reproduce and collects the offspring.
///
/// Offspring are returned rather than appended so the caller controls when
/// they join the population.
pub fn reproduction_pass<R: Rng>(
    bots: &mut [Bot],
    config: &AppConfig,
    tick: u64,
    rng: &mut R,
) -> Vec<Bot> {
    bots.iter_mut()
        .filter(|b| b.alive)
        .filter_map(|b| b.reproduce(config, tick, rng))
        .collect()
}
