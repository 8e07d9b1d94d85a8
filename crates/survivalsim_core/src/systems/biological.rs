use crate::bot::BotLogic;
use crate::config::AppConfig;
use rand::Rng;
use survivalsim_data::Bot;

/// Moves every living bot one step. Returns how many bots died of exhaustion.
pub fn movement_pass<R: Rng>(bots: &mut [Bot], config: &AppConfig, rng: &mut R) -> usize {
    let mut exhausted = 0;
    for bot in bots.iter_mut().filter(|b| b.alive) {
        bot.move_forward(config, rng);
        if !bot.alive {
            exhausted += 1;
        }
    }
    exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::create_bot_with_rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use survivalsim_data::Diet;

    #[test]
    fn test_movement_pass_skips_dead_and_counts_exhausted() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut healthy = create_bot_with_rng(10.0, 10.0, Diet::Herbivore, &config, 0, &mut rng);
        healthy.energy = 40.0;
        let mut fading = create_bot_with_rng(20.0, 20.0, Diet::Omnivore, &config, 0, &mut rng);
        fading.energy = 0.001;
        let mut corpse = create_bot_with_rng(30.0, 30.0, Diet::Carnivore, &config, 0, &mut rng);
        corpse.die();
        let corpse_pos = corpse.position;

        let mut bots = vec![healthy, fading, corpse];
        assert_eq!(movement_pass(&mut bots, &config, &mut rng), 1);
        assert!(bots[0].alive);
        assert!(!bots[1].alive);
        assert_eq!(bots[2].position, corpse_pos);
    }
}
