use crate::bot::BotLogic;
use crate::config::AppConfig;
use survivalsim_data::{Bot, Food, FoodKind};
use uuid::Uuid;

/// One food item consumed during the feeding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub bot_id: Uuid,
    pub kind: FoodKind,
    pub amount: u32,
    /// Energy actually gained after diet efficiency.
    pub gained: f64,
}

/// Lets each living bot eat the first reachable food item.
///
/// Foods are scanned in collection order; an item claimed earlier in the pass
/// is invisible to later bots. Claimed items are removed once the pass ends.
pub fn feeding_pass(bots: &mut [Bot], foods: &mut Vec<Food>, config: &AppConfig) -> Vec<Meal> {
    let reach = config.world.capture_radius();
    let reach_sq = reach * reach;

    let mut eaten = vec![false; foods.len()];
    let mut meals = Vec::new();

    for bot in bots.iter_mut().filter(|b| b.alive) {
        let pos = bot.position;
        let target = (0..foods.len()).find(|&idx| {
            !eaten[idx] && pos.distance_sq(foods[idx].position) < reach_sq
        });

        let Some(idx) = target else {
            continue;
        };
        let food = &foods[idx];
        let before = bot.energy;
        if bot.eat(food.amount, food.kind) {
            eaten[idx] = true;
            meals.push(Meal {
                bot_id: bot.id,
                kind: food.kind,
                amount: food.amount,
                gained: bot.energy - before,
            });
        }
    }

    if !meals.is_empty() {
        let mut idx = 0;
        foods.retain(|_| {
            let keep = !eaten[idx];
            idx += 1;
            keep
        });
    }
    meals
}
