//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and population health.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How often `record_tick` emits an info line.
pub const LOG_INTERVAL: u64 = 1000;

/// Metrics collector owned by a world.
pub struct Metrics {
    tick_count: AtomicU64,
    bot_count: AtomicU64,
    food_count: AtomicU64,
    busy_nanos: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("tick_count", &self.tick_count())
            .field("bot_count", &self.bot_count())
            .field("food_count", &self.food_count())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            bot_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, bots: usize, food: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.bot_count.store(bots as u64, Ordering::Relaxed);
        self.food_count.store(food as u64, Ordering::Relaxed);
        self.busy_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % LOG_INTERVAL == 0 {
            tracing::info!(
                tick = tick,
                bots = bots,
                food = food,
                avg_tick_us = self.average_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    /// Adds `amount` to a named counter.
    pub fn add_to_counter(&self, name: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    /// Reads a named counter; unknown counters are zero.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn bot_count(&self) -> u64 {
        self.bot_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    /// Mean time spent inside `step()` across all recorded ticks.
    #[must_use]
    pub fn average_tick(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / ticks)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.average_tick(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(16), 100, 50);
        assert_eq!(metrics.tick_count(), 1);
        assert_eq!(metrics.bot_count(), 100);
        assert_eq!(metrics.food_count(), 50);
        assert_eq!(metrics.average_tick(), Duration::from_millis(16));
    }

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.increment_counter("births");
        metrics.increment_counter("births");
        metrics.add_to_counter("meals", 5);
        metrics.add_to_counter("deaths", 0);
        assert_eq!(metrics.counter("births"), 2);
        assert_eq!(metrics.counter("meals"), 5);
        assert_eq!(metrics.counter("deaths"), 0);
    }
}
