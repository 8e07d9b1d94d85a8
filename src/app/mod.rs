//! Headless host: drives a [`World`] once per frame, forwards its events to
//! the history log and prints the status overlay text.

pub mod shutdown;

use crate::model::history::HistoryLogger;
use crate::model::world::World;
use shutdown::ShutdownManager;
use std::time::Duration;
use survivalsim_core::config::MAX_TARGET_FPS;
use survivalsim_data::PopulationStats;
use tokio::time::MissedTickBehavior;

/// How many unpaced ticks run between cooperative yields.
const YIELD_EVERY: u64 = 1024;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many ticks. Zero runs until interrupted.
    pub max_ticks: u64,
    /// Frames per second. Zero steps as fast as possible.
    pub fps: u64,
    /// Print the status line every N ticks. Zero disables it.
    pub report_every: u64,
    pub stop_on_extinction: bool,
}

impl RunOptions {
    /// Rejects a frame rate the pacer cannot honour.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.fps <= MAX_TARGET_FPS,
            "FPS too high (max {MAX_TARGET_FPS}, 0 for unpaced)"
        );
        Ok(())
    }
}

pub struct HeadlessApp {
    pub world: World,
    pub logger: HistoryLogger,
    pub options: RunOptions,
    pub shutdown: ShutdownManager,
}

impl HeadlessApp {
    pub fn new(world: World, logger: HistoryLogger, options: RunOptions) -> Self {
        Self {
            world,
            logger,
            options,
            shutdown: ShutdownManager::new(),
        }
    }

    fn finished(&self) -> bool {
        if self.shutdown.is_shutdown_requested() {
            return true;
        }
        if self.options.max_ticks > 0 && self.world.tick >= self.options.max_ticks {
            return true;
        }
        self.options.stop_on_extinction && self.world.bot_count() == 0
    }

    /// Performs one frame: a single step plus logging and reporting.
    pub fn frame(&mut self) -> anyhow::Result<()> {
        self.world.step();
        let events = self.world.drain_events();
        self.logger.log_events(&events)?;

        let every = self.options.report_every;
        if every > 0 && self.world.tick % every == 0 {
            println!("[tick {}] {}", self.world.tick, self.world.status_line());
        }
        Ok(())
    }

    /// Runs until the tick limit, extinction (if requested) or Ctrl-C.
    pub async fn run(&mut self) -> anyhow::Result<PopulationStats> {
        self.options.validate()?;
        let mut pacer = (self.options.fps > 0).then(|| {
            let mut interval =
                tokio::time::interval(Duration::from_secs_f64(1.0 / self.options.fps as f64));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        tracing::info!(
            max_ticks = self.options.max_ticks,
            fps = self.options.fps,
            "Headless run started"
        );

        while !self.finished() {
            match pacer.as_mut() {
                Some(interval) => {
                    interval.tick().await;
                }
                None if self.world.tick % YIELD_EVERY == 0 => tokio::task::yield_now().await,
                None => {}
            }
            self.frame()?;
        }

        self.logger.flush()?;
        tracing::info!(
            tick = self.world.tick,
            bots = self.world.bot_count(),
            food = self.world.food_count(),
            elapsed_ms = self.world.metrics.elapsed().as_millis() as u64,
            "Headless run finished"
        );
        Ok(self.world.stats().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivalsim_core::config::AppConfig;

    fn app(options: RunOptions) -> HeadlessApp {
        let mut config = AppConfig::default();
        config.world.seed = Some(3);
        let world = World::new(config).unwrap();
        HeadlessApp::new(world, HistoryLogger::new_dummy(), options)
    }

    #[tokio::test]
    async fn test_run_stops_at_tick_limit() {
        let mut app = app(RunOptions {
            max_ticks: 25,
            ..Default::default()
        });
        let stats = app.run().await.unwrap();
        assert_eq!(app.world.tick, 25);
        assert_eq!(stats.tick, 25);
    }

    #[tokio::test]
    async fn test_run_rejects_excessive_fps() {
        let mut app = app(RunOptions {
            fps: 2_000_000_000,
            max_ticks: 5,
            ..Default::default()
        });
        let err = app.run().await.unwrap_err();
        assert!(err.to_string().contains("FPS too high"));
        assert_eq!(app.world.tick, 0);
    }

    #[test]
    fn test_fps_limits() {
        for fps in [0, 1, 60, MAX_TARGET_FPS] {
            assert!(RunOptions { fps, ..Default::default() }.validate().is_ok());
        }
        let over = RunOptions {
            fps: MAX_TARGET_FPS + 1,
            ..Default::default()
        };
        assert!(over.validate().is_err());
    }

    #[tokio::test]
    async fn test_run_honours_shutdown() {
        let mut app = app(RunOptions::default());
        app.shutdown.request_shutdown();
        app.run().await.unwrap();
        assert_eq!(app.world.tick, 0);
    }

    #[tokio::test]
    async fn test_run_stops_on_extinction() {
        let mut config = AppConfig::default();
        config.world.initial_population = 0;
        let world = World::new(config).unwrap();
        let mut app = HeadlessApp::new(
            world,
            HistoryLogger::new_dummy(),
            RunOptions {
                stop_on_extinction: true,
                max_ticks: 1000,
                ..Default::default()
            },
        );
        app.run().await.unwrap();
        assert_eq!(app.world.tick, 0);
    }
}
