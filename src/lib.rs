//! SurvivalSim: a population-dynamics toy where wandering bots with
//! different diets compete for food on a wrap-around field.
//!
//! The rules live in `survivalsim_core`; this crate owns the [`World`]
//! engine that strings them into ticks, the JSONL event log and the
//! headless host used by the `survivalsim` binary.
//!
//! [`World`]: crate::model::world::World

pub mod app;
pub mod model;
