//! Core data structures for the SurvivalSim simulation.

pub mod bot;
pub mod environment;
pub mod food;
