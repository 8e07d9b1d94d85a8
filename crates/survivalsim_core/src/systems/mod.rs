//! Per-tick passes composed by the world engine.
//!
//! Each pass mutates the bot and food collections it is handed and reports
//! what happened; the engine owns ordering and event bookkeeping.

pub mod biological;
pub mod ecological;
pub mod feeding;
pub mod social;
pub mod stats;
