pub use survivalsim_core::BotLogic;
pub mod bot {
    pub use survivalsim_core::bot::*;
}
pub mod config {
    pub use survivalsim_core::config::*;
}
pub mod lifecycle {
    pub use survivalsim_core::lifecycle::*;
}
pub mod metrics {
    pub use survivalsim_core::metrics::*;
}
pub mod torus {
    pub use survivalsim_core::torus::*;
}
pub mod systems {
    pub use survivalsim_core::systems::*;
}

pub mod history;
pub mod world;

pub mod state {
    pub use survivalsim_data::*;
}
