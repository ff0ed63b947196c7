pub mod chart;
pub mod config;
pub mod presets;
pub mod set;
pub mod share;
