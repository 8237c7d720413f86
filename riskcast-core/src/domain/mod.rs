//! Domain types for the risk/reward engine.

pub mod bar;
pub mod series;

pub use bar::Bar;
pub use series::PriceSeries;

/// Symbol type alias
pub type Symbol = String;
