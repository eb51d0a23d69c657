pub mod charts;
pub mod factors;

pub use crate::error::ConfigError;
pub use charts::{category_color, ReferenceChart, Rgb, REFERENCE_CHARTS};
pub use factors::{
    Averages, DietEnergyFactors, EnergyConfig, EnergyFactors, HomeEnergyFactors,
    DEFAULT_DIET_ENERGY, MAX_FACTOR, MIN_REFERENCE_AVERAGE, NEUTRAL_MULTIPLIER,
};
