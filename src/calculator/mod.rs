pub mod cards;
pub mod comparison;
pub mod footprint;

pub use cards::{Emphasis, InfoCard, InfoCards};
pub use comparison::{classify, classify_against, Comparison, Tier, REFERENCE_AVERAGE};
pub use footprint::{compute_footprint, Breakdown, Calculator};
