//! # Energy Footprint
//!
//! A terminal calculator that estimates a person's daily energy use in
//! kWh/day from everyday habits.
//!
//! ## Features
//!
//! - Digital, transport, home and lifestyle subtotals, with AI usage
//!   broken out of the digital total
//! - Comparison against the average American footprint
//! - Reference charts of typical energy use
//! - Export to CSV, JSON or a plain-text report
//!
//! ## Example
//!
//! ```
//! use energy_footprint::calculator::{classify, compute_footprint};
//! use energy_footprint::config::EnergyConfig;
//! use energy_footprint::model::{RawInputs, RawValue};
//!
//! let raw = RawInputs {
//!     car_type: Some("gas".to_string()),
//!     miles_driven: Some(RawValue::from("30")),
//!     ..RawInputs::default()
//! };
//!
//! let result = compute_footprint(&EnergyConfig::default(), &raw.normalize());
//! assert_eq!(result.grand_total, 78.0);
//! println!("{}", classify(result.grand_total, result.ai_subtotal));
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod prefs;
pub mod ui;
