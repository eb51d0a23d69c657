use crate::error::ConfigError;
use crate::model::{Climate, DietType, HomeSize};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Daily food energy used when the diet is not recognized.
pub const DEFAULT_DIET_ENERGY: f64 = 15.0;

/// Multiplier used when a home size or climate is not recognized.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Largest accepted factor. With quantities capped at
/// [`MAX_QUANTITY`](crate::model::MAX_QUANTITY), every subtotal stays finite.
pub const MAX_FACTOR: f64 = 1.0e4;

/// Smallest accepted reference average, in kWh/day.
pub const MIN_REFERENCE_AVERAGE: f64 = 1.0;

/// Per-activity energy rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnergyFactors {
    /// kWh per hour
    pub smartphone: f64,
    /// kWh per hour
    pub computer: f64,
    /// kWh per hour
    pub streaming: f64,
    /// kWh per hour of chat
    pub ai_text: f64,
    /// kWh per generated image
    pub ai_image: f64,
    /// kWh per minute of generated video
    pub ai_video: f64,
    /// kWh per mile
    pub gas_car: f64,
    /// kWh per mile
    pub electric_car: f64,
    /// kWh per mile
    pub hybrid_car: f64,
    /// kWh per flight
    pub flight_energy: f64,
    /// kWh per hour of transit
    pub transit_energy: f64,
    /// kWh per restaurant meal
    pub restaurant_meal: f64,
    /// kWh per delivered order
    pub shopping_order: f64,
}

impl Default for EnergyFactors {
    fn default() -> Self {
        Self {
            smartphone: 0.1,
            computer: 1.0,
            streaming: 0.25,
            ai_text: 0.3,
            ai_image: 0.1,
            ai_video: 1.0,
            gas_car: 1.1,
            electric_car: 0.33,
            hybrid_car: 0.7,
            flight_energy: 3000.0,
            transit_energy: 2.0,
            restaurant_meal: 1.5,
            shopping_order: 8.0,
        }
    }
}

impl EnergyFactors {
    /// All factors with their camelCase keys, in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 13] {
        [
            ("smartphone", self.smartphone),
            ("computer", self.computer),
            ("streaming", self.streaming),
            ("aiText", self.ai_text),
            ("aiImage", self.ai_image),
            ("aiVideo", self.ai_video),
            ("gasCar", self.gas_car),
            ("electricCar", self.electric_car),
            ("hybridCar", self.hybrid_car),
            ("flightEnergy", self.flight_energy),
            ("transitEnergy", self.transit_energy),
            ("restaurantMeal", self.restaurant_meal),
            ("shoppingOrder", self.shopping_order),
        ]
    }

    /// Looks a factor up by its camelCase key, e.g. `"gasCar"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeMultipliers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub xlarge: f64,
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        Self {
            small: 0.6,
            medium: 1.0,
            large: 1.5,
            xlarge: 2.0,
        }
    }
}

impl SizeMultipliers {
    #[must_use]
    pub fn get(&self, size: Option<HomeSize>) -> f64 {
        match size {
            Some(HomeSize::Small) => self.small,
            Some(HomeSize::Medium) => self.medium,
            Some(HomeSize::Large) => self.large,
            Some(HomeSize::XLarge) => self.xlarge,
            None => NEUTRAL_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateMultipliers {
    pub mild: f64,
    pub moderate: f64,
    pub extreme: f64,
}

impl Default for ClimateMultipliers {
    fn default() -> Self {
        Self {
            mild: 0.7,
            moderate: 1.0,
            extreme: 1.5,
        }
    }
}

impl ClimateMultipliers {
    #[must_use]
    pub fn get(&self, climate: Option<Climate>) -> f64 {
        match climate {
            Some(Climate::Mild) => self.mild,
            Some(Climate::Moderate) => self.moderate,
            Some(Climate::Extreme) => self.extreme,
            None => NEUTRAL_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HomeEnergyFactors {
    /// kWh per day for a medium home in a moderate climate
    pub base_energy: f64,
    pub size_multipliers: SizeMultipliers,
    pub climate_multipliers: ClimateMultipliers,
    /// kWh per day added for every occupant beyond the first
    pub per_person_adjustment: f64,
}

impl Default for HomeEnergyFactors {
    fn default() -> Self {
        Self {
            base_energy: 30.0,
            size_multipliers: SizeMultipliers::default(),
            climate_multipliers: ClimateMultipliers::default(),
            per_person_adjustment: 3.0,
        }
    }
}

/// Daily food-system energy per diet, in kWh/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DietEnergyFactors {
    #[serde(rename = "meat-heavy")]
    pub meat_heavy: f64,
    pub average: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl Default for DietEnergyFactors {
    fn default() -> Self {
        Self {
            meat_heavy: 20.0,
            average: 15.0,
            vegetarian: 12.0,
            vegan: 10.0,
        }
    }
}

impl DietEnergyFactors {
    /// Unrecognized diets resolve to [`DEFAULT_DIET_ENERGY`].
    #[must_use]
    pub fn get(&self, diet: Option<DietType>) -> f64 {
        match diet {
            Some(DietType::MeatHeavy) => self.meat_heavy,
            Some(DietType::Average) => self.average,
            Some(DietType::Vegetarian) => self.vegetarian,
            Some(DietType::Vegan) => self.vegan,
            None => DEFAULT_DIET_ENERGY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Reference figures used for comparison and display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Averages {
    /// Reference average in kWh/day
    pub american_daily: f64,
    /// kWh/day
    pub total_daily: Range,
    #[serde(rename = "annualMWh")]
    pub annual_mwh: Range,
    /// USD per day
    pub daily_cost: Range,
    /// Tonnes of CO2 per year
    #[serde(rename = "annualCO2")]
    pub annual_co2: Range,
}

impl Default for Averages {
    fn default() -> Self {
        Self {
            american_daily: 130.0,
            total_daily: Range {
                min: 110.0,
                max: 150.0,
            },
            annual_mwh: Range {
                min: 40.0,
                max: 55.0,
            },
            daily_cost: Range {
                min: 11.0,
                max: 15.0,
            },
            annual_co2: Range {
                min: 18.0,
                max: 27.0,
            },
        }
    }
}

/// The full configuration table. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnergyConfig {
    pub energy_factors: EnergyFactors,
    pub home_energy_factors: HomeEnergyFactors,
    pub diet_energy_factors: DietEnergyFactors,
    pub averages: Averages,
}

impl EnergyConfig {
    /// Parses a TOML document; every table and field is optional and
    /// falls back to the built-in value.
    ///
    /// # Example
    ///
    /// ```
    /// use energy_footprint::config::EnergyConfig;
    ///
    /// let config = EnergyConfig::from_toml_str("[energyFactors]\ngasCar = 1.2\n")?;
    /// assert_eq!(config.energy_factors.gas_car, 1.2);
    /// assert_eq!(config.energy_factors.electric_car, 0.33);
    /// # Ok::<(), energy_footprint::error::ConfigError>(())
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads overrides from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let content =
            std::fs::read_to_string(path_ref).map_err(|source| ConfigError::FileRead {
                path: path_ref.to_path_buf(),
                source,
            })?;

        let config = Self::from_toml_str(&content)?;
        info!(path = %path_ref.display(), "loaded energy factors");
        Ok(config)
    }

    /// Every numeric factor with a dotted key, for validation and listing.
    #[must_use]
    pub fn numeric_entries(&self) -> Vec<(String, f64)> {
        let home = &self.home_energy_factors;
        let diet = &self.diet_energy_factors;

        let mut entries: Vec<(String, f64)> = self
            .energy_factors
            .entries()
            .into_iter()
            .map(|(key, value)| (format!("energyFactors.{key}"), value))
            .collect();

        entries.extend([
            ("homeEnergyFactors.baseEnergy".to_string(), home.base_energy),
            (
                "homeEnergyFactors.perPersonAdjustment".to_string(),
                home.per_person_adjustment,
            ),
        ]);
        for size in HomeSize::ALL {
            entries.push((
                format!("homeEnergyFactors.sizeMultipliers.{}", size.key()),
                home.size_multipliers.get(Some(size)),
            ));
        }
        for climate in Climate::ALL {
            entries.push((
                format!("homeEnergyFactors.climateMultipliers.{}", climate.key()),
                home.climate_multipliers.get(Some(climate)),
            ));
        }
        for diet_type in DietType::ALL {
            entries.push((
                format!("dietEnergyFactors.{}", diet_type.key()),
                diet.get(Some(diet_type)),
            ));
        }
        entries.push((
            "averages.americanDaily".to_string(),
            self.averages.american_daily,
        ));

        entries
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some((key, value)) = self
            .numeric_entries()
            .into_iter()
            .find(|(_, value)| !(0.0..=MAX_FACTOR).contains(value))
        {
            return Err(ConfigError::InvalidFactor { key, value });
        }

        // The reference average divides the grand total
        let reference = self.averages.american_daily;
        if reference < MIN_REFERENCE_AVERAGE {
            return Err(ConfigError::InvalidFactor {
                key: "averages.americanDaily".to_string(),
                value: reference,
            });
        }

        Ok(())
    }
}
