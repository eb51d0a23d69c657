use crate::config::EnergyConfig;
use crate::model::{CarType, FootprintResult, UserInputs};
use serde::Serialize;

const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiBreakdown {
    pub text: f64,
    pub images: f64,
    pub video: f64,
}

impl AiBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.text + self.images + self.video
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalBreakdown {
    pub smartphone: f64,
    pub computer: f64,
    pub streaming: f64,
    pub ai: AiBreakdown,
}

impl DigitalBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.smartphone + self.computer + self.streaming + self.ai.total()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBreakdown {
    pub car: f64,
    /// Yearly flights spread over 365 days.
    pub flights: f64,
    /// Weekly transit hours spread over 7 days.
    pub transit: f64,
}

impl TransportBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.car + self.flights + self.transit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeBreakdown {
    /// Base energy scaled by home size and climate.
    pub dwelling: f64,
    pub occupants: f64,
}

impl HomeBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.dwelling + self.occupants
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleBreakdown {
    pub food: f64,
    pub restaurants: f64,
    /// Monthly orders spread over 30 days.
    pub shopping: f64,
}

impl LifestyleBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.food + self.restaurants + self.shopping
    }
}

/// Every component of a footprint, before summing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub digital: DigitalBreakdown,
    pub transport: TransportBreakdown,
    pub home: HomeBreakdown,
    pub lifestyle: LifestyleBreakdown,
}

impl Breakdown {
    #[must_use]
    pub fn result(&self) -> FootprintResult {
        FootprintResult::new(
            self.digital.total(),
            self.digital.ai.total(),
            self.transport.total(),
            self.home.total(),
            self.lifestyle.total(),
        )
    }
}

/// Computes footprints against a borrowed configuration table.
///
/// Stateless: every call depends only on its own inputs.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    config: &'a EnergyConfig,
}

impl<'a> Calculator<'a> {
    #[must_use]
    pub fn new(config: &'a EnergyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &'a EnergyConfig {
        self.config
    }

    /// Computes the daily footprint of a normalized input record.
    ///
    /// # Example
    ///
    /// ```
    /// use energy_footprint::calculator::Calculator;
    /// use energy_footprint::config::EnergyConfig;
    /// use energy_footprint::model::UserInputs;
    ///
    /// let config = EnergyConfig::default();
    /// let result = Calculator::new(&config).compute_footprint(&UserInputs::default());
    ///
    /// // Medium home in a moderate climate plus an average diet
    /// assert_eq!(result.grand_total, 45.0);
    /// ```
    #[must_use]
    pub fn compute_footprint(&self, inputs: &UserInputs) -> FootprintResult {
        self.breakdown(inputs).result()
    }

    #[must_use]
    pub fn breakdown(&self, inputs: &UserInputs) -> Breakdown {
        Breakdown {
            digital: self.digital(inputs),
            transport: self.transport(inputs),
            home: self.home(inputs),
            lifestyle: self.lifestyle(inputs),
        }
    }

    #[must_use]
    pub fn ai(&self, inputs: &UserInputs) -> AiBreakdown {
        let factors = &self.config.energy_factors;

        AiBreakdown {
            text: inputs.ai_text_hours * factors.ai_text,
            images: inputs.ai_images * factors.ai_image,
            video: inputs.ai_video_mins * factors.ai_video,
        }
    }

    #[must_use]
    pub fn digital(&self, inputs: &UserInputs) -> DigitalBreakdown {
        let factors = &self.config.energy_factors;

        DigitalBreakdown {
            smartphone: inputs.smartphone_hours * factors.smartphone,
            computer: inputs.computer_hours * factors.computer,
            streaming: inputs.streaming_hours * factors.streaming,
            ai: self.ai(inputs),
        }
    }

    /// Energy per mile for a car type; zero without a car.
    #[must_use]
    pub fn car_rate(&self, car_type: CarType) -> f64 {
        let factors = &self.config.energy_factors;

        match car_type {
            CarType::Gas => factors.gas_car,
            CarType::Electric => factors.electric_car,
            CarType::Hybrid => factors.hybrid_car,
            CarType::None => 0.0,
        }
    }

    #[must_use]
    pub fn transport(&self, inputs: &UserInputs) -> TransportBreakdown {
        let factors = &self.config.energy_factors;

        TransportBreakdown {
            car: inputs.miles_driven * self.car_rate(inputs.car_type),
            flights: inputs.flights_year * factors.flight_energy / DAYS_PER_YEAR,
            transit: inputs.transit_hours * factors.transit_energy / DAYS_PER_WEEK,
        }
    }

    #[must_use]
    pub fn home(&self, inputs: &UserInputs) -> HomeBreakdown {
        let home = &self.config.home_energy_factors;

        HomeBreakdown {
            dwelling: home.base_energy
                * home.size_multipliers.get(inputs.home_size)
                * home.climate_multipliers.get(inputs.climate),
            occupants: (inputs.household_size - 1.0) * home.per_person_adjustment,
        }
    }

    #[must_use]
    pub fn lifestyle(&self, inputs: &UserInputs) -> LifestyleBreakdown {
        let factors = &self.config.energy_factors;

        LifestyleBreakdown {
            food: self.config.diet_energy_factors.get(inputs.diet_type),
            restaurants: inputs.meals_out * factors.restaurant_meal,
            shopping: inputs.shopping_orders * factors.shopping_order / DAYS_PER_MONTH,
        }
    }
}

/// Shorthand for `Calculator::new(config).compute_footprint(inputs)`.
#[must_use]
pub fn compute_footprint(config: &EnergyConfig, inputs: &UserInputs) -> FootprintResult {
    Calculator::new(config).compute_footprint(inputs)
}
