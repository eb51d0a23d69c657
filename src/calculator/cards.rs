//! Info cards shown beside the form, one per habit, each with its own
//! energy figure and a short description of the input behind it.

use super::comparison::round_half_up;
use super::footprint::Calculator;
use crate::model::{CarType, UserInputs};
use serde::Serialize;

/// How strongly a card is drawn relative to the chosen car type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Highlighted,
    Partial,
    Faded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    /// kWh/day, unrounded.
    pub energy: f64,
    /// Display value without the unit, e.g. `"0.4"`.
    pub value: String,
    pub description: String,
    pub emphasis: Emphasis,
}

impl InfoCard {
    fn new(title: &'static str, energy: f64, description: String) -> Self {
        Self {
            title,
            energy,
            value: format!("{:.1}", round_half_up(energy, 1)),
            description,
            emphasis: Emphasis::Highlighted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoCards {
    pub smartphone: InfoCard,
    pub computer: InfoCard,
    pub streaming: InfoCard,
    pub ai: InfoCard,
    pub gas_car: InfoCard,
    pub electric_car: InfoCard,
}

impl InfoCards {
    /// Cards in display order.
    #[must_use]
    pub fn all(&self) -> [&InfoCard; 6] {
        [
            &self.smartphone,
            &self.computer,
            &self.streaming,
            &self.ai,
            &self.gas_car,
            &self.electric_car,
        ]
    }
}

impl Calculator<'_> {
    #[must_use]
    pub fn info_cards(&self, inputs: &UserInputs) -> InfoCards {
        let digital = self.digital(inputs);
        let factors = &self.config().energy_factors;
        let (gas_emphasis, electric_emphasis) = car_emphasis(inputs.car_type);
        let miles = inputs.miles_driven;

        InfoCards {
            smartphone: InfoCard::new(
                "Smartphone",
                digital.smartphone,
                format!("{}hr use + infrastructure", inputs.smartphone_hours),
            ),
            computer: InfoCard::new(
                "Computer",
                digital.computer,
                format!("{}hr work + cloud", inputs.computer_hours),
            ),
            streaming: InfoCard::new(
                "Streaming",
                digital.streaming,
                format!("{}hr entertainment", inputs.streaming_hours),
            ),
            ai: InfoCard {
                title: "AI Usage",
                energy: digital.ai.total(),
                value: ai_value(digital.ai.total()),
                description: ai_description(inputs, digital.ai.total()),
                emphasis: Emphasis::Highlighted,
            },
            gas_car: InfoCard {
                emphasis: gas_emphasis,
                ..InfoCard::new(
                    "Gas Car",
                    miles * factors.gas_car,
                    format!("{miles}mi commute"),
                )
            },
            electric_car: InfoCard {
                emphasis: electric_emphasis,
                ..InfoCard::new(
                    "Electric Car",
                    miles * factors.electric_car,
                    format!("{miles}mi commute"),
                )
            },
        }
    }
}

/// Small AI figures keep three decimals so they do not read as zero.
fn ai_value(energy: f64) -> String {
    if energy == 0.0 {
        "0".to_string()
    } else if energy < 0.1 {
        format!("{:.3}", round_half_up(energy, 3))
    } else {
        format!("{:.1}", round_half_up(energy, 1))
    }
}

fn ai_description(inputs: &UserInputs, energy: f64) -> String {
    if energy == 0.0 {
        return "No AI usage".to_string();
    }

    let mut parts = Vec::new();
    if inputs.ai_text_hours > 0.0 {
        parts.push(format!("{}hr chat", inputs.ai_text_hours));
    }
    if inputs.ai_images > 0.0 {
        parts.push(format!("{} images", inputs.ai_images));
    }
    if inputs.ai_video_mins > 0.0 {
        parts.push(format!("{}min video", inputs.ai_video_mins));
    }

    parts.join(", ")
}

/// (gas card, electric card)
fn car_emphasis(car_type: CarType) -> (Emphasis, Emphasis) {
    match car_type {
        CarType::Gas => (Emphasis::Highlighted, Emphasis::Faded),
        CarType::Electric => (Emphasis::Faded, Emphasis::Highlighted),
        CarType::Hybrid => (Emphasis::Partial, Emphasis::Partial),
        CarType::None => (Emphasis::Faded, Emphasis::Faded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnergyConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn digital_cards_describe_hours() {
        let config = EnergyConfig::default();
        let inputs = UserInputs {
            smartphone_hours: 4.0,
            computer_hours: 2.5,
            streaming_hours: 3.0,
            ..UserInputs::default()
        };

        let cards = Calculator::new(&config).info_cards(&inputs);

        assert_eq!(cards.smartphone.value, "0.4");
        assert_eq!(cards.smartphone.description, "4hr use + infrastructure");
        assert_eq!(cards.computer.value, "2.5");
        assert_eq!(cards.computer.description, "2.5hr work + cloud");
        assert_eq!(cards.streaming.value, "0.8");
        assert_eq!(cards.streaming.description, "3hr entertainment");
    }

    #[test]
    fn ai_card_without_usage() {
        let config = EnergyConfig::default();
        let cards = Calculator::new(&config).info_cards(&UserInputs::default());

        assert_eq!(cards.ai.value, "0");
        assert_eq!(cards.ai.description, "No AI usage");
    }

    #[test]
    fn ai_card_small_values_keep_three_decimals() {
        let config = EnergyConfig::from_toml_str("[energyFactors]\naiImage = 0.01\n").unwrap();
        let inputs = UserInputs {
            ai_images: 3.0,
            ..UserInputs::default()
        };

        let cards = Calculator::new(&config).info_cards(&inputs);

        assert_eq!(cards.ai.value, "0.030");
        assert_eq!(cards.ai.description, "3 images");
    }

    #[test]
    fn ai_card_lists_each_activity() {
        let config = EnergyConfig::default();
        let inputs = UserInputs {
            ai_text_hours: 2.0,
            ai_images: 10.0,
            ai_video_mins: 2.0,
            ..UserInputs::default()
        };

        let cards = Calculator::new(&config).info_cards(&inputs);

        assert_eq!(cards.ai.value, "3.6");
        assert_eq!(cards.ai.description, "2hr chat, 10 images, 2min video");
    }

    #[test]
    fn car_cards_follow_car_type() {
        let config = EnergyConfig::default();
        let mut inputs = UserInputs {
            miles_driven: 30.0,
            car_type: CarType::Gas,
            ..UserInputs::default()
        };

        let cards = Calculator::new(&config).info_cards(&inputs);
        assert_eq!(cards.gas_car.value, "33.0");
        assert_eq!(cards.electric_car.value, "9.9");
        assert_eq!(cards.gas_car.description, "30mi commute");
        assert_eq!(cards.gas_car.emphasis, Emphasis::Highlighted);
        assert_eq!(cards.electric_car.emphasis, Emphasis::Faded);

        inputs.car_type = CarType::Hybrid;
        let cards = Calculator::new(&config).info_cards(&inputs);
        assert_eq!(cards.gas_car.emphasis, Emphasis::Partial);
        assert_eq!(cards.electric_car.emphasis, Emphasis::Partial);

        inputs.car_type = CarType::None;
        let cards = Calculator::new(&config).info_cards(&inputs);
        assert_eq!(cards.gas_car.emphasis, Emphasis::Faded);
        assert_eq!(cards.electric_car.emphasis, Emphasis::Faded);
    }

    #[test]
    fn zero_rated_ai_reads_as_no_usage() {
        let config = EnergyConfig::from_toml_str(
            "[energyFactors]\naiText = 0.0\naiImage = 0.0\naiVideo = 0.0\n",
        )
        .unwrap();
        let inputs = UserInputs {
            ai_text_hours: 2.0,
            ai_images: 4.0,
            ..UserInputs::default()
        };

        let cards = Calculator::new(&config).info_cards(&inputs);

        assert_eq!(cards.ai.value, "0");
        assert_eq!(cards.ai.description, "No AI usage");
    }

    #[test]
    fn negative_zero_miles_read_as_zero() {
        let config = EnergyConfig::default();
        let inputs = crate::model::RawInputs {
            miles_driven: Some("-0".into()),
            ..crate::model::RawInputs::default()
        }
        .normalize();

        let cards = Calculator::new(&config).info_cards(&inputs);

        assert_eq!(cards.gas_car.description, "0mi commute");
        assert_eq!(cards.gas_car.value, "0.0");
    }
}
