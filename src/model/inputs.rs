use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Vehicle driven on a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    #[default]
    Gas,
    Electric,
    Hybrid,
    /// No car, or a value the form does not know.
    None,
}

impl CarType {
    pub const ALL: [Self; 4] = [Self::Gas, Self::Electric, Self::Hybrid, Self::None];

    /// Unknown keys map to [`CarType::None`], which contributes nothing.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "gas" => Self::Gas,
            "electric" => Self::Electric,
            "hybrid" => Self::Hybrid,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Electric => "electric",
            Self::Hybrid => "hybrid",
            Self::None => "none",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gas => "Gas car",
            Self::Electric => "Electric car",
            Self::Hybrid => "Hybrid car",
            Self::None => "No car",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl HomeSize {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xlarge" => Some(Self::XLarge),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small apartment",
            Self::Medium => "Medium home",
            Self::Large => "Large home",
            Self::XLarge => "Very large home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Mild,
    #[default]
    Moderate,
    Extreme,
}

impl Climate {
    pub const ALL: [Self; 3] = [Self::Mild, Self::Moderate, Self::Extreme];

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Extreme => "extreme",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild climate",
            Self::Moderate => "Moderate climate",
            Self::Extreme => "Extreme climate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    MeatHeavy,
    #[default]
    Average,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [Self; 4] = [Self::MeatHeavy, Self::Average, Self::Vegetarian, Self::Vegan];

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "meat-heavy" => Some(Self::MeatHeavy),
            "average" => Some(Self::Average),
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::MeatHeavy => "meat-heavy",
            Self::Average => "average",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MeatHeavy => "Meat-heavy diet",
            Self::Average => "Average diet",
            Self::Vegetarian => "Vegetarian diet",
            Self::Vegan => "Vegan diet",
        }
    }
}

/// A numeric form field as supplied: either already a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Reads the value the way a browser's `parseFloat` reads a form field.
    ///
    /// Returns `None` for anything without a finite numeric prefix.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_leading_number(s)?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Input record as a form or file provides it. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    // Digital life
    pub smartphone_hours: Option<RawValue>,
    pub computer_hours: Option<RawValue>,
    pub streaming_hours: Option<RawValue>,
    pub ai_text_hours: Option<RawValue>,
    pub ai_images: Option<RawValue>,
    pub ai_video_mins: Option<RawValue>,

    // Transportation
    pub car_type: Option<String>,
    pub miles_driven: Option<RawValue>,
    pub flights_year: Option<RawValue>,
    pub transit_hours: Option<RawValue>,

    // Home
    pub home_size: Option<String>,
    pub climate: Option<String>,
    pub household_size: Option<RawValue>,

    // Lifestyle
    pub diet_type: Option<String>,
    pub meals_out: Option<RawValue>,
    pub shopping_orders: Option<RawValue>,
}

impl RawInputs {
    /// Reads an input record from a `.json` or `.toml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content =
            std::fs::read_to_string(path_ref).map_err(|source| InputError::FileRead {
                path: path_ref.to_path_buf(),
                source,
            })?;

        let raw = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(InputError::UnsupportedFormat {
                    path: path_ref.to_path_buf(),
                })
            }
        };

        info!(path = %path_ref.display(), "loaded inputs");
        Ok(raw)
    }

    /// Produces a record the calculator can use without further checks.
    ///
    /// Missing, unparsable or negative quantities become 0, household size
    /// is at least 1, and unknown categories fall back to their neutral arm.
    /// Quantities above [`MAX_QUANTITY`] are capped to it.
    #[must_use]
    pub fn normalize(&self) -> UserInputs {
        UserInputs {
            smartphone_hours: quantity(self.smartphone_hours.as_ref()),
            computer_hours: quantity(self.computer_hours.as_ref()),
            streaming_hours: quantity(self.streaming_hours.as_ref()),
            ai_text_hours: quantity(self.ai_text_hours.as_ref()),
            ai_images: quantity(self.ai_images.as_ref()),
            ai_video_mins: quantity(self.ai_video_mins.as_ref()),

            car_type: self
                .car_type
                .as_deref()
                .map_or(CarType::None, CarType::from_key),
            miles_driven: quantity(self.miles_driven.as_ref()),
            flights_year: quantity(self.flights_year.as_ref()),
            transit_hours: quantity(self.transit_hours.as_ref()),

            home_size: self.home_size.as_deref().and_then(HomeSize::from_key),
            climate: self.climate.as_deref().and_then(Climate::from_key),
            household_size: household(self.household_size.as_ref()),

            diet_type: self.diet_type.as_deref().and_then(DietType::from_key),
            meals_out: quantity(self.meals_out.as_ref()),
            shopping_orders: quantity(self.shopping_orders.as_ref()),
        }
    }
}

/// Normalized input record. All quantities are finite, non-negative and at
/// most [`MAX_QUANTITY`].
///
/// `None` in a categorical field means the source value was not recognized;
/// the calculator applies the neutral fallback for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputs {
    pub smartphone_hours: f64,
    pub computer_hours: f64,
    pub streaming_hours: f64,
    pub ai_text_hours: f64,
    pub ai_images: f64,
    pub ai_video_mins: f64,

    pub car_type: CarType,
    pub miles_driven: f64,
    pub flights_year: f64,
    pub transit_hours: f64,

    pub home_size: Option<HomeSize>,
    pub climate: Option<Climate>,
    pub household_size: f64,

    pub diet_type: Option<DietType>,
    pub meals_out: f64,
    pub shopping_orders: f64,
}

impl Default for UserInputs {
    /// The blank form: no usage, a gas car, a medium home in a moderate
    /// climate, one occupant, an average diet.
    fn default() -> Self {
        Self {
            smartphone_hours: 0.0,
            computer_hours: 0.0,
            streaming_hours: 0.0,
            ai_text_hours: 0.0,
            ai_images: 0.0,
            ai_video_mins: 0.0,
            car_type: CarType::default(),
            miles_driven: 0.0,
            flights_year: 0.0,
            transit_hours: 0.0,
            home_size: Some(HomeSize::default()),
            climate: Some(Climate::default()),
            household_size: 1.0,
            diet_type: Some(DietType::default()),
            meals_out: 0.0,
            shopping_orders: 0.0,
        }
    }
}

/// Upper bound on any normalized quantity. Together with the factor bound
/// in the configuration this keeps every product and sum finite.
pub const MAX_QUANTITY: f64 = 1.0e6;

// `n > 0.0` also drops negative zero
fn quantity(value: Option<&RawValue>) -> f64 {
    value
        .and_then(RawValue::as_number)
        .filter(|n| *n > 0.0)
        .map_or(0.0, |n| n.min(MAX_QUANTITY))
}

fn household(value: Option<&RawValue>) -> f64 {
    value
        .and_then(RawValue::as_number)
        .filter(|n| *n >= 1.0)
        .map_or(1.0, |n| n.min(MAX_QUANTITY))
}

/// Parses the longest decimal prefix of `s`, e.g. `" 12.5 hrs"` gives 12.5.
#[must_use]
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leading_number_prefixes() {
        assert_eq!(parse_leading_number("12"), Some(12.0));
        assert_eq!(parse_leading_number("  2.5 hrs"), Some(2.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("3."), Some(3.0));
        assert_eq!(parse_leading_number("1e2x"), Some(100.0));
        assert_eq!(parse_leading_number("4e"), Some(4.0));
        assert_eq!(parse_leading_number("-7"), Some(-7.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
    }

    #[test]
    fn empty_record_normalizes_to_zeroes() {
        let inputs = RawInputs::default().normalize();

        assert_eq!(inputs.smartphone_hours, 0.0);
        assert_eq!(inputs.ai_video_mins, 0.0);
        assert_eq!(inputs.miles_driven, 0.0);
        assert_eq!(inputs.household_size, 1.0);
        assert_eq!(inputs.car_type, CarType::None);
        assert_eq!(inputs.home_size, None);
        assert_eq!(inputs.climate, None);
        assert_eq!(inputs.diet_type, None);
    }

    #[test]
    fn malformed_numbers_become_defaults() {
        let raw = RawInputs {
            smartphone_hours: Some("lots".into()),
            computer_hours: Some("8 hours".into()),
            streaming_hours: Some(RawValue::Number(f64::NAN)),
            miles_driven: Some((-20.0).into()),
            flights_year: Some("Infinity".into()),
            household_size: Some("0".into()),
            ..RawInputs::default()
        };

        let inputs = raw.normalize();

        assert_eq!(inputs.smartphone_hours, 0.0);
        assert_eq!(inputs.computer_hours, 8.0);
        assert_eq!(inputs.streaming_hours, 0.0);
        assert_eq!(inputs.miles_driven, 0.0);
        assert_eq!(inputs.flights_year, 0.0);
        assert_eq!(inputs.household_size, 1.0);
    }

    #[test]
    fn negative_zero_becomes_plain_zero() {
        let raw = RawInputs {
            miles_driven: Some("-0".into()),
            smartphone_hours: Some(RawValue::Number(-0.0)),
            ..RawInputs::default()
        };

        let inputs = raw.normalize();

        assert!(inputs.miles_driven.is_sign_positive());
        assert!(inputs.smartphone_hours.is_sign_positive());
        assert_eq!(format!("{}", inputs.miles_driven), "0");
    }

    #[test]
    fn huge_quantities_are_capped() {
        let raw = RawInputs {
            flights_year: Some("1e306".into()),
            household_size: Some(RawValue::Number(f64::MAX)),
            meals_out: Some(RawValue::Number(MAX_QUANTITY)),
            ..RawInputs::default()
        };

        let inputs = raw.normalize();

        assert_eq!(inputs.flights_year, MAX_QUANTITY);
        assert_eq!(inputs.household_size, MAX_QUANTITY);
        assert_eq!(inputs.meals_out, MAX_QUANTITY);
    }

    #[test]
    fn categories_match_case_insensitively() {
        let raw = RawInputs {
            car_type: Some(" Electric ".to_string()),
            home_size: Some("XLARGE".to_string()),
            climate: Some("mild".to_string()),
            diet_type: Some("Meat-Heavy".to_string()),
            ..RawInputs::default()
        };

        let inputs = raw.normalize();

        assert_eq!(inputs.car_type, CarType::Electric);
        assert_eq!(inputs.home_size, Some(HomeSize::XLarge));
        assert_eq!(inputs.climate, Some(Climate::Mild));
        assert_eq!(inputs.diet_type, Some(DietType::MeatHeavy));
    }

    #[test]
    fn unknown_categories_fall_back() {
        let raw = RawInputs {
            car_type: Some("bicycle".to_string()),
            home_size: Some("castle".to_string()),
            climate: Some(String::new()),
            diet_type: Some(String::new()),
            ..RawInputs::default()
        };

        let inputs = raw.normalize();

        assert_eq!(inputs.car_type, CarType::None);
        assert_eq!(inputs.home_size, None);
        assert_eq!(inputs.climate, None);
        assert_eq!(inputs.diet_type, None);
    }

    #[test]
    fn load_reads_toml_and_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("habits.toml");
        std::fs::write(
            &toml_path,
            "smartphoneHours = 3\nhomeSize = \"large\"\nhouseholdSize = \"2\"\n",
        )
        .unwrap();
        let json_path = dir.path().join("habits.JSON");
        std::fs::write(&json_path, r#"{"flightsYear": 4}"#).unwrap();

        let from_toml = RawInputs::load(&toml_path).unwrap().normalize();
        let from_json = RawInputs::load(&json_path).unwrap().normalize();

        assert_eq!(from_toml.smartphone_hours, 3.0);
        assert_eq!(from_toml.home_size, Some(HomeSize::Large));
        assert_eq!(from_toml.household_size, 2.0);
        assert_eq!(from_json.flights_year, 4.0);
    }

    #[test]
    fn load_rejects_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.yaml");
        std::fs::write(&path, "smartphoneHours: 3").unwrap();

        let err = RawInputs::load(&path).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFormat { .. }));
    }

    #[test]
    fn raw_inputs_accept_numbers_and_strings_in_json() {
        let raw: RawInputs = serde_json::from_str(
            r#"{"smartphoneHours": 3, "milesDriven": "25", "carType": "hybrid", "dietType": "vegan"}"#,
        )
        .unwrap();

        let inputs = raw.normalize();

        assert_eq!(inputs.smartphone_hours, 3.0);
        assert_eq!(inputs.miles_driven, 25.0);
        assert_eq!(inputs.car_type, CarType::Hybrid);
        assert_eq!(inputs.diet_type, Some(DietType::Vegan));
    }
}
