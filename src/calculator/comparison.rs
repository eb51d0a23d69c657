use serde::Serialize;
use std::fmt;

/// Reference average in kWh/day.
pub const REFERENCE_AVERAGE: f64 = 130.0;

/// AI usage above this many kWh/day earns an extra note.
pub const AI_NOTE_THRESHOLD: f64 = 2.0;

const EXCELLENT_BELOW: f64 = 80.0;
const GOOD_BELOW: f64 = 110.0;
const AVERAGE_BELOW: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Excellent,
    Good,
    Average,
    AboveAverage,
}

impl Tier {
    /// Boundary values belong to the higher tier.
    #[must_use]
    pub fn for_total(grand_total: f64) -> Self {
        if grand_total < EXCELLENT_BELOW {
            Self::Excellent
        } else if grand_total < GOOD_BELOW {
            Self::Good
        } else if grand_total < AVERAGE_BELOW {
            Self::Average
        } else {
            Self::AboveAverage
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good job!",
            Self::Average => "About average.",
            Self::AboveAverage => "Above average.",
        }
    }

    fn body(self, percentage: u64) -> String {
        match self {
            Self::Excellent => format!(
                "Your energy footprint is {percentage}% of the average American's. \
                 You're in the top 10% for energy efficiency!"
            ),
            Self::Good => format!(
                "Your energy footprint is {percentage}% of the average American's. \
                 You're more efficient than most!"
            ),
            Self::Average => format!(
                "Your energy footprint is {percentage}% of the typical American's. \
                 Consider reducing transportation or home energy use."
            ),
            Self::AboveAverage => format!(
                "Your energy footprint is {percentage}% of the average American's. \
                 Look for ways to reduce, especially in your highest categories."
            ),
        }
    }
}

/// Qualitative verdict on a footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub tier: Tier,
    /// Grand total as a whole percentage of the reference average.
    pub percentage: u64,
    pub headline: &'static str,
    pub body: String,
    pub ai_note: Option<String>,
}

impl Comparison {
    /// Headline, body and AI note joined into one plain-text message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.headline, self.body)?;
        if let Some(note) = &self.ai_note {
            write!(f, "\n\n{note}")?;
        }
        Ok(())
    }
}

/// Classifies a grand total against [`REFERENCE_AVERAGE`].
///
/// # Example
///
/// ```
/// use energy_footprint::calculator::{classify, Tier};
///
/// let comparison = classify(65.0, 2.5);
/// assert_eq!(comparison.tier, Tier::Excellent);
/// assert_eq!(comparison.percentage, 50);
/// assert!(comparison.message().contains("adds 2.5 kWh/day"));
/// ```
#[must_use]
pub fn classify(grand_total: f64, ai_subtotal: f64) -> Comparison {
    classify_against(grand_total, ai_subtotal, REFERENCE_AVERAGE)
}

/// Like [`classify`], with the percentage taken against `reference`.
///
/// Tier boundaries stay fixed whatever the reference.
#[must_use]
pub fn classify_against(grand_total: f64, ai_subtotal: f64, reference: f64) -> Comparison {
    let tier = Tier::for_total(grand_total);
    // Bounded inputs and factors keep this far below u64::MAX
    let percentage = round_half_up(grand_total / reference * 100.0, 0).max(0.0) as u64;

    let ai_note = (ai_subtotal > AI_NOTE_THRESHOLD).then(|| {
        format!(
            "AI Note: Your AI usage adds {:.1} kWh/day. Consider using simpler models \
             for basic tasks or batching queries.",
            round_half_up(ai_subtotal, 1)
        )
    });

    Comparison {
        tier,
        percentage,
        headline: tier.headline(),
        body: tier.body(percentage),
        ai_note,
    }
}

/// Rounds to `decimals` places with ties going up, so 2.25 becomes 2.3.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}
