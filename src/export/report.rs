use crate::calculator::{classify_against, Breakdown, Calculator, Comparison};
use crate::config::EnergyConfig;
use crate::model::{Category, FootprintResult, UserInputs};
use serde::Serialize;
use std::fmt::Write;

/// Everything known about one estimate, ready for display or export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub inputs: UserInputs,
    pub breakdown: Breakdown,
    pub result: FootprintResult,
    pub comparison: Comparison,
}

impl FootprintReport {
    #[must_use]
    pub fn new(config: &EnergyConfig, inputs: UserInputs) -> Self {
        let breakdown = Calculator::new(config).breakdown(&inputs);
        let result = breakdown.result();
        let comparison = classify_against(
            result.grand_total,
            result.ai_subtotal,
            config.averages.american_daily,
        );

        Self {
            inputs,
            breakdown,
            result,
            comparison,
        }
    }

    /// Plain-text summary, one figure per line, with one decimal.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Your Personal Energy Breakdown");
        let _ = writeln!(out, "==============================");
        for (category, share) in self.result.shares() {
            let _ = writeln!(
                out,
                "{:<18} {:>7.1} kWh/day  ({:>5.1}%)",
                category.label(),
                self.result.subtotal(category),
                share
            );
            if category == Category::Digital && self.result.ai_subtotal > 0.0 {
                let _ = writeln!(
                    out,
                    "{:<18} {:>7.1} kWh/day",
                    "  of which AI",
                    self.result.ai_subtotal
                );
            }
        }
        let _ = writeln!(out, "{}", "-".repeat(44));
        let _ = writeln!(
            out,
            "{:<18} {:>7.1} kWh/day",
            "Total",
            self.result.grand_total
        );
        if self.result.grand_total > 0.0 {
            let _ = writeln!(
                out,
                "Largest category: {}",
                self.result.largest_category().label()
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.comparison);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Tier;
    use crate::model::CarType;

    #[test]
    fn report_ties_result_and_comparison_together() {
        let config = EnergyConfig::default();
        let inputs = UserInputs {
            car_type: CarType::Gas,
            miles_driven: 30.0,
            ..UserInputs::default()
        };

        let report = FootprintReport::new(&config, inputs);

        assert!((report.result.grand_total - 78.0).abs() < 1e-9);
        assert_eq!(report.comparison.tier, Tier::Excellent);
        assert_eq!(report.comparison.percentage, 60);
    }

    #[test]
    fn text_report_lists_categories_and_message() {
        let config = EnergyConfig::default();
        let report = FootprintReport::new(&config, UserInputs::default());

        let text = report.render_text();

        assert!(text.contains("Home Energy"));
        assert!(text.contains("30.0 kWh/day"));
        assert!(text.contains("Total"));
        assert!(text.contains("45.0 kWh/day"));
        assert!(text.contains("Excellent! Your energy footprint is 35%"));
        assert!(!text.contains("of which AI"));
        assert!(text.contains("Largest category: Home Energy"));
    }

    #[test]
    fn text_report_names_the_heaviest_category() {
        let config = EnergyConfig::default();
        let inputs = UserInputs {
            car_type: CarType::Gas,
            miles_driven: 60.0,
            ..UserInputs::default()
        };

        let text = FootprintReport::new(&config, inputs).render_text();

        assert!(text.contains("Largest category: Transportation"));
    }
}
