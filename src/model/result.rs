use serde::Serialize;

/// The four categories a footprint is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Digital,
    Transport,
    Home,
    Lifestyle,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Digital, Self::Transport, Self::Home, Self::Lifestyle];

    /// Label used by the personal breakdown chart.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digital => "Digital Life",
            Self::Transport => "Transportation",
            Self::Home => "Home Energy",
            Self::Lifestyle => "Food & Lifestyle",
        }
    }
}

/// Daily energy estimate in kWh/day, recomputed in full for every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub digital: f64,
    /// Share of `digital` spent on AI text, images and video.
    pub ai_subtotal: f64,
    pub transport: f64,
    pub home: f64,
    pub lifestyle: f64,
    pub grand_total: f64,
}

impl FootprintResult {
    /// Builds a result whose total is the plain sum of the four subtotals.
    #[must_use]
    pub fn new(digital: f64, ai_subtotal: f64, transport: f64, home: f64, lifestyle: f64) -> Self {
        Self {
            digital,
            ai_subtotal,
            transport,
            home,
            lifestyle,
            grand_total: digital + transport + home + lifestyle,
        }
    }

    #[must_use]
    pub fn subtotal(&self, category: Category) -> f64 {
        match category {
            Category::Digital => self.digital,
            Category::Transport => self.transport,
            Category::Home => self.home,
            Category::Lifestyle => self.lifestyle,
        }
    }

    /// Percentage of the grand total per category, in [`Category::ALL`] order.
    ///
    /// All shares are 0 when the total is 0.
    #[must_use]
    pub fn shares(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|category| {
            let share = if self.grand_total > 0.0 {
                self.subtotal(category) / self.grand_total * 100.0
            } else {
                0.0
            };
            (category, share)
        })
    }

    /// The category contributing the most energy.
    #[must_use]
    pub fn largest_category(&self) -> Category {
        Category::ALL
            .into_iter()
            .fold(Category::Digital, |best, category| {
                if self.subtotal(category) > self.subtotal(best) {
                    category
                } else {
                    best
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_is_sum_of_subtotals() {
        let result = FootprintResult::new(1.5, 0.5, 2.0, 30.0, 15.0);
        assert_eq!(result.grand_total, 1.5 + 2.0 + 30.0 + 15.0);
    }

    #[test]
    fn shares_add_up_to_hundred() {
        let result = FootprintResult::new(10.0, 0.0, 30.0, 40.0, 20.0);
        let shares = result.shares();

        assert_eq!(shares[0], (Category::Digital, 10.0));
        assert_eq!(shares[2], (Category::Home, 40.0));
        let sum: f64 = shares.iter().map(|(_, s)| s).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn shares_of_empty_footprint_are_zero() {
        let result = FootprintResult::new(0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(result.shares().iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn largest_category_picks_maximum() {
        let result = FootprintResult::new(1.0, 0.0, 45.0, 30.0, 15.0);
        assert_eq!(result.largest_category(), Category::Transport);
    }
}
