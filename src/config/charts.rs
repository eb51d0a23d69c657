//! Display metadata: the colour palette and the illustrative reference
//! charts shown next to the personal estimate. These figures are
//! pre-computed averages and never feed into the calculation.

use crate::model::Category;
use serde::Serialize;

/// A 24-bit colour, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub mod palette {
    use super::Rgb;

    pub const DIGITAL: Rgb = Rgb(0x64, 0xFF, 0xDA); // #64ffda
    pub const HOME: Rgb = Rgb(0xFB, 0x92, 0x3C); // #fb923c
    pub const TRANSPORT: Rgb = Rgb(0xA8, 0x55, 0xF7); // #a855f7
    pub const FOOD: Rgb = Rgb(0x22, 0xC5, 0x5E); // #22c55e
    pub const GOODS: Rgb = Rgb(0xEF, 0x44, 0x44); // #ef4444
    pub const AI: Rgb = Rgb(0xFF, 0xA5, 0x00); // #ffa500
    pub const VISIBLE: Rgb = Rgb(0x5E, 0xEA, 0xD4); // #5eead4
    pub const HIDDEN: Rgb = Rgb(0xF7, 0x70, 0x62); // #f77062
}

/// Colour of a category in the personal breakdown chart.
#[must_use]
pub fn category_color(category: Category) -> Rgb {
    match category {
        Category::Digital => palette::DIGITAL,
        Category::Transport => palette::TRANSPORT,
        Category::Home => palette::HOME,
        Category::Lifestyle => palette::FOOD,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Radar,
    PolarArea,
    Line,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub values: &'static [f64],
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferenceChart {
    pub title: &'static str,
    pub kind: ChartKind,
    pub unit: &'static str,
    pub labels: &'static [&'static str],
    pub datasets: &'static [Dataset],
    /// Per-label colours; when absent each dataset uses its own colour.
    pub label_colors: Option<&'static [Rgb]>,
}

use palette::{AI, DIGITAL, FOOD, GOODS, HIDDEN, HOME, TRANSPORT, VISIBLE};

pub const MAIN_BREAKDOWN: ReferenceChart = ReferenceChart {
    title: "Where a Typical Day's Energy Goes",
    kind: ChartKind::Bar,
    unit: "kWh/day",
    labels: &[
        "HVAC",
        "Gas Car",
        "Food Production",
        "Goods Mfg",
        "Hot Water",
        "Appliances",
        "Services",
        "Laptop+Cloud",
        "Air Travel",
        "Food Prep",
        "Lighting",
        "Streaming",
        "AI Usage",
        "Smartphone",
        "Smart Home",
    ],
    datasets: &[Dataset {
        label: "Daily kWh",
        values: &[
            25.0, 33.0, 15.0, 10.0, 10.0, 8.0, 8.0, 8.0, 8.0, 5.0, 2.0, 0.8, 1.0, 0.5, 1.5,
        ],
        color: HOME,
    }],
    label_colors: Some(&[
        HOME, TRANSPORT, FOOD, GOODS, HOME, HOME, GOODS, DIGITAL, TRANSPORT, FOOD, HOME, DIGITAL,
        AI, DIGITAL, DIGITAL,
    ]),
};

pub const CATEGORY_DATA: ReferenceChart = ReferenceChart {
    title: "Energy by Category",
    kind: ChartKind::Doughnut,
    unit: "kWh/day",
    labels: &[
        "Home Energy",
        "Transportation",
        "Digital Life",
        "Food System",
        "Goods & Services",
    ],
    datasets: &[Dataset {
        label: "Daily kWh",
        values: &[50.0, 41.0, 11.0, 20.0, 18.0],
        color: HOME,
    }],
    label_colors: Some(&[HOME, TRANSPORT, DIGITAL, FOOD, GOODS]),
};

pub const HIDDEN_VS_VISIBLE: ReferenceChart = ReferenceChart {
    title: "Visible vs Hidden Energy",
    kind: ChartKind::Bar,
    unit: "kWh per day",
    labels: &["Digital", "Food", "Goods", "Transport", "Home"],
    datasets: &[
        Dataset {
            label: "Visible (Direct)",
            values: &[2.0, 5.0, 0.0, 33.0, 50.0],
            color: VISIBLE,
        },
        Dataset {
            label: "Hidden (Infrastructure)",
            values: &[9.0, 15.0, 18.0, 8.0, 0.0],
            color: HIDDEN,
        },
    ],
    label_colors: None,
};

pub const DIGITAL_INFRASTRUCTURE: ReferenceChart = ReferenceChart {
    title: "Digital Infrastructure Load",
    kind: ChartKind::Radar,
    unit: "relative load",
    labels: &[
        "Data Centers",
        "Network Infrastructure",
        "Content Delivery",
        "Device Manufacturing",
        "AI Processing",
        "Cooling Systems",
    ],
    datasets: &[Dataset {
        label: "Infrastructure Load",
        values: &[85.0, 70.0, 60.0, 40.0, 95.0, 80.0],
        color: DIGITAL,
    }],
    label_colors: None,
};

pub const HOME_PROFILE: ReferenceChart = ReferenceChart {
    title: "Home Energy Profile",
    kind: ChartKind::PolarArea,
    unit: "kWh/day",
    labels: &[
        "Space Heating/Cooling",
        "Water Heating",
        "Refrigeration",
        "Washer/Dryer",
        "Lighting",
        "Electronics",
        "Cooking",
    ],
    datasets: &[Dataset {
        label: "Daily kWh",
        values: &[25.0, 10.0, 4.0, 2.0, 2.0, 1.5, 0.5],
        color: HOME,
    }],
    label_colors: None,
};

pub const EQUIVALENTS: ReferenceChart = ReferenceChart {
    title: "Energy Equivalents",
    kind: ChartKind::Bar,
    unit: "Equivalent Energy Units",
    labels: &[
        "1 Day Total Energy = Miles in Gas Car",
        "1 Hour AI Use = Phone Charges",
        "1 Day Smartphone = LED Bulb Days",
        "1 Day HVAC = EV Miles",
        "1 AI Image = Minutes of Streaming",
    ],
    datasets: &[Dataset {
        label: "Equivalent Units",
        values: &[140.0, 20.0, 100.0, 80.0, 30.0],
        color: DIGITAL,
    }],
    label_colors: Some(&[TRANSPORT, AI, DIGITAL, HOME, AI]),
};

pub const ANNUAL_VARIATION: ReferenceChart = ReferenceChart {
    title: "Seasonal Variations in Major Categories",
    kind: ChartKind::Line,
    unit: "Daily kWh",
    labels: &[
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    datasets: &[
        Dataset {
            label: "Home Energy",
            values: &[
                65.0, 60.0, 45.0, 35.0, 30.0, 45.0, 55.0, 55.0, 40.0, 35.0, 45.0, 65.0,
            ],
            color: HOME,
        },
        Dataset {
            label: "Transportation",
            values: &[
                40.0, 40.0, 41.0, 42.0, 43.0, 45.0, 48.0, 48.0, 43.0, 42.0, 41.0, 40.0,
            ],
            color: TRANSPORT,
        },
        Dataset {
            label: "Digital",
            values: &[
                11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 13.0, 13.0, 12.0, 12.0, 11.0, 11.0,
            ],
            color: DIGITAL,
        },
    ],
    label_colors: None,
};

/// Reference charts in page order.
pub const REFERENCE_CHARTS: [ReferenceChart; 7] = [
    MAIN_BREAKDOWN,
    CATEGORY_DATA,
    HIDDEN_VS_VISIBLE,
    DIGITAL_INFRASTRUCTURE,
    HOME_PROFILE,
    EQUIVALENTS,
    ANNUAL_VARIATION,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_matches_its_labels() {
        for chart in REFERENCE_CHARTS {
            for dataset in chart.datasets {
                assert_eq!(
                    dataset.values.len(),
                    chart.labels.len(),
                    "{} / {}",
                    chart.title,
                    dataset.label
                );
            }
            if let Some(colors) = chart.label_colors {
                assert_eq!(colors.len(), chart.labels.len(), "{}", chart.title);
            }
        }
    }

    #[test]
    fn category_breakdown_sums_to_typical_day() {
        let total: f64 = CATEGORY_DATA.datasets[0].values.iter().sum();
        assert_eq!(total, 140.0);
    }
}
