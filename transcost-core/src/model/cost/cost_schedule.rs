use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::model::trip::ModeCategory;

/// unit costs and mode classifications used to price a household's travel.
/// every field has a default so a configuration may override any subset.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CostSchedule {
    /// operating cost per vehicle-km: 17.5 cents operating plus 5 cents
    /// depreciation and marginal insurance
    #[serde(default = "default_auto_op_cost")]
    pub auto_op_cost: f64,
    /// annual fixed cost of owning a single vehicle
    #[serde(default = "default_auto_fixed_cost")]
    pub auto_fixed_cost: f64,
    /// average fare of a single transit trip across payment methods
    #[serde(default = "default_avg_transit_fare")]
    pub avg_transit_fare: f64,
    /// annual cost of an operator's license
    #[serde(default = "default_annual_license_cost")]
    pub annual_license_cost: f64,
    /// days per year a commuting vehicle is driven
    #[serde(default = "default_annual_vehicle_days")]
    pub annual_vehicle_days: f64,
    /// days per year a commuter rides transit
    #[serde(default = "default_annual_transit_days")]
    pub annual_transit_days: f64,
    /// annual transit pass cost by person type code
    #[serde(default = "default_pass_cost")]
    pub pass_cost: IndexMap<String, f64>,
    /// auto mode codes and the scale from person-km to vehicle-km
    #[serde(default = "default_auto_modes")]
    pub auto_modes: IndexMap<String, f64>,
    #[serde(default = "default_transit_modes")]
    pub transit_modes: IndexSet<String>,
    #[serde(default = "default_active_modes")]
    pub active_modes: IndexSet<String>,
}

impl CostSchedule {
    pub fn classify(&self, mode: &str) -> ModeCategory {
        if let Some(vkt_scale) = self.auto_modes.get(mode) {
            ModeCategory::Auto {
                vkt_scale: *vkt_scale,
            }
        } else if self.transit_modes.contains(mode) {
            ModeCategory::Transit
        } else if self.active_modes.contains(mode) {
            ModeCategory::Active
        } else {
            ModeCategory::Unrecognized
        }
    }

    /// annualized cost of repeating an auto trip of this many person-km.
    pub fn annual_driving_cost(&self, distance_km: f64, vkt_scale: f64) -> f64 {
        distance_km * vkt_scale * self.auto_op_cost * self.annual_vehicle_days
    }

    /// annualized cost of repeating a transit trip without a pass.
    pub fn annual_transit_cost(&self) -> f64 {
        self.avg_transit_fare * self.annual_transit_days
    }

    pub fn pass_cost(&self, person_type: &str) -> Option<f64> {
        self.pass_cost.get(person_type).copied()
    }
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            auto_op_cost: default_auto_op_cost(),
            auto_fixed_cost: default_auto_fixed_cost(),
            avg_transit_fare: default_avg_transit_fare(),
            annual_license_cost: default_annual_license_cost(),
            annual_vehicle_days: default_annual_vehicle_days(),
            annual_transit_days: default_annual_transit_days(),
            pass_cost: default_pass_cost(),
            auto_modes: default_auto_modes(),
            transit_modes: default_transit_modes(),
            active_modes: default_active_modes(),
        }
    }
}

fn default_auto_op_cost() -> f64 {
    0.225
}

fn default_auto_fixed_cost() -> f64 {
    3750.0
}

fn default_avg_transit_fare() -> f64 {
    3.0
}

fn default_annual_license_cost() -> f64 {
    25.0
}

fn default_annual_vehicle_days() -> f64 {
    330.0
}

fn default_annual_transit_days() -> f64 {
    300.0
}

fn default_pass_cost() -> IndexMap<String, f64> {
    [
        ("YO", 0.0),     // preschool
        ("Elem", 560.0), // elementary
        ("JHS", 560.0),  // junior high school
        ("SHS", 560.0),  // high school
        ("PSE", 800.0),  // post-secondary
        ("WFT", 1200.0), // worker full-time
        ("WPT", 1200.0), // worker part-time
        ("AO", 1200.0),  // adult (other)
        ("SEN", 135.0),  // senior
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_auto_modes() -> IndexMap<String, f64> {
    [("SOV", 1.0), ("HOV2", 0.5), ("HOV3", 0.3125), ("SB", 0.3125)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn default_transit_modes() -> IndexSet<String> {
    ["WAT", "DAT", "PNR", "RNUP", "KNR", "RNK"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_active_modes() -> IndexSet<String> {
    ["Walk", "Bike"].into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_modes() {
        let schedule = CostSchedule::default();
        assert_eq!(
            schedule.classify("HOV2"),
            ModeCategory::Auto { vkt_scale: 0.5 }
        );
        assert_eq!(schedule.classify("KNR"), ModeCategory::Transit);
        assert_eq!(schedule.classify("Bike"), ModeCategory::Active);
        assert_eq!(schedule.classify("Taxi"), ModeCategory::Unrecognized);
        // codes are case-sensitive
        assert_eq!(schedule.classify("walk"), ModeCategory::Unrecognized);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{ "auto_op_cost": 0.3, "active_modes": ["Walk", "Bike", "Scooter"] }"#;
        let schedule: CostSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.auto_op_cost, 0.3);
        assert_eq!(schedule.auto_fixed_cost, 3750.0);
        assert_eq!(schedule.classify("Scooter"), ModeCategory::Active);
        assert_eq!(schedule.pass_cost("SEN"), Some(135.0));
    }

    #[test]
    fn test_annual_costs() {
        let schedule = CostSchedule::default();
        assert!((schedule.annual_driving_cost(10.0, 1.0) - 742.5).abs() < 1e-9);
        assert_eq!(schedule.annual_transit_cost(), 900.0);
    }
}
