use serde::{Deserialize, Serialize};

/// a placed household: geographic position rounded to 5 decimal places
/// (about one meter) with the household's monthly cost and income share.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HouseholdPoint {
    pub lon: f64,
    pub lat: f64,
    pub cost: i64,
    pub proportion: i64,
}
