use super::HouseholdRecord;
use crate::model::{cost::CostSchedule, ZoneId};

/// running cost state of a single household during aggregation.
///
/// the cost only ever grows while persons and trips are folded in. it starts
/// at the fixed cost of owning the household's vehicles.
#[derive(Clone, Debug, PartialEq)]
pub struct Household {
    /// annual income in thousands of currency units
    pub income: f64,
    pub zone: ZoneId,
    pub vehicle_count: u32,
    /// accumulated annual cost in currency units
    pub cost: f64,
}

impl Household {
    pub fn new(record: &HouseholdRecord, schedule: &CostSchedule) -> Household {
        Household {
            income: record.income,
            zone: record.zone,
            vehicle_count: record.vehicle_count,
            cost: record.vehicle_count as f64 * schedule.auto_fixed_cost,
        }
    }

    pub fn add_cost(&mut self, amount: f64) {
        self.cost += amount;
    }

    /// annual cost as a percentage of annual income, or None when the household
    /// reports no positive income.
    pub fn proportion(&self) -> Option<f64> {
        if self.income > 0.0 {
            Some(self.cost / (self.income * 1000.0) * 100.0)
        } else {
            None
        }
    }
}
