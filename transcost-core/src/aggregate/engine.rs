use std::collections::HashMap;

use indexmap::IndexMap;

use super::{AggregationError, AggregationStats, HouseholdSummary};
use crate::{
    model::{
        cost::CostSchedule,
        household::{Household, HouseholdId, HouseholdRecord},
        person::{PersonId, PersonRecord},
        trip::{ModeCategory, TripRecord},
    },
    util::rounding::round_half_even,
};

/// joins household, person and trip rows into an annual transportation cost
/// per household.
///
/// rows must arrive households first, then persons, then trips: every person
/// and trip has to reference a household that was already added. households
/// keep their input order through to [CostAggregationEngine::finish].
pub struct CostAggregationEngine {
    schedule: CostSchedule,
    households: IndexMap<HouseholdId, Household>,
    transit_passes: HashMap<PersonId, bool>,
    stats: AggregationStats,
}

impl CostAggregationEngine {
    pub fn new(schedule: CostSchedule) -> CostAggregationEngine {
        CostAggregationEngine {
            schedule,
            households: IndexMap::new(),
            transit_passes: HashMap::new(),
            stats: AggregationStats::default(),
        }
    }

    /// runs a complete aggregation over three row streams. the first error in
    /// any stream aborts the run.
    pub fn run<H, P, T>(
        schedule: CostSchedule,
        households: H,
        persons: P,
        trips: T,
    ) -> Result<(Vec<HouseholdSummary>, AggregationStats), AggregationError>
    where
        H: IntoIterator<Item = Result<HouseholdRecord, AggregationError>>,
        P: IntoIterator<Item = Result<PersonRecord, AggregationError>>,
        T: IntoIterator<Item = Result<TripRecord, AggregationError>>,
    {
        let mut engine = CostAggregationEngine::new(schedule);
        for row in households {
            engine.add_household(&row?);
        }
        log::info!("read {} households", engine.households.len());
        for row in persons {
            engine.add_person(&row?)?;
        }
        log::info!("read {} persons", engine.stats.persons);
        for row in trips {
            engine.add_trip(&row?)?;
        }
        log::info!("read {} trips", engine.stats.trips);
        Ok(engine.finish())
    }

    pub fn schedule(&self) -> &CostSchedule {
        &self.schedule
    }

    pub fn household(&self, household_id: &HouseholdId) -> Option<&Household> {
        self.households.get(household_id)
    }

    /// registers a household with its fixed vehicle cost. a repeated id
    /// replaces the earlier row but keeps its position.
    pub fn add_household(&mut self, record: &HouseholdRecord) {
        self.stats.households += 1;
        let household = Household::new(record, &self.schedule);
        if let Some(prev) = self.households.insert(record.household_id, household) {
            log::warn!(
                "household {} appears more than once, replacing row with zone {} and income {}",
                record.household_id,
                prev.zone,
                prev.income
            );
            self.stats.duplicate_households += 1;
        }
    }

    /// adds license and transit pass costs for a person and remembers whether
    /// they hold a pass for later trip pricing.
    pub fn add_person(&mut self, record: &PersonRecord) -> Result<(), AggregationError> {
        self.stats.persons += 1;
        let person_id = record.person_id();
        let has_pass = record.has_transit_pass();
        let _ = self.transit_passes.insert(person_id.clone(), has_pass);

        let household = self
            .households
            .get_mut(&record.household_id)
            .ok_or_else(|| AggregationError::UnknownHousehold {
                household_id: record.household_id,
                context: format!("person {person_id}"),
            })?;

        if record.has_license() {
            household.add_cost(self.schedule.annual_license_cost);
        }
        if has_pass {
            let pass_cost = self.schedule.pass_cost(&record.person_type).ok_or_else(|| {
                AggregationError::UnknownPersonType {
                    person_id,
                    person_type: record.person_type.clone(),
                }
            })?;
            household.add_cost(pass_cost);
        }
        Ok(())
    }

    /// prices a single daily trip as if repeated over the year.
    pub fn add_trip(&mut self, record: &TripRecord) -> Result<(), AggregationError> {
        self.stats.trips += 1;
        let household = self
            .households
            .get_mut(&record.household_id)
            .ok_or_else(|| AggregationError::UnknownHousehold {
                household_id: record.household_id,
                context: format!("trip by person {}", record.person_id()),
            })?;

        match self.schedule.classify(&record.mode) {
            ModeCategory::Auto { vkt_scale } => {
                let distance_km = record.distance_km.ok_or_else(|| {
                    AggregationError::MissingDistance {
                        row: self.stats.trips,
                        person_id: record.person_id(),
                        mode: record.mode.clone(),
                    }
                })?;
                let cost = self.schedule.annual_driving_cost(distance_km, vkt_scale);
                household.add_cost(cost);
            }
            ModeCategory::Transit => {
                let person_id = record.person_id();
                let has_pass = self
                    .transit_passes
                    .get(&person_id)
                    .ok_or(AggregationError::UnknownPerson { person_id })?;
                // pass holders already paid for the year at the person level
                if !has_pass {
                    household.add_cost(self.schedule.annual_transit_cost());
                }
            }
            ModeCategory::Active => {}
            ModeCategory::Unrecognized => {
                if self.stats.add_unrecognized_mode(&record.mode) {
                    log::warn!(
                        "trip mode '{}' is not an auto, transit or active mode, trips with this mode add no cost",
                        record.mode
                    );
                }
            }
        }
        Ok(())
    }

    /// converts every household with positive income into a summary, dropping
    /// households that spend more than their whole income on travel.
    pub fn finish(self) -> (Vec<HouseholdSummary>, AggregationStats) {
        let mut stats = self.stats;
        let mut summaries = Vec::with_capacity(self.households.len());
        for (household_id, household) in self.households.into_iter() {
            let proportion = match household.proportion() {
                Some(p) => p,
                None => {
                    stats.zero_income += 1;
                    continue;
                }
            };
            if !(household.cost.is_finite() && proportion.is_finite()) {
                log::warn!(
                    "household {household_id} has non-finite cost {}, excluded",
                    household.cost
                );
                stats.non_finite_cost += 1;
                continue;
            }
            if proportion > 100.0 {
                log::debug!(
                    "household {household_id} spends {proportion:.1}% of income on travel, excluded"
                );
                stats.over_income += 1;
                continue;
            }
            summaries.push(HouseholdSummary {
                zone: household.zone,
                cost: round_half_even(household.cost / 12.0),
                proportion: round_half_even(proportion),
            });
        }
        stats.emitted = summaries.len();
        log::info!("finished aggregating household costs: {stats}");
        (summaries, stats)
    }
}
