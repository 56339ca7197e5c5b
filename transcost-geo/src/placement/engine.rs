use std::sync::{Arc, Mutex};

use kdam::{tqdm, Bar, BarExt};
use rand::{prelude::*, rngs::StdRng};
use rayon::prelude::*;
use transcost_core::{aggregate::HouseholdSummary, util::rounding::round_to_decimals};

use super::{HouseholdPoint, PlacementConfig, PlacementOutcome, PlacementStats, PointSampler};
use crate::{parcel::ParcelIndex, transform::CoordinateTransform, zone::ZoneCollection, GeoError};

/// decimal places kept on output longitude and latitude
const COORDINATE_DECIMALS: usize = 5;

/// places aggregated households at random points inside their zones,
/// preferring residential parcels.
///
/// each household draws from its own generator, seeded from the run seed and
/// the household's position in the input. a run is therefore reproducible
/// from its seed, and sequential and parallel runs produce identical output.
pub struct PlacementEngine<'a> {
    zones: &'a ZoneCollection,
    parcels: &'a ParcelIndex,
    transform: &'a dyn CoordinateTransform,
    sampler: PointSampler,
    seed: u64,
    parallel: bool,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(
        zones: &'a ZoneCollection,
        parcels: &'a ParcelIndex,
        transform: &'a dyn CoordinateTransform,
        config: &PlacementConfig,
    ) -> PlacementEngine<'a> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::info!("no placement seed configured, using generated seed {seed}");
                seed
            }
        };
        PlacementEngine {
            zones,
            parcels,
            transform,
            sampler: PointSampler::new(config.max_tries),
            seed,
            parallel: config.parallel,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// places the household at position `index` of the input collection.
    pub fn place_household(&self, index: usize, household: &HouseholdSummary) -> PlacementOutcome {
        let zone = match self.zones.get(&household.zone) {
            Some(zone) => zone,
            None => {
                log::debug!("household {index} is in unknown zone {}", household.zone);
                return PlacementOutcome::ZoneMissing;
            }
        };

        let mut rng = StdRng::seed_from_u64(household_seed(self.seed, index));
        let sample = self.sampler.sample(zone, self.parcels, &mut rng);
        let projected = match sample.point {
            Some(point) => point,
            None => {
                log::debug!(
                    "household {index} could not be placed in zone {} after {} tries",
                    zone.id,
                    sample.tries
                );
                return PlacementOutcome::Exhausted {
                    topology_faults: sample.topology_faults,
                };
            }
        };

        match self.transform.to_geographic(projected) {
            Ok(geographic) => PlacementOutcome::Placed {
                projected,
                point: HouseholdPoint {
                    lon: round_to_decimals(geographic.x(), COORDINATE_DECIMALS),
                    lat: round_to_decimals(geographic.y(), COORDINATE_DECIMALS),
                    cost: household.cost,
                    proportion: household.proportion,
                },
                tries: sample.tries,
                topology_faults: sample.topology_faults,
            },
            Err(e) => {
                log::warn!("household {index} dropped: {e}");
                PlacementOutcome::TransformFailed {
                    topology_faults: sample.topology_faults,
                }
            }
        }
    }

    /// places every household and hands each placed point to `write` in input
    /// order. households that cannot be placed are counted and skipped. only a
    /// failure of `write` stops the run.
    pub fn run<W>(
        &self,
        households: &[HouseholdSummary],
        mut write: W,
    ) -> Result<PlacementStats, GeoError>
    where
        W: FnMut(&HouseholdPoint) -> Result<(), GeoError>,
    {
        let mut stats = PlacementStats::default();
        if self.parallel {
            for outcome in self.place_parallel(households)? {
                write_outcome(&outcome, &mut write)?;
                stats.add(&outcome);
            }
        } else {
            let iter = tqdm!(
                households.iter().enumerate(),
                total = households.len(),
                desc = "placing households"
            );
            for (index, household) in iter {
                let outcome = self.place_household(index, household);
                write_outcome(&outcome, &mut write)?;
                stats.add(&outcome);
            }
        }
        eprintln!();
        log::info!("finished placing households: {stats}");
        Ok(stats)
    }

    fn place_parallel(
        &self,
        households: &[HouseholdSummary],
    ) -> Result<Vec<PlacementOutcome>, GeoError> {
        let bar = Arc::new(Mutex::new(
            Bar::builder()
                .desc("placing households")
                .total(households.len())
                .build()
                .map_err(|e| GeoError::Build(format!("progress bar error: {e}")))?,
        ));
        let outcomes = households
            .par_iter()
            .enumerate()
            .map(|(index, household)| {
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                self.place_household(index, household)
            })
            .collect::<Vec<_>>();
        Ok(outcomes)
    }
}

/// seed of the generator for the household at `index`. the index is mixed
/// into the run seed (splitmix64 finalizer) so neighboring run seeds do not
/// share household streams.
fn household_seed(seed: u64, index: usize) -> u64 {
    let mut z = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn write_outcome<W>(outcome: &PlacementOutcome, write: &mut W) -> Result<(), GeoError>
where
    W: FnMut(&HouseholdPoint) -> Result<(), GeoError>,
{
    match outcome {
        PlacementOutcome::Placed { point, .. } => write(point),
        _ => Ok(()),
    }
}
