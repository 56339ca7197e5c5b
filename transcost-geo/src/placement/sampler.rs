use geo::Point;
use rand::prelude::*;

use crate::{parcel::ParcelIndex, zone::Zone};

/// result of sampling a point for one household.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSample {
    /// the accepted point, or None when every draw was rejected
    pub point: Option<Point<f64>>,
    /// draws used, including the accepted one
    pub tries: usize,
    pub topology_faults: usize,
}

/// rejection sampler for points inside a zone.
///
/// candidates are drawn uniformly over the zone's bounding box and must land
/// inside the zone boundary. when the zone has residential parcels the point
/// must also fall inside one of them, found through the parcel index.
#[derive(Clone, Copy, Debug)]
pub struct PointSampler {
    max_tries: usize,
}

impl PointSampler {
    pub fn new(max_tries: usize) -> PointSampler {
        PointSampler { max_tries }
    }

    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    pub fn sample<R: Rng + ?Sized>(
        &self,
        zone: &Zone,
        parcels: &ParcelIndex,
        rng: &mut R,
    ) -> ZoneSample {
        let check_parcels = parcels.has_parcels(&zone.id);
        let (min, max) = (zone.bbox.min(), zone.bbox.max());
        let mut topology_faults = 0;
        for attempt in 1..=self.max_tries {
            let x = rng.random_range(min.x..=max.x);
            let y = rng.random_range(min.y..=max.y);
            let point = Point::new(x, y);
            if !zone.contains(&point) {
                continue;
            }
            if !check_parcels {
                return ZoneSample {
                    point: Some(point),
                    tries: attempt,
                    topology_faults,
                };
            }
            let parcel_match = parcels.find_containing(&point);
            topology_faults += parcel_match.topology_faults;
            if parcel_match.found {
                return ZoneSample {
                    point: Some(point),
                    tries: attempt,
                    topology_faults,
                };
            }
        }
        ZoneSample {
            point: None,
            tries: self.max_tries,
            topology_faults,
        }
    }
}
