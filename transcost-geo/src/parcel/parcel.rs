use geo::{Area, Contains, MultiPolygon, Point};
use transcost_core::model::ZoneId;

use super::TopologyFault;

/// a residential parcel footprint. the zone is only used to know which zones
/// have parcels at all, it is not checked against the zone boundary.
#[derive(Clone, Debug)]
pub struct Parcel {
    pub zone: ZoneId,
    pub boundary: MultiPolygon<f64>,
    pub fault: Option<TopologyFault>,
}

impl Parcel {
    pub fn new(zone: ZoneId, boundary: MultiPolygon<f64>) -> Parcel {
        let fault = check_topology(&boundary).err();
        Parcel {
            zone,
            boundary,
            fault,
        }
    }

    /// tests true polygon containment, failing for parcels with a topology
    /// fault.
    pub fn try_contains(&self, point: &Point<f64>) -> Result<bool, TopologyFault> {
        match &self.fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(self.boundary.contains(point)),
        }
    }
}

fn check_topology(boundary: &MultiPolygon<f64>) -> Result<(), TopologyFault> {
    if boundary.0.is_empty() {
        return Err(TopologyFault::EmptyGeometry);
    }
    for polygon in boundary.0.iter() {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            let coordinates = ring.0.len();
            if coordinates < 4 {
                return Err(TopologyFault::ShortRing { coordinates });
            }
            if ring.0.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
                return Err(TopologyFault::NonFiniteCoordinate);
            }
        }
    }
    if boundary.unsigned_area() <= 0.0 {
        return Err(TopologyFault::ZeroArea);
    }
    Ok(())
}
