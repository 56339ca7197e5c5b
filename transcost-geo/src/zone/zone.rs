use geo::{BoundingRect, Contains, MultiPolygon, Point, Rect};
use transcost_core::model::ZoneId;

use crate::GeoError;

/// an administrative zone boundary with its bounding box precomputed for
/// sampling.
#[derive(Clone, Debug)]
pub struct Zone {
    pub id: ZoneId,
    pub boundary: MultiPolygon<f64>,
    pub bbox: Rect<f64>,
}

impl Zone {
    /// builds a zone, deriving the bounding box from the boundary itself so the
    /// box always covers the polygon. empty or non-finite boundaries fail.
    pub fn new(id: ZoneId, boundary: MultiPolygon<f64>) -> Result<Zone, GeoError> {
        let bbox = boundary.bounding_rect().ok_or_else(|| {
            GeoError::Build(format!("zone {id} has an empty boundary"))
        })?;
        let (min, max) = (bbox.min(), bbox.max());
        if !(min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite()) {
            return Err(GeoError::Build(format!(
                "zone {id} boundary has non-finite coordinates"
            )));
        }
        Ok(Zone { id, boundary, bbox })
    }

    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.boundary.contains(point)
    }
}
