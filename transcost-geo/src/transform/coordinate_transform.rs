use geo::Point;

use crate::GeoError;

/// converts planar projected coordinates into geographic coordinates.
///
/// implementations are shared by reference across placement workers, so they
/// must be stateless or internally synchronized.
pub trait CoordinateTransform: Send + Sync {
    /// maps a projected point to a geographic point in degrees, with x holding
    /// the longitude and y the latitude.
    fn to_geographic(&self, point: Point<f64>) -> Result<Point<f64>, GeoError>;
}
