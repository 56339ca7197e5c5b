use geo::Point;
use proj4rs::{transform::transform, Proj};

use super::{CoordinateTransform, ProjectionConfig};
use crate::GeoError;

/// coordinate transform between a projected system and a geographic system,
/// both given as PROJ strings.
pub struct ProjTransform {
    projected: Proj,
    geographic: Proj,
}

impl ProjTransform {
    pub fn new(projected: &str, geographic: &str) -> Result<ProjTransform, GeoError> {
        let projected = Proj::from_proj_string(projected).map_err(|e| {
            GeoError::Build(format!("invalid projected system '{projected}': {e:?}"))
        })?;
        let geographic = Proj::from_proj_string(geographic).map_err(|e| {
            GeoError::Build(format!("invalid geographic system '{geographic}': {e:?}"))
        })?;
        Ok(ProjTransform {
            projected,
            geographic,
        })
    }

    /// inverse of [CoordinateTransform::to_geographic]: longitude/latitude in
    /// degrees into projected coordinates.
    pub fn to_projected(&self, point: Point<f64>) -> Result<Point<f64>, GeoError> {
        let mut coord = (point.x().to_radians(), point.y().to_radians(), 0.0);
        transform(&self.geographic, &self.projected, &mut coord).map_err(|e| {
            GeoError::Transform(format!("({}, {}): {e:?}", point.x(), point.y()))
        })?;
        Ok(Point::new(coord.0, coord.1))
    }
}

impl TryFrom<&ProjectionConfig> for ProjTransform {
    type Error = GeoError;

    fn try_from(config: &ProjectionConfig) -> Result<Self, Self::Error> {
        ProjTransform::new(&config.source, &config.target)
    }
}

impl CoordinateTransform for ProjTransform {
    fn to_geographic(&self, point: Point<f64>) -> Result<Point<f64>, GeoError> {
        let mut coord = (point.x(), point.y(), 0.0);
        transform(&self.projected, &self.geographic, &mut coord).map_err(|e| {
            GeoError::Transform(format!("({}, {}): {e:?}", point.x(), point.y()))
        })?;
        let (lon, lat) = (coord.0.to_degrees(), coord.1.to_degrees());
        if !(lon.is_finite() && lat.is_finite()) {
            return Err(GeoError::Transform(format!(
                "({}, {}) has no geographic equivalent",
                point.x(),
                point.y()
            )));
        }
        Ok(Point::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_meridian() {
        let transform = ProjTransform::try_from(&ProjectionConfig::default()).unwrap();
        let geo = transform
            .to_geographic(Point::new(0.0, 5_900_000.0))
            .unwrap();
        assert!((geo.x() - -114.0).abs() < 1e-9);
        assert!(geo.y() > 53.0 && geo.y() < 53.5);
    }

    #[test]
    fn test_round_trip() {
        let transform = ProjTransform::try_from(&ProjectionConfig::default()).unwrap();
        let projected = Point::new(31_250.0, 5_935_120.0);
        let geo = transform.to_geographic(projected).unwrap();
        // east of the central meridian
        assert!(geo.x() > -114.0);
        let back = transform.to_projected(geo).unwrap();
        assert!((back.x() - projected.x()).abs() < 1e-3);
        assert!((back.y() - projected.y()).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_definition() {
        let result = ProjTransform::new("+proj=nonsense", "+proj=longlat +ellps=GRS80");
        assert!(matches!(result, Err(GeoError::Build(_))));
    }
}
