use std::{collections::HashMap, path::Path};

use transcost_core::model::ZoneId;

use super::Zone;
use crate::{
    util::geojson_ops::{self, FeatureRecord},
    GeoError,
};

/// all zone boundaries of a study area, keyed by zone id.
#[derive(Clone, Debug, Default)]
pub struct ZoneCollection(HashMap<ZoneId, Zone>);

impl ZoneCollection {
    /// reads zones from a feature collection whose features carry the zone id
    /// in the `id_property` property.
    pub fn read(path: &Path, id_property: &str) -> Result<ZoneCollection, GeoError> {
        let features = geojson_ops::read_features(path)?;
        let zones = ZoneCollection::from_features(&features, id_property, path)?;
        log::info!("loaded {} zones from {}", zones.len(), path.display());
        Ok(zones)
    }

    pub fn from_features(
        features: &[FeatureRecord],
        id_property: &str,
        path: &Path,
    ) -> Result<ZoneCollection, GeoError> {
        let mut zones = HashMap::with_capacity(features.len());
        for (n, feature) in features.iter().enumerate() {
            let id = ZoneId(geojson_ops::integer_property(feature, id_property, n, path)?);
            let boundary = geojson_ops::multipolygon_geometry(feature, n, path)?;
            let zone = Zone::new(id, boundary)?;
            if zones.insert(id, zone).is_some() {
                log::warn!("zone {id} appears more than once in {}, keeping the last", path.display());
            }
        }
        Ok(ZoneCollection(zones))
    }

    pub fn get(&self, id: &ZoneId) -> Option<&Zone> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Zone> for ZoneCollection {
    fn from_iter<T: IntoIterator<Item = Zone>>(iter: T) -> Self {
        ZoneCollection(iter.into_iter().map(|z| (z.id, z)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_features() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"id": 1}, "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}},
            {"type": "Feature", "properties": {"id": "2"}, "geometry": {"type": "Polygon", "coordinates": [[[10,0],[20,0],[20,10],[10,10],[10,0]]]}}
        ]}"#;
        let path = Path::new("zones.json");
        let features = geojson_ops::parse_features(json.as_bytes(), path).unwrap();
        let zones = ZoneCollection::from_features(&features, "id", path).unwrap();
        assert_eq!(zones.len(), 2);
        let zone = zones.get(&ZoneId(2)).unwrap();
        assert_eq!(zone.bbox.min().x, 10.0);
        assert!(zones.get(&ZoneId(3)).is_none());
    }

    #[test]
    fn test_missing_id_property_fails() {
        let json = r#"{"features": [
            {"properties": {"name": "downtown"}, "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,0]]]}}
        ]}"#;
        let path = Path::new("zones.json");
        let features = geojson_ops::parse_features(json.as_bytes(), path).unwrap();
        let result = ZoneCollection::from_features(&features, "id", path);
        assert!(matches!(result, Err(GeoError::Deserialize { .. })));
    }
}
