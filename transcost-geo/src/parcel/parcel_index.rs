use std::{collections::HashSet, path::Path};

use geo::{BoundingRect, Point};
use rstar::{
    primitives::{GeomWithData, Rectangle},
    RTree, AABB,
};
use transcost_core::model::ZoneId;

use super::Parcel;
use crate::{util::geojson_ops, GeoError};

/// bounding box of a parcel tagged with the parcel's position in the
/// collection.
type ParcelEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// result of looking for a parcel that contains a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParcelMatch {
    pub found: bool,
    /// candidate parcels skipped because of a topology fault
    pub topology_faults: usize,
}

/// residential parcels with an R-tree over their bounding boxes.
///
/// point queries first narrow the parcels to those whose box covers the point
/// and only then run exact polygon containment. the index is filled once and
/// is read-only while households are placed.
pub struct ParcelIndex {
    rtree: RTree<ParcelEnvelope>,
    parcels: Vec<Parcel>,
    zones: HashSet<ZoneId>,
}

impl ParcelIndex {
    pub fn new(parcels: Vec<Parcel>) -> ParcelIndex {
        let envelopes = parcels
            .iter()
            .enumerate()
            .filter_map(|(idx, parcel)| parcel_envelope(idx, parcel))
            .collect::<Vec<_>>();
        let zones = parcels.iter().map(|p| p.zone).collect();
        ParcelIndex {
            rtree: RTree::bulk_load(envelopes),
            parcels,
            zones,
        }
    }

    pub fn empty() -> ParcelIndex {
        ParcelIndex::new(vec![])
    }

    /// reads parcels from a feature collection, decompressing by file
    /// extension. the zone of each parcel is read from `zone_property`.
    pub fn read(path: &Path, zone_property: &str) -> Result<ParcelIndex, GeoError> {
        let features = geojson_ops::read_features(path)?;
        let mut parcels = Vec::with_capacity(features.len());
        for (n, feature) in features.iter().enumerate() {
            let zone = ZoneId(geojson_ops::integer_property(
                feature,
                zone_property,
                n,
                path,
            )?);
            let boundary = geojson_ops::multipolygon_geometry(feature, n, path)?;
            let parcel = Parcel::new(zone, boundary);
            if let Some(fault) = &parcel.fault {
                log::warn!("parcel {n} in zone {zone} has a topology fault: {fault}");
            }
            parcels.push(parcel);
        }
        let index = ParcelIndex::new(parcels);
        log::info!(
            "loaded {} parcels covering {} zones from {}",
            index.len(),
            index.zones.len(),
            path.display()
        );
        Ok(index)
    }

    /// adds a parcel while the index is being built. returns the position of
    /// the parcel in the collection.
    pub fn insert(&mut self, parcel: Parcel) -> usize {
        let idx = self.parcels.len();
        if let Some(envelope) = parcel_envelope(idx, &parcel) {
            self.rtree.insert(envelope);
        }
        let _ = self.zones.insert(parcel.zone);
        self.parcels.push(parcel);
        idx
    }

    /// true when at least one parcel is tagged with this zone.
    pub fn has_parcels(&self, zone: &ZoneId) -> bool {
        self.zones.contains(zone)
    }

    pub fn get(&self, idx: usize) -> Option<&Parcel> {
        self.parcels.get(idx)
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// positions of parcels whose bounding box covers the point.
    pub fn candidates(&self, point: &Point<f64>) -> impl Iterator<Item = usize> + '_ {
        let envelope = AABB::from_point([point.x(), point.y()]);
        self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.data)
    }

    /// finds whether any parcel truly contains the point. faulted candidates
    /// are skipped and counted, they never fail the search.
    pub fn find_containing(&self, point: &Point<f64>) -> ParcelMatch {
        let mut result = ParcelMatch::default();
        for idx in self.candidates(point) {
            match self.parcels[idx].try_contains(point) {
                Ok(true) => {
                    result.found = true;
                    break;
                }
                Ok(false) => {}
                Err(_) => result.topology_faults += 1,
            }
        }
        result
    }
}

fn parcel_envelope(idx: usize, parcel: &Parcel) -> Option<ParcelEnvelope> {
    let rect = parcel.boundary.bounding_rect()?;
    let (min, max) = (rect.min(), rect.max());
    Some(GeomWithData::new(
        Rectangle::from_corners([min.x, min.y], [max.x, max.y]),
        idx,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    fn square(x: f64, y: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: x, y: y),
            (x: x + size, y: y),
            (x: x + size, y: y + size),
            (x: x, y: y + size),
            (x: x, y: y),
        ]])
    }

    /// a triangle whose bounding box covers points the triangle does not
    fn triangle(x: f64, y: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: x, y: y),
            (x: x + size, y: y),
            (x: x, y: y + size),
            (x: x, y: y),
        ]])
    }

    #[test]
    fn test_candidates_use_bounding_boxes() {
        let index = ParcelIndex::new(vec![
            Parcel::new(ZoneId(1), square(0.0, 0.0, 10.0)),
            Parcel::new(ZoneId(1), triangle(20.0, 0.0, 10.0)),
            Parcel::new(ZoneId(2), square(100.0, 100.0, 10.0)),
        ]);
        let mut found = index.candidates(&Point::new(5.0, 5.0)).collect::<Vec<_>>();
        found.sort();
        assert_eq!(found, vec![0]);
        assert_eq!(index.candidates(&Point::new(50.0, 50.0)).count(), 0);

        // inside the triangle's box but outside the triangle
        let corner = Point::new(29.0, 9.0);
        assert_eq!(index.candidates(&corner).collect::<Vec<_>>(), vec![1]);
        assert!(!index.find_containing(&corner).found);
        assert!(index.find_containing(&Point::new(21.0, 1.0)).found);
    }

    #[test]
    fn test_zones_with_parcels() {
        let mut index = ParcelIndex::empty();
        assert!(index.is_empty());
        assert!(!index.has_parcels(&ZoneId(4)));
        let idx = index.insert(Parcel::new(ZoneId(4), square(0.0, 0.0, 1.0)));
        assert_eq!(idx, 0);
        assert!(index.has_parcels(&ZoneId(4)));
        assert!(index.find_containing(&Point::new(0.5, 0.5)).found);
    }

    #[test]
    fn test_faulted_parcel_is_skipped() {
        let degenerate = MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0), (x: 10.0, y: 10.0), (x: 5.0, y: 5.0), (x: 0.0, y: 0.0)
        ]]);
        let index = ParcelIndex::new(vec![
            Parcel::new(ZoneId(1), degenerate),
            Parcel::new(ZoneId(1), square(4.0, 4.0, 2.0)),
        ]);
        let result = index.find_containing(&Point::new(5.0, 4.5));
        assert!(result.found);

        let result = index.find_containing(&Point::new(2.0, 1.0));
        assert_eq!(
            result,
            ParcelMatch {
                found: false,
                topology_faults: 1
            }
        );
    }
}
