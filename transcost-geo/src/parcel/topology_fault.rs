/// a defect in a parcel polygon that makes containment tests meaningless.
/// faulted parcels never match a point.
#[derive(Clone, Debug, PartialEq)]
pub enum TopologyFault {
    EmptyGeometry,
    /// a ring needs at least four coordinates, the last repeating the first
    ShortRing { coordinates: usize },
    NonFiniteCoordinate,
    ZeroArea,
}

impl std::fmt::Display for TopologyFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyFault::EmptyGeometry => write!(f, "empty geometry"),
            TopologyFault::ShortRing { coordinates } => {
                write!(f, "ring has only {coordinates} coordinates")
            }
            TopologyFault::NonFiniteCoordinate => write!(f, "non-finite coordinate"),
            TopologyFault::ZeroArea => write!(f, "polygon has zero area"),
        }
    }
}
