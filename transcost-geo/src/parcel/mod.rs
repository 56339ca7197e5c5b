mod parcel;
mod parcel_index;
mod topology_fault;

pub use parcel::Parcel;
pub use parcel_index::{ParcelIndex, ParcelMatch};
pub use topology_fault::TopologyFault;
