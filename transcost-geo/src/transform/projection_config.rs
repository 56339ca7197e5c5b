use serde::{Deserialize, Serialize};

/// PROJ definitions of the geometry input system and the output system.
/// defaults to NAD83 / Alberta 3TM ref. merid. 114 W (EPSG:3776) into
/// WGS 84 longitude/latitude (EPSG:4326).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProjectionConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

fn default_source() -> String {
    String::from(
        "+proj=tmerc +lat_0=0 +lon_0=-114 +k=0.9999 +x_0=0 +y_0=0 +ellps=GRS80 +units=m +no_defs",
    )
}

fn default_target() -> String {
    String::from("+proj=longlat +ellps=GRS80 +no_defs")
}
