use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use transcost_core::model::cost::CostSchedule;
use transcost_geo::{placement::PlacementConfig, transform::ProjectionConfig};

use super::TransCostAppError;

/// settings file read from the working directory, if present.
pub const DEFAULT_CONFIG_FILE: &str = "config/transcost.toml";

/// run settings. every key is optional.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransCostConfig {
    /// place households at points and write lon/lat rows. when false, rows
    /// carry the zone id instead.
    #[serde(default = "default_geocode")]
    pub geocode: bool,
    #[serde(default = "default_zones_file")]
    pub zones_file: PathBuf,
    /// residential parcels. may be Brotli (.br) or gzip (.gz) compressed.
    #[serde(default = "default_parcels_file")]
    pub parcels_file: PathBuf,
    #[serde(default = "default_zone_id_property")]
    pub zone_id_property: String,
    #[serde(default = "default_parcel_zone_property")]
    pub parcel_zone_property: String,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub costs: CostSchedule,
}

impl TransCostConfig {
    /// reads settings from a TOML file. a missing file yields the defaults.
    pub fn read(path: &Path) -> Result<TransCostConfig, TransCostAppError> {
        if path.is_file() {
            log::info!("reading settings from {}", path.display());
        } else {
            log::info!("no settings file at {}, using defaults", path.display());
        }
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| {
                let msg = format!("file '{}' produced error: {e}", path.display());
                TransCostAppError::InvalidUserInput(msg)
            })?;
        config.try_deserialize::<TransCostConfig>().map_err(|e| {
            let msg = format!("error reading settings in '{}': {e}", path.display());
            TransCostAppError::InvalidUserInput(msg)
        })
    }
}

impl Default for TransCostConfig {
    fn default() -> Self {
        Self {
            geocode: default_geocode(),
            zones_file: default_zones_file(),
            parcels_file: default_parcels_file(),
            zone_id_property: default_zone_id_property(),
            parcel_zone_property: default_parcel_zone_property(),
            placement: PlacementConfig::default(),
            projection: ProjectionConfig::default(),
            costs: CostSchedule::default(),
        }
    }
}

fn default_geocode() -> bool {
    true
}

fn default_zones_file() -> PathBuf {
    PathBuf::from("config/zones.json")
}

fn default_parcels_file() -> PathBuf {
    PathBuf::from("config/residences.json.br")
}

fn default_zone_id_property() -> String {
    String::from("id")
}

fn default_parcel_zone_property() -> String {
    String::from("zone")
}
