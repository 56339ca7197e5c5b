use std::path::Path;

use transcost_core::{
    aggregate::{CostAggregationEngine, HouseholdSummary},
    model::{household::HouseholdRecord, person::PersonRecord, trip::TripRecord},
    util::csv_ops,
};
use transcost_geo::{
    parcel::ParcelIndex,
    placement::{PlacementEngine, PlacementStats},
    transform::ProjTransform,
    zone::ZoneCollection,
    GeoError,
};

use super::{output, TransCostAppError, TransCostConfig};

/// aggregates household costs from the three survey files and writes one row
/// per retained household to `output`. with geocoding enabled the rows are
/// placed points, otherwise they carry the zone id.
pub fn run(
    households: &Path,
    persons: &Path,
    trips: &Path,
    output: &Path,
    config: &TransCostConfig,
) -> Result<(), TransCostAppError> {
    let (summaries, _) = CostAggregationEngine::run(
        config.costs.clone(),
        csv_ops::read_records::<HouseholdRecord>(households)?,
        csv_ops::read_records::<PersonRecord>(persons)?,
        csv_ops::read_records::<TripRecord>(trips)?,
    )?;

    if config.geocode {
        let placement_stats = write_points(&summaries, output, config)?;
        log::info!(
            "wrote {} of {} households to {}",
            placement_stats.placed,
            summaries.len(),
            output.display()
        );
    } else {
        write_zones(&summaries, output)?;
        log::info!("wrote {} households to {}", summaries.len(), output.display());
    }
    Ok(())
}

fn write_zones(summaries: &[HouseholdSummary], output: &Path) -> Result<(), TransCostAppError> {
    let mut writer = output::create_writer(output, &output::ZONE_HEADER)?;
    for summary in summaries {
        writer
            .serialize(summary)
            .map_err(|e| TransCostAppError::Write {
                path: output.to_path_buf(),
                message: e.to_string(),
            })?;
    }
    output::finish(writer, output)
}

fn write_points(
    summaries: &[HouseholdSummary],
    output: &Path,
    config: &TransCostConfig,
) -> Result<PlacementStats, TransCostAppError> {
    let zones = ZoneCollection::read(&config.zones_file, &config.zone_id_property)?;
    let parcels = ParcelIndex::read(&config.parcels_file, &config.parcel_zone_property)?;
    let transform = ProjTransform::try_from(&config.projection)?;
    let engine = PlacementEngine::new(&zones, &parcels, &transform, &config.placement);

    let mut writer = output::create_writer(output, &output::POINT_HEADER)?;
    let stats = engine.run(summaries, |point| {
        writer.serialize(point).map_err(|e| {
            GeoError::Write(format!("{}: {e}", output.display()))
        })
    })?;
    output::finish(writer, output)?;
    Ok(stats)
}
