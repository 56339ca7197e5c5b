use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use geo::{Geometry, MultiPolygon};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::GeoError;

/// a GeoJSON-like feature. the parcel extracts shipped with survey data are
/// trimmed to save space, so the "type" members of features and collections
/// are not required.
#[derive(Deserialize, Clone, Debug)]
pub struct FeatureRecord {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<geojson::Geometry>,
}

#[derive(Deserialize)]
struct FeatureCollectionRecord {
    features: Vec<FeatureRecord>,
}

/// opens a file for reading, decompressing by extension: `.br` is Brotli,
/// `.gz` is gzip, anything else is read as-is.
pub fn open_decompressed(path: &Path) -> Result<Box<dyn Read>, GeoError> {
    let file = File::open(path).map_err(|e| GeoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension {
        "br" => Ok(Box::new(brotli::Decompressor::new(reader, 4096))),
        "gz" => Ok(Box::new(flate2::read::GzDecoder::new(reader))),
        _ => Ok(Box::new(reader)),
    }
}

/// reads the features of a (possibly compressed) feature collection file.
pub fn read_features(path: &Path) -> Result<Vec<FeatureRecord>, GeoError> {
    let reader = open_decompressed(path)?;
    parse_features(reader, path)
}

pub fn parse_features<R: Read>(reader: R, path: &Path) -> Result<Vec<FeatureRecord>, GeoError> {
    let collection: FeatureCollectionRecord =
        serde_json::from_reader(reader).map_err(|e| GeoError::Parse {
            path: path.to_path_buf(),
            message: format!("expected a collection with a 'features' array: {e}"),
        })?;
    Ok(collection.features)
}

/// reads an integer-valued property. numeric strings such as "17" and whole
/// floats such as 17.0 are accepted.
pub fn integer_property(
    feature: &FeatureRecord,
    key: &str,
    index: usize,
    path: &Path,
) -> Result<i64, GeoError> {
    let deserialize_error = |message: &str| GeoError::Deserialize {
        col: key.to_string(),
        feature: index,
        path: path.to_path_buf(),
        message: message.to_string(),
    };
    let value = feature
        .properties
        .as_ref()
        .and_then(|p| p.get(key))
        .ok_or_else(|| deserialize_error("property missing"))?;
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(i),
            (None, Some(f)) if f.fract() == 0.0 => Ok(f as i64),
            _ => Err(deserialize_error(&format!("'{n}' is not an integer"))),
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| deserialize_error(&format!("'{s}' is not an integer: {e}"))),
        other => Err(deserialize_error(&format!("cannot read '{other}' as integer"))),
    }
}

/// decodes the feature geometry as polygons. a single polygon is promoted to a
/// multipolygon with one member.
pub fn multipolygon_geometry(
    feature: &FeatureRecord,
    index: usize,
    path: &Path,
) -> Result<MultiPolygon<f64>, GeoError> {
    let deserialize_error = |message: String| GeoError::Deserialize {
        col: String::from("geometry"),
        feature: index,
        path: path.to_path_buf(),
        message,
    };
    let geom_json = feature
        .geometry
        .clone()
        .ok_or_else(|| deserialize_error(String::from("no geometry")))?;
    let geometry: Geometry<f64> = geom_json
        .try_into()
        .map_err(|e| deserialize_error(format!("failure decoding GeoJson geometry: {e}")))?;
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
        _ => Err(deserialize_error(String::from(
            "geometry must be a Polygon or MultiPolygon",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIMMED: &str = r#"{"features": [
        {"properties": {"zone": "17"}, "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}},
        {"properties": {"zone": 18.0}, "geometry": {"type": "MultiPolygon", "coordinates": [[[[0,0],[2,0],[2,2],[0,0]]]]}},
        {"properties": {"zone": "north"}, "geometry": {"type": "Point", "coordinates": [0, 0]}}
    ]}"#;

    #[test]
    fn test_parse_trimmed_collection() {
        let path = Path::new("residences.json");
        let features = parse_features(TRIMMED.as_bytes(), path).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(integer_property(&features[0], "zone", 0, path).unwrap(), 17);
        assert_eq!(integer_property(&features[1], "zone", 1, path).unwrap(), 18);
        assert!(integer_property(&features[2], "zone", 2, path).is_err());
        assert!(integer_property(&features[0], "id", 0, path).is_err());

        assert_eq!(multipolygon_geometry(&features[0], 0, path).unwrap().0.len(), 1);
        assert_eq!(multipolygon_geometry(&features[1], 1, path).unwrap().0.len(), 1);
        assert!(matches!(
            multipolygon_geometry(&features[2], 2, path),
            Err(GeoError::Deserialize { feature: 2, .. })
        ));
    }

    #[test]
    fn test_not_a_collection() {
        let result = parse_features(r#"{"type": "Point"}"#.as_bytes(), Path::new("x.json"));
        assert!(matches!(result, Err(GeoError::Parse { .. })));
    }

    #[test]
    fn test_read_brotli_and_gzip() {
        let dir = std::env::temp_dir().join(format!("transcost-geojson-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let br_path = dir.join("residences.json.br");
        {
            let file = File::create(&br_path).unwrap();
            let mut writer = brotli::CompressorWriter::new(file, 4096, 9, 22);
            writer.write_all(TRIMMED.as_bytes()).unwrap();
        }
        assert_eq!(read_features(&br_path).unwrap().len(), 3);

        let gz_path = dir.join("residences.json.gz");
        {
            let file = File::create(&gz_path).unwrap();
            let mut writer = flate2::write::GzEncoder::new(file, flate2::Compression::default());
            writer.write_all(TRIMMED.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        assert_eq!(read_features(&gz_path).unwrap().len(), 3);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file() {
        let result = read_features(Path::new("no/such/zones.json"));
        assert!(matches!(result, Err(GeoError::Read { .. })));
    }
}
