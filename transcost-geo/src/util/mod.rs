pub mod geojson_ops;
