pub mod apply;
pub mod parse;
pub mod shape;

pub use apply::{apply_geo_geometry, apply_geometry};
pub use parse::{parse_geojson, parse_shape, parse_wkt};
pub use shape::{Coord3, Shape};
