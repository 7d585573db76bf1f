//! # sinoproj
//!
//! Coordinate transforms between standard reference systems and the Chinese
//! obfuscated systems GCJ02, BD09 and their Mercator forms (GCJ02MC, BD09MC).
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - One-shot Transforms
//!
//! ```
//! use sinoproj::{resolve, transform_points};
//! use geo_types::coord;
//!
//! # fn main() -> Result<(), sinoproj::CrsError> {
//! let gcj = resolve("GCJ02").ok_or(sinoproj::CrsError::UnknownCrs("GCJ02".into()))?;
//! let bd = resolve("BD09").ok_or(sinoproj::CrsError::UnknownCrs("BD09".into()))?;
//!
//! let out = transform_points(&gcj, &bd, &[coord! { x: 116.397455, y: 39.909187 }])?;
//! assert!(out[0].x > 116.4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Transformer` - Configured Transforms
//!
//! ```
//! use sinoproj::{Shape, Transformer};
//! use geo_types::{coord, point, Rect};
//!
//! # fn main() -> Result<(), sinoproj::CrsError> {
//! let transformer = Transformer::builder()
//!     .exact(true)
//!     .sample_density(32)
//!     .build();
//!
//! let gcj = transformer.resolve_or_err("GCJ02")?;
//! let wgs = transformer.resolve_or_err(4326u32)?;
//!
//! let rect = Rect::new(coord! { x: 116.0, y: 39.6 }, coord! { x: 116.8, y: 40.2 });
//! let envelope = transformer.transform_rect_default(&gcj, &wgs, &rect)?;
//!
//! let shape = Shape::Point(point! { x: 116.397455, y: 39.909187 });
//! let moved = transformer.apply_geometry(&shape, &gcj, &wgs)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvReproject` - CSV File Conversion
//!
//! Reproject CSV files with geometry columns (WKT or GeoJSON):
//!
//! ```no_run
//! use sinoproj::{CsvReproject, CsvReprojectConfig, GeometryFormat};
//!
//! let config = CsvReprojectConfig::new("geometry", "GCJ02", "BD09")
//!     .with_geometry_format(GeometryFormat::GeoJson);
//!
//! // Using trait method
//! "input.csv".reproject_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or use separate coordinate columns (e.g., Lon/Lat or Easting/Northing):
//!
//! ```no_run
//! use sinoproj::{CsvReprojectConfig, csv_reproject};
//!
//! let config = CsvReprojectConfig::from_coords("x", "y", "EPSG:BDMC", "EPSG:4326");
//!
//! csv_reproject("pois.csv", "output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod crs;
pub mod geom;
pub mod io;
pub mod util;

pub use api::{
    Transformer, TransformerBuilder, align_rect, apply_geometry, geodetic_equivalent, resolve,
    transform_points, transform_rect,
};
pub use crate::core::{
    BD09_CODE, BD09MC_CODE, DEFAULT_SAMPLE_DENSITY, GCJ02_CODE, GCJ02MC_CODE, HUB_CODE,
    POLE_DELTA,
};
pub use crs::{
    GenericSrs, GeodeticService, ProjService, Projection, ProjectionKind, SrsCode,
    is_geographic_code, resolve_with,
};
pub use geom::{Coord3, Shape, apply_geo_geometry, parse_shape};
pub use io::{
    CoordinateSource, CsvReproject, CsvReprojectConfig, GeometryFormat, csv_reproject,
    csv_reproject_with,
};
pub use util::{Coordinate, CrsError, ecef_to_lonlat, lonlat_to_ecef, up_rotation};

pub use geo_types;
