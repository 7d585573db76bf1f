pub mod coord;
pub mod ecef;
pub mod error;

pub use coord::Coordinate;
pub use ecef::{ecef_to_lonlat, lonlat_to_ecef, up_rotation};
pub use error::CrsError;
