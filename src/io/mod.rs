pub mod csv;

pub use csv::{
    CoordinateSource, CsvReproject, CsvReprojectConfig, GeometryFormat, csv_reproject,
    csv_reproject_with,
};
