use crate::api::transformer::Transformer;
use crate::crs::projection::Projection;
use crate::crs::service::GeodeticService;
use crate::geom::parse::parse_shape;
use crate::geom::shape::Shape;
use crate::util::error::CrsError;
use geo_types::coord;
use log::debug;
use std::fs::File;
use std::path::Path;

/// For the type of geometry source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { x_idx: usize, y_idx: usize },
}

/// Output format for rewritten geometry columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POINT(116.4 39.9)")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate X and Y coordinate columns (e.g., Lon/Lat or Easting/Northing)
    CoordinateColumns { x_column: String, y_column: String },
}

/// Configuration for reprojecting a CSV file.
#[derive(Debug, Clone)]
pub struct CsvReprojectConfig {
    pub source: CoordinateSource,
    pub from: String,
    pub to: String,
    /// Output format for the geometry column; `None` keeps the input format.
    pub geometry_format: Option<GeometryFormat>,
}

impl CsvReprojectConfig {
    /// Config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use sinoproj::CsvReprojectConfig;
    ///
    /// let config = CsvReprojectConfig::new("geometry", "GCJ02", "BD09");
    /// ```
    pub fn new(
        geometry_column: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            from: from.into(),
            to: to.into(),
            geometry_format: None,
        }
    }

    /// Config for a CSV with separate X/Y coordinate columns.
    ///
    /// # Example
    /// ```
    /// use sinoproj::CsvReprojectConfig;
    ///
    /// let config = CsvReprojectConfig::from_coords("lng", "lat", "EPSG:4326", "GCJ02");
    /// ```
    pub fn from_coords(
        x_column: impl Into<String>,
        y_column: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                x_column: x_column.into(),
                y_column: y_column.into(),
            },
            from: from.into(),
            to: to.into(),
            geometry_format: None,
        }
    }

    /// Writes rewritten geometries in `format` instead of the input format.
    pub fn with_geometry_format(mut self, format: GeometryFormat) -> Self {
        self.geometry_format = Some(format);
        self
    }
}

pub trait CsvReproject {
    fn reproject_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvReprojectConfig,
    ) -> Result<(), CrsError>;
}

impl<P: AsRef<Path>> CsvReproject for P {
    fn reproject_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvReprojectConfig,
    ) -> Result<(), CrsError> {
        csv_reproject(self, output_path, config)
    }
}

fn write_shape(shape: &Shape, format: GeometryFormat) -> Result<String, CrsError> {
    match format {
        GeometryFormat::Wkt => shape.to_wkt_string(),
        GeometryFormat::GeoJson => Ok(shape.to_geojson().to_string()),
    }
}

fn detect_format(s: &str) -> GeometryFormat {
    if s.trim_start().starts_with('{') {
        GeometryFormat::GeoJson
    } else {
        GeometryFormat::Wkt
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, label: &str) -> Result<usize, CrsError> {
    if name.is_empty() {
        return Err(CrsError::CsvError(format!("{} column name cannot be empty", label)));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CrsError::CsvError(format!("{} column '{}' not found", label, name)))
}

fn parse_ordinate(record: &csv::StringRecord, idx: usize, label: &str) -> Result<f64, CrsError> {
    let s = record
        .get(idx)
        .ok_or_else(|| CrsError::CsvError(format!("Missing {} column at index {}", label, idx)))?
        .trim();
    s.parse()
        .map_err(|_| CrsError::CsvError(format!("Invalid {} coordinate: '{}'", label, s)))
}

/// Reprojects a CSV file with the default [`Transformer`].
///
/// Streams rows, rewriting the geometry column (or the X/Y columns) from
/// `config.from` to `config.to`. All other columns are copied as they are.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use sinoproj::{csv_reproject, CsvReprojectConfig, GeometryFormat};
///
/// let config = CsvReprojectConfig::new("shape", "GCJ02", "BD09")
///     .with_geometry_format(GeometryFormat::Wkt);
///
/// csv_reproject("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use sinoproj::{csv_reproject, CsvReprojectConfig};
///
/// let config = CsvReprojectConfig::from_coords("x", "y", "EPSG:BDMC", "EPSG:4326");
///
/// csv_reproject("pois.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_reproject(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvReprojectConfig,
) -> Result<(), CrsError> {
    csv_reproject_with(&Transformer::new(), csv_path, output_path, config)
}

/// [`csv_reproject`] through a caller-configured [`Transformer`].
pub fn csv_reproject_with<S: GeodeticService>(
    transformer: &Transformer<S>,
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvReprojectConfig,
) -> Result<(), CrsError> {
    let src: Projection = transformer.resolve_or_err(config.from.as_str())?;
    let dst: Projection = transformer.resolve_or_err(config.to.as_str())?;

    let file = File::open(csv_path).map_err(|e| CrsError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| CrsError::CsvError(e.to_string()))?
        .clone();

    let source_indices = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            SourceIndices::Geometry(column_index(&headers, col, "Geometry")?)
        }
        CoordinateSource::CoordinateColumns { x_column, y_column } => SourceIndices::Coordinates {
            x_idx: column_index(&headers, x_column, "X")?,
            y_idx: column_index(&headers, y_column, "Y")?,
        },
    };

    let out_file = File::create(output_path).map_err(|e| CrsError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);
    writer
        .write_record(&headers)
        .map_err(|e| CrsError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| CrsError::CsvError(e.to_string()))?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();

        match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    CrsError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let shape = parse_shape(geom_str)?;
                let out = transformer.apply_geometry(&shape, &src, &dst)?;
                let format = config
                    .geometry_format
                    .unwrap_or_else(|| detect_format(geom_str));
                row[*idx] = write_shape(&out, format)?;
            }
            SourceIndices::Coordinates { x_idx, y_idx } => {
                let x = parse_ordinate(&record, *x_idx, "X")?;
                let y = parse_ordinate(&record, *y_idx, "Y")?;
                let out = transformer.transform_point(&src, &dst, &coord! { x: x, y: y })?;
                row[*x_idx] = out.x().to_string();
                row[*y_idx] = out.y().to_string();
            }
        }

        writer
            .write_record(&row)
            .map_err(|e| CrsError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| CrsError::CsvError(e.to_string()))?;

    debug!("reprojected {} rows from {} to {}", rows, src, dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn read_rows(path: &Path) -> Result<Vec<csv::StringRecord>, CrsError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| CrsError::CsvError(e.to_string()))?;
        reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CrsError::CsvError(e.to_string()))
    }

    #[test]
    fn test_reproject_geometry_column_geojson() -> Result<(), CrsError> {
        let dir = tempdir().map_err(|e| CrsError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "NAME,TYPE,geometry").map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(
            file,
            "Tiananmen,Gate,\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[116.397455,39.909187]}}\""
        )
        .map_err(|e| CrsError::IoError(e.to_string()))?;

        let config = CsvReprojectConfig::new("geometry", "GCJ02", "BD09");
        csv_reproject(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(0), Some("Tiananmen"));
        let shape = parse_shape(rows[0].get(2).unwrap_or_default())?;
        match shape {
            Shape::Point(p) => assert!((p.x() - 116.403828).abs() < 1e-5),
            other => panic!("Expected Point, got {}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn test_reproject_geometry_column_to_wkt() -> Result<(), CrsError> {
        let dir = tempdir().map_err(|e| CrsError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "ID,geometry").map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "1,\"LINESTRING(116.3 39.9, 116.4 39.95)\"")
            .map_err(|e| CrsError::IoError(e.to_string()))?;

        let config = CsvReprojectConfig::new("geometry", "EPSG:4326", "GCJ02")
            .with_geometry_format(GeometryFormat::Wkt);
        csv_path.reproject_csv(&output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert!(rows[0].get(1).is_some_and(|g| g.starts_with("LINESTRING")));
        Ok(())
    }

    #[test]
    fn test_reproject_coordinate_columns() -> Result<(), CrsError> {
        let dir = tempdir().map_err(|e| CrsError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "ID,lng,lat,Description").map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "1,116.404,39.915,Tiananmen").map_err(|e| CrsError::IoError(e.to_string()))?;

        let config = CsvReprojectConfig::from_coords("lng", "lat", "BD09", "EPSG:BDMC");
        csv_reproject(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        let x: f64 = rows[0]
            .get(1)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| CrsError::CsvError("bad x".to_string()))?;
        let y: f64 = rows[0]
            .get(2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| CrsError::CsvError("bad y".to_string()))?;
        assert!((x - 12958175.0).abs() < 1.0);
        assert!((y - 4825923.766).abs() < 1.0);
        assert_eq!(rows[0].get(3), Some("Tiananmen"));
        Ok(())
    }

    #[test]
    fn test_missing_column() -> Result<(), CrsError> {
        let dir = tempdir().map_err(|e| CrsError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CrsError::IoError(e.to_string()))?;
        writeln!(file, "ID,x,y").map_err(|e| CrsError::IoError(e.to_string()))?;

        let config = CsvReprojectConfig::from_coords("lng", "lat", "GCJ02", "BD09");
        let result = csv_reproject(&csv_path, &output_path, &config);
        assert_eq!(
            result,
            Err(CrsError::CsvError("X column 'lng' not found".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_unknown_crs() {
        let config = CsvReprojectConfig::new("geometry", "NOT_A_CRS", "BD09");
        let result = csv_reproject("missing.csv", "out.csv", &config);
        assert!(matches!(result, Err(CrsError::UnknownCrs(_))));
    }
}
