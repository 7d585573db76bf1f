use crate::geom::shape::{Coord3, Shape};
use crate::util::error::CrsError;
use geo_types::Geometry;
use geojson::{GeoJson, Value};
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// GeoJSON positions with a height produce the matching 3D shape.
pub fn parse_shape(s: &str) -> Result<Shape, CrsError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON geometry or feature into a [`Shape`].
pub fn parse_geojson(s: &str) -> Result<Shape, CrsError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| CrsError::GeometryParseError(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| CrsError::GeometryParseError("Feature has no geometry".to_string()))?,
        GeoJson::FeatureCollection(_) => {
            return Err(CrsError::GeometryParseError(
                "FeatureCollection not supported, use individual geometries".to_string(),
            ));
        }
    };

    if has_height(&geometry.value) {
        return shape3(&geometry.value);
    }

    let geom = Geometry::try_from(geometry)
        .map_err(|e| CrsError::GeometryParseError(e.to_string()))?;
    Shape::try_from(geom)
}

/// Parses a WKT string into a planar [`Shape`].
pub fn parse_wkt(s: &str) -> Result<Shape, CrsError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| CrsError::GeometryParseError(e.to_string()))?;

    let geom: Geometry<f64> = wkt
        .try_into()
        .map_err(|_| CrsError::GeometryParseError("Failed to convert WKT to geometry".to_string()))?;
    Shape::try_from(geom)
}

fn has_height(value: &Value) -> bool {
    let pos = |p: &Vec<f64>| p.len() > 2;
    match value {
        Value::Point(p) => pos(p),
        Value::MultiPoint(ps) | Value::LineString(ps) => ps.iter().any(pos),
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines.iter().flatten().any(pos),
        Value::MultiPolygon(polys) => polys.iter().flatten().flatten().any(pos),
        Value::GeometryCollection(_) => false,
    }
}

fn coord3(p: &[f64]) -> Result<Coord3, CrsError> {
    match p {
        [x, y, z, ..] => Ok(Coord3::new(*x, *y, *z)),
        [x, y] => Ok(Coord3::new(*x, *y, 0.0)),
        _ => Err(CrsError::GeometryParseError(format!(
            "position needs at least two ordinates, got {}",
            p.len()
        ))),
    }
}

fn seq3(ps: &[Vec<f64>]) -> Result<Vec<Coord3>, CrsError> {
    ps.iter().map(|p| coord3(p)).collect()
}

fn rings3(rings: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<Coord3>>, CrsError> {
    rings.iter().map(|r| seq3(r)).collect()
}

fn shape3(value: &Value) -> Result<Shape, CrsError> {
    match value {
        Value::Point(p) => Ok(Shape::Point3(coord3(p)?)),
        Value::MultiPoint(ps) => Ok(Shape::MultiPoint3(seq3(ps)?)),
        Value::LineString(ps) => Ok(Shape::LineString3(seq3(ps)?)),
        Value::MultiLineString(lines) => Ok(Shape::MultiLine3(rings3(lines)?)),
        Value::Polygon(rings) => Ok(Shape::Polygon3(rings3(rings)?)),
        Value::MultiPolygon(polys) => Ok(Shape::MultiPolygon3(
            polys.iter().map(|p| rings3(p)).collect::<Result<_, _>>()?,
        )),
        Value::GeometryCollection(_) => Err(CrsError::UnsupportedGeometry(
            "GeometryCollection".to_string(),
        )),
    }
}
