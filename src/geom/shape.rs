use crate::util::error::CrsError;
use geo_types::{
    Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use geojson::Value;

/// A coordinate with a height. `z` is carried through transforms untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn xy(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

/// A geometry value in one of the twelve supported shapes.
///
/// Planar shapes wrap the matching `geo_types` value. Shapes with a height
/// hold plain nested sequences of [`Coord3`]; polygon rings are ordered
/// exterior first.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point<f64>),
    Point3(Coord3),
    MultiPoint(MultiPoint<f64>),
    MultiPoint3(Vec<Coord3>),
    LineString(LineString<f64>),
    LineString3(Vec<Coord3>),
    MultiLine(MultiLineString<f64>),
    MultiLine3(Vec<Vec<Coord3>>),
    Polygon(Polygon<f64>),
    Polygon3(Vec<Vec<Coord3>>),
    MultiPolygon(MultiPolygon<f64>),
    MultiPolygon3(Vec<Vec<Vec<Coord3>>>),
}

impl Shape {
    /// Tag name, e.g. `"MultiPolygon3"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "Point",
            Shape::Point3(_) => "Point3",
            Shape::MultiPoint(_) => "MultiPoint",
            Shape::MultiPoint3(_) => "MultiPoint3",
            Shape::LineString(_) => "LineString",
            Shape::LineString3(_) => "LineString3",
            Shape::MultiLine(_) => "MultiLine",
            Shape::MultiLine3(_) => "MultiLine3",
            Shape::Polygon(_) => "Polygon",
            Shape::Polygon3(_) => "Polygon3",
            Shape::MultiPolygon(_) => "MultiPolygon",
            Shape::MultiPolygon3(_) => "MultiPolygon3",
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            Shape::Point3(_)
                | Shape::MultiPoint3(_)
                | Shape::LineString3(_)
                | Shape::MultiLine3(_)
                | Shape::Polygon3(_)
                | Shape::MultiPolygon3(_)
        )
    }

    /// The planar `geo_types` value, or `None` for shapes with a height.
    pub fn to_geometry(&self) -> Option<Geometry<f64>> {
        match self {
            Shape::Point(p) => Some(Geometry::Point(*p)),
            Shape::MultiPoint(mp) => Some(Geometry::MultiPoint(mp.clone())),
            Shape::LineString(ls) => Some(Geometry::LineString(ls.clone())),
            Shape::MultiLine(ml) => Some(Geometry::MultiLineString(ml.clone())),
            Shape::Polygon(p) => Some(Geometry::Polygon(p.clone())),
            Shape::MultiPolygon(mp) => Some(Geometry::MultiPolygon(mp.clone())),
            _ => None,
        }
    }

    /// WKT text for planar shapes.
    pub fn to_wkt_string(&self) -> Result<String, CrsError> {
        use wkt::ToWkt;

        self.to_geometry()
            .map(|geom| geom.wkt_string())
            .ok_or_else(|| CrsError::UnsupportedGeometry(format!("{} has no WKT form", self.kind())))
    }

    /// GeoJSON geometry; heights are written as the third position ordinate.
    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self {
            Shape::Point(p) => Value::Point(position(p.0)),
            Shape::Point3(c) => Value::Point(position3(c)),
            Shape::MultiPoint(mp) => Value::MultiPoint(mp.iter().map(|p| position(p.0)).collect()),
            Shape::MultiPoint3(cs) => Value::MultiPoint(positions3(cs)),
            Shape::LineString(ls) => Value::LineString(positions(ls)),
            Shape::LineString3(cs) => Value::LineString(positions3(cs)),
            Shape::MultiLine(ml) => Value::MultiLineString(ml.iter().map(positions).collect()),
            Shape::MultiLine3(lines) => {
                Value::MultiLineString(lines.iter().map(|l| positions3(l)).collect())
            }
            Shape::Polygon(p) => Value::Polygon(polygon_rings(p)),
            Shape::Polygon3(rings) => Value::Polygon(rings.iter().map(|r| positions3(r)).collect()),
            Shape::MultiPolygon(mp) => Value::MultiPolygon(mp.iter().map(polygon_rings).collect()),
            Shape::MultiPolygon3(polys) => Value::MultiPolygon(
                polys
                    .iter()
                    .map(|rings| rings.iter().map(|r| positions3(r)).collect())
                    .collect(),
            ),
        };
        geojson::Geometry::new(value)
    }
}

fn position(c: Coord<f64>) -> Vec<f64> {
    vec![c.x, c.y]
}

fn position3(c: &Coord3) -> Vec<f64> {
    vec![c.x, c.y, c.z]
}

fn positions(ls: &LineString<f64>) -> Vec<Vec<f64>> {
    ls.0.iter().map(|c| position(*c)).collect()
}

fn positions3(cs: &[Coord3]) -> Vec<Vec<f64>> {
    cs.iter().map(position3).collect()
}

fn polygon_rings(polygon: &Polygon<f64>) -> Vec<Vec<Vec<f64>>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(positions)
        .collect()
}

impl TryFrom<Geometry<f64>> for Shape {
    type Error = CrsError;

    fn try_from(geom: Geometry<f64>) -> Result<Self, Self::Error> {
        match geom {
            Geometry::Point(p) => Ok(Shape::Point(p)),
            Geometry::MultiPoint(mp) => Ok(Shape::MultiPoint(mp)),
            Geometry::LineString(ls) => Ok(Shape::LineString(ls)),
            Geometry::MultiLineString(ml) => Ok(Shape::MultiLine(ml)),
            Geometry::Polygon(p) => Ok(Shape::Polygon(p)),
            Geometry::MultiPolygon(mp) => Ok(Shape::MultiPolygon(mp)),
            Geometry::Line(_) => Err(CrsError::UnsupportedGeometry("Line".to_string())),
            Geometry::Rect(_) => Err(CrsError::UnsupportedGeometry("Rect".to_string())),
            Geometry::Triangle(_) => Err(CrsError::UnsupportedGeometry("Triangle".to_string())),
            Geometry::GeometryCollection(_) => Err(CrsError::UnsupportedGeometry(
                "GeometryCollection".to_string(),
            )),
        }
    }
}

impl From<Point<f64>> for Shape {
    fn from(p: Point<f64>) -> Self {
        Shape::Point(p)
    }
}

impl From<LineString<f64>> for Shape {
    fn from(ls: LineString<f64>) -> Self {
        Shape::LineString(ls)
    }
}

impl From<Polygon<f64>> for Shape {
    fn from(p: Polygon<f64>) -> Self {
        Shape::Polygon(p)
    }
}

impl From<MultiPolygon<f64>> for Shape {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Shape::MultiPolygon(mp)
    }
}
