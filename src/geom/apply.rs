use crate::crs::dispatch::transform_points;
use crate::crs::projection::Projection;
use crate::crs::service::GeodeticService;
use crate::geom::shape::{Coord3, Shape};
use crate::util::error::CrsError;
use geo_types::{
    Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Rewrites coordinate sequences from one system to another.
struct Rewriter<'a> {
    src: &'a Projection,
    dst: &'a Projection,
    hub: &'a Projection,
    service: &'a dyn GeodeticService,
}

impl Rewriter<'_> {
    fn coords(&self, coords: &[Coord<f64>]) -> Result<Vec<Coord<f64>>, CrsError> {
        transform_points(self.src, self.dst, coords, self.hub, self.service)
    }

    fn coords3(&self, coords: &[Coord3]) -> Result<Vec<Coord3>, CrsError> {
        let xy: Vec<Coord<f64>> = coords.iter().map(Coord3::xy).collect();
        let out = self.coords(&xy)?;
        Ok(out
            .into_iter()
            .zip(coords)
            .map(|(c, original)| Coord3::new(c.x, c.y, original.z))
            .collect())
    }

    fn line(&self, line: &LineString<f64>) -> Result<LineString<f64>, CrsError> {
        Ok(LineString::from(self.coords(&line.0)?))
    }

    fn polygon(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, CrsError> {
        let exterior = self.line(polygon.exterior())?;
        let interiors = polygon
            .interiors()
            .iter()
            .map(|ring| self.line(ring))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(exterior, interiors))
    }

    fn rings3(&self, rings: &[Vec<Coord3>]) -> Result<Vec<Vec<Coord3>>, CrsError> {
        rings.iter().map(|ring| self.coords3(ring)).collect()
    }

    fn shape(&self, shape: &Shape) -> Result<Shape, CrsError> {
        let out = match shape {
            Shape::Point(p) => {
                let c = self.coords(&[p.0])?;
                Shape::Point(Point(first(&c)?))
            }
            Shape::Point3(c) => {
                let out = self.coords3(std::slice::from_ref(c))?;
                Shape::Point3(out.first().copied().ok_or_else(empty_result)?)
            }
            Shape::MultiPoint(mp) => {
                let coords: Vec<Coord<f64>> = mp.iter().map(|p| p.0).collect();
                let out = self.coords(&coords)?;
                Shape::MultiPoint(MultiPoint::new(out.into_iter().map(Point).collect()))
            }
            Shape::MultiPoint3(cs) => Shape::MultiPoint3(self.coords3(cs)?),
            Shape::LineString(ls) => Shape::LineString(self.line(ls)?),
            Shape::LineString3(cs) => Shape::LineString3(self.coords3(cs)?),
            Shape::MultiLine(ml) => Shape::MultiLine(MultiLineString::new(
                ml.iter()
                    .map(|line| self.line(line))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Shape::MultiLine3(lines) => Shape::MultiLine3(self.rings3(lines)?),
            Shape::Polygon(p) => Shape::Polygon(self.polygon(p)?),
            Shape::Polygon3(rings) => Shape::Polygon3(self.rings3(rings)?),
            Shape::MultiPolygon(mp) => Shape::MultiPolygon(MultiPolygon::new(
                mp.iter()
                    .map(|p| self.polygon(p))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Shape::MultiPolygon3(polys) => Shape::MultiPolygon3(
                polys
                    .iter()
                    .map(|rings| self.rings3(rings))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        Ok(out)
    }
}

fn empty_result() -> CrsError {
    CrsError::DegenerateInput("transform returned no coordinates".to_string())
}

fn first(coords: &[Coord<f64>]) -> Result<Coord<f64>, CrsError> {
    coords.first().copied().ok_or_else(empty_result)
}

/// Re-projects every coordinate of `shape` from `src` to `dst`.
///
/// The result has the same tag, nesting, ring order and point counts as the
/// input; heights pass through unchanged and ring winding is not corrected.
pub fn apply_geometry(
    shape: &Shape,
    src: &Projection,
    dst: &Projection,
    hub: &Projection,
    service: &dyn GeodeticService,
) -> Result<Shape, CrsError> {
    if src == dst {
        return Ok(shape.clone());
    }
    Rewriter {
        src,
        dst,
        hub,
        service,
    }
    .shape(shape)
}

/// [`apply_geometry`] for a planar `geo_types` geometry.
///
/// `Line`, `Rect`, `Triangle` and `GeometryCollection` are rejected with
/// [`CrsError::UnsupportedGeometry`].
pub fn apply_geo_geometry(
    geom: &Geometry<f64>,
    src: &Projection,
    dst: &Projection,
    hub: &Projection,
    service: &dyn GeodeticService,
) -> Result<Geometry<f64>, CrsError> {
    let shape = Shape::try_from(geom.clone())?;
    apply_geometry(&shape, src, dst, hub, service)?
        .to_geometry()
        .ok_or_else(|| CrsError::UnsupportedGeometry(shape.kind().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::hub;
    use crate::crs::service::ProjService;
    use geo_types::{Line, coord, line_string, point, polygon};

    fn gcj() -> Projection {
        Projection::Gcj02 { exact: true }
    }

    fn bd() -> Projection {
        Projection::Bd09 { exact: true }
    }

    fn square(x: f64, y: f64, size: f64) -> LineString<f64> {
        line_string![
            (x: x, y: y),
            (x: x + size, y: y),
            (x: x + size, y: y + size),
            (x: x, y: y + size),
            (x: x, y: y),
        ]
    }

    #[test]
    fn test_point_is_shifted() -> Result<(), CrsError> {
        let shape = Shape::Point(point! { x: 116.397455, y: 39.909187 });
        match apply_geometry(&shape, &gcj(), &bd(), hub::wgs84(), &ProjService)? {
            Shape::Point(p) => {
                assert!((p.x() - 116.397455 - 0.0065).abs() < 0.001);
                assert!((p.y() - 39.909187 - 0.006).abs() < 0.001);
            }
            other => panic!("Expected Point, got {}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn test_point3_keeps_height() -> Result<(), CrsError> {
        let shape = Shape::Point3(Coord3::new(116.3, 39.9, 42.5));
        match apply_geometry(&shape, &gcj(), &bd(), hub::wgs84(), &ProjService)? {
            Shape::Point3(c) => {
                assert_eq!(c.z, 42.5);
                assert!(c.x > 116.3);
            }
            other => panic!("Expected Point3, got {}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn test_multipolygon_ring_counts_preserved() -> Result<(), CrsError> {
        let with_hole = Polygon::new(square(116.0, 39.0, 1.0), vec![square(116.2, 39.2, 0.1)]);
        let plain = Polygon::new(square(117.0, 40.0, 0.5), vec![]);
        let shape = Shape::MultiPolygon(MultiPolygon::new(vec![with_hole, plain]));

        let out = apply_geometry(&shape, &gcj(), &bd(), hub::wgs84(), &ProjService)?;
        let Shape::MultiPolygon(mp) = out else {
            panic!("Expected MultiPolygon");
        };
        let rings: Vec<usize> = mp.iter().map(|p| 1 + p.interiors().len()).collect();
        assert_eq!(rings, vec![2, 1]);
        for polygon in mp.iter() {
            assert_eq!(polygon.exterior().0.len(), 5);
            for ring in polygon.interiors() {
                assert_eq!(ring.0.len(), 5);
            }
        }
        assert!(mp.0[0].exterior().0[0].x > 116.0);
        Ok(())
    }

    #[test]
    fn test_multipolygon3_nesting_and_heights() -> Result<(), CrsError> {
        let ring = |x: f64, z: f64| {
            vec![
                Coord3::new(x, 39.0, z),
                Coord3::new(x + 0.1, 39.0, z),
                Coord3::new(x + 0.1, 39.1, z),
                Coord3::new(x, 39.0, z),
            ]
        };
        let shape = Shape::MultiPolygon3(vec![
            vec![ring(116.0, 1.0), ring(116.02, 2.0)],
            vec![ring(117.0, 3.0)],
        ]);

        let out = apply_geometry(&shape, &gcj(), &bd(), hub::wgs84(), &ProjService)?;
        let Shape::MultiPolygon3(polys) = out else {
            panic!("Expected MultiPolygon3");
        };
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[0].len(), 2);
        assert_eq!(polys[1].len(), 1);
        assert!(polys[0][1].iter().all(|c| c.z == 2.0));
        assert!(polys[1][0].iter().all(|c| c.z == 3.0));
        Ok(())
    }

    #[test]
    fn test_polygon_keeps_winding() -> Result<(), CrsError> {
        use geo::Winding;

        let cw = polygon![
            (x: 116.0, y: 39.0),
            (x: 116.0, y: 39.5),
            (x: 116.5, y: 39.5),
            (x: 116.5, y: 39.0),
            (x: 116.0, y: 39.0),
        ];
        assert!(cw.exterior().is_cw());

        let wgs = hub::wgs84();
        let out = apply_geometry(&Shape::Polygon(cw), &gcj(), wgs, wgs, &ProjService)?;
        let Shape::Polygon(out) = out else {
            panic!("Expected Polygon");
        };
        assert!(out.exterior().is_cw());
        Ok(())
    }

    #[test]
    fn test_same_projection_is_identity() -> Result<(), CrsError> {
        let shape = Shape::LineString(square(1.0, 2.0, 3.0));
        assert_eq!(apply_geometry(&shape, &bd(), &bd(), hub::wgs84(), &ProjService)?, shape);
        Ok(())
    }

    #[test]
    fn test_geo_geometry_line_is_rejected() {
        let line = Geometry::Line(Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }));
        let result = apply_geo_geometry(&line, &gcj(), &bd(), hub::wgs84(), &ProjService);
        assert_eq!(result, Err(CrsError::UnsupportedGeometry("Line".to_string())));
    }

    #[test]
    fn test_geo_geometry_linestring() -> Result<(), CrsError> {
        let geom = Geometry::LineString(square(116.0, 39.0, 0.5));
        let out = apply_geo_geometry(&geom, &gcj(), &bd(), hub::wgs84(), &ProjService)?;
        let Geometry::LineString(ls) = out else {
            panic!("Expected LineString");
        };
        assert_eq!(ls.0.len(), 5);
        Ok(())
    }
}
