//! One-shot operations through a default [`Transformer`]: exact inverses,
//! PROJ for standard systems and the default sample density.

use crate::api::transformer::Transformer;
use crate::crs::projection::Projection;
use crate::crs::registry::SrsCode;
use crate::geom::shape::Shape;
use crate::util::error::CrsError;
use geo_types::{Coord, Rect};

/// Resolves a code (`"GCJ02"`, `"EPSG:3857"`) or numeric EPSG id.
///
/// ```
/// use sinoproj::resolve;
///
/// assert_eq!(resolve("BD09").map(|p| p.srs_code().to_string()), Some("EPSG:BD09".into()));
/// assert!(resolve(3857u32).is_some_and(|p| !p.is_latlong()));
/// ```
pub fn resolve(id: impl Into<SrsCode>) -> Option<Projection> {
    Transformer::new().resolve(id)
}

pub fn transform_points(
    src: &Projection,
    dst: &Projection,
    points: &[Coord<f64>],
) -> Result<Vec<Coord<f64>>, CrsError> {
    Transformer::new().transform_points(src, dst, points)
}

pub fn transform_rect(
    src: &Projection,
    dst: &Projection,
    rect: &Rect<f64>,
    sample_density: usize,
) -> Result<Rect<f64>, CrsError> {
    Transformer::new().transform_rect(src, dst, rect, sample_density)
}

pub fn align_rect(projection: &Projection, rect: &Rect<f64>) -> Rect<f64> {
    projection.align_bbox(rect)
}

pub fn geodetic_equivalent(projection: &Projection) -> Projection {
    projection.geodetic_equivalent()
}

pub fn apply_geometry(
    shape: &Shape,
    src: &Projection,
    dst: &Projection,
) -> Result<Shape, CrsError> {
    Transformer::new().apply_geometry(shape, src, dst)
}
