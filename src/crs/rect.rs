//! Bounding-box transforms.
//!
//! The image of a rectangle under a non-affine transform is not a rectangle.
//! [`transform_rect`] samples the boundary, transforms the samples and takes
//! their envelope. This is an approximation: edges that bow outward between
//! samples are not covered. Raise `sample_density` to tighten it.

use crate::core::envelope::{calculate_bbox, generate_envelope_points};
use crate::crs::dispatch::transform_points;
use crate::crs::projection::Projection;
use crate::crs::service::GeodeticService;
use crate::util::error::CrsError;
use geo_types::Rect;

/// Pole alignment for `projection`; see [`Projection::align_bbox`].
pub fn align_rect(projection: &Projection, rect: &Rect<f64>) -> Rect<f64> {
    projection.align_bbox(rect)
}

/// Transforms `rect` from `src` to `dst` by boundary sampling.
///
/// `sample_density` is the number of boundary points; the four corners are
/// always included. The rectangle must satisfy min <= max.
pub fn transform_rect(
    src: &Projection,
    dst: &Projection,
    rect: &Rect<f64>,
    sample_density: usize,
    hub: &Projection,
    service: &dyn GeodeticService,
) -> Result<Rect<f64>, CrsError> {
    if src == dst {
        return Ok(*rect);
    }

    let aligned = align_rect(src, rect);
    let points = generate_envelope_points(&aligned, sample_density);
    let transformed = transform_points(src, dst, &points, hub, service)?;

    calculate_bbox(transformed)
        .ok_or_else(|| CrsError::DegenerateInput("no points to build an envelope".to_string()))
}
