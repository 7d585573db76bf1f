//! Point transforms between any two [`Projection`]s.
//!
//! Obfuscated systems only have direct formulas among themselves. Everything
//! else goes through the WGS84 hub: offset math on one side, the
//! [`GeodeticService`] on the other.

use crate::core::constants::PARALLEL_THRESHOLD;
use crate::core::mercator::{
    bd09_to_bdmc, bd09_to_gcj02mc, bdmc_to_bd09, bdmc_to_gcj02, bdmc_to_gcj02mc, bdmc_to_wgs84,
    gcj02_to_bdmc, gcj02_to_gcj02mc, gcj02mc_to_bd09, gcj02mc_to_bdmc, gcj02mc_to_gcj02,
    gcj02mc_to_wgs84, wgs84_to_bdmc, wgs84_to_gcj02mc,
};
use crate::core::offset::{
    bd09_to_gcj02, bd09_to_wgs84, bd09_to_wgs84_exact, gcj02_to_bd09, gcj02_to_wgs84,
    gcj02_to_wgs84_exact, wgs84_to_bd09, wgs84_to_gcj02,
};
use crate::crs::projection::{Projection, ProjectionKind};
use crate::crs::service::GeodeticService;
use crate::util::error::CrsError;
use geo_types::{Coord, coord};
use log::trace;
use rayon::prelude::*;

/// Offset function in `(lat, lng) -> (lat, lng)` order.
pub(crate) type OffsetFn = fn(f64, f64) -> (f64, f64);

/// Direct rules between obfuscated systems, keyed by (source, destination).
const DIRECT_RULES: [(ProjectionKind, ProjectionKind, OffsetFn); 12] = [
    (ProjectionKind::Gcj02, ProjectionKind::Bd09, gcj02_to_bd09),
    (ProjectionKind::Gcj02, ProjectionKind::Gcj02Mercator, gcj02_to_gcj02mc),
    (ProjectionKind::Gcj02, ProjectionKind::Bd09Mercator, gcj02_to_bdmc),
    (ProjectionKind::Bd09, ProjectionKind::Gcj02, bd09_to_gcj02),
    (ProjectionKind::Bd09, ProjectionKind::Gcj02Mercator, bd09_to_gcj02mc),
    (ProjectionKind::Bd09, ProjectionKind::Bd09Mercator, bd09_to_bdmc),
    (ProjectionKind::Gcj02Mercator, ProjectionKind::Gcj02, gcj02mc_to_gcj02),
    (ProjectionKind::Gcj02Mercator, ProjectionKind::Bd09, gcj02mc_to_bd09),
    (ProjectionKind::Gcj02Mercator, ProjectionKind::Bd09Mercator, gcj02mc_to_bdmc),
    (ProjectionKind::Bd09Mercator, ProjectionKind::Gcj02, bdmc_to_gcj02),
    (ProjectionKind::Bd09Mercator, ProjectionKind::Bd09, bdmc_to_bd09),
    (ProjectionKind::Bd09Mercator, ProjectionKind::Gcj02Mercator, bdmc_to_gcj02mc),
];

/// How a (source, destination) pair is carried out.
#[derive(Clone, Copy)]
pub(crate) enum Route {
    Identity,
    Direct(OffsetFn),
    /// Offset to WGS84, then the service from the hub to the destination.
    ToHub(OffsetFn),
    /// The service from the source to the hub, then offset from WGS84.
    FromHub(OffsetFn),
    /// Both ends are generic systems.
    Service,
}

/// Offset from an obfuscated system to WGS84, honouring its precision flag.
fn to_wgs84(src: &Projection) -> Option<OffsetFn> {
    match src {
        Projection::Gcj02 { exact: true } => Some(gcj02_to_wgs84_exact),
        Projection::Gcj02 { exact: false } => Some(gcj02_to_wgs84),
        Projection::Bd09 { exact: true } => Some(bd09_to_wgs84_exact),
        Projection::Bd09 { exact: false } => Some(bd09_to_wgs84),
        Projection::Gcj02Mercator => Some(gcj02mc_to_wgs84),
        Projection::Bd09Mercator => Some(bdmc_to_wgs84),
        Projection::Srs(_) => None,
    }
}

fn from_wgs84(dst: &Projection) -> Option<OffsetFn> {
    match dst {
        Projection::Gcj02 { .. } => Some(wgs84_to_gcj02),
        Projection::Bd09 { .. } => Some(wgs84_to_bd09),
        Projection::Gcj02Mercator => Some(wgs84_to_gcj02mc),
        Projection::Bd09Mercator => Some(wgs84_to_bdmc),
        Projection::Srs(_) => None,
    }
}

/// Picks the rule for a pair, `None` when no rule applies.
pub(crate) fn route(src: &Projection, dst: &Projection) -> Option<Route> {
    if src == dst {
        return Some(Route::Identity);
    }

    let (src_kind, dst_kind) = (src.kind(), dst.kind());
    if let Some((_, _, f)) = DIRECT_RULES
        .iter()
        .find(|(s, d, _)| *s == src_kind && *d == dst_kind)
    {
        return Some(Route::Direct(*f));
    }

    match (src_kind, dst_kind) {
        (ProjectionKind::Srs, ProjectionKind::Srs) => Some(Route::Service),
        (_, ProjectionKind::Srs) => to_wgs84(src).map(Route::ToHub),
        (ProjectionKind::Srs, _) => from_wgs84(dst).map(Route::FromHub),
        _ => None,
    }
}

/// Runs an offset function over x/y points, swapping to and from the
/// `(lat, lng)` order the formulas use.
pub(crate) fn apply_offset(points: &[Coord<f64>], f: OffsetFn) -> Vec<Coord<f64>> {
    let convert = |c: &Coord<f64>| {
        let (lat, lng) = f(c.y, c.x);
        coord! { x: lng, y: lat }
    };

    if points.len() >= PARALLEL_THRESHOLD {
        points.par_iter().map(convert).collect()
    } else {
        points.iter().map(convert).collect()
    }
}

/// Transforms `points` from `src` to `dst`.
///
/// Points are x = longitude/easting, y = latitude/northing on both sides.
/// `hub` is the WGS84 system the offset formulas meet the service in,
/// normally [`crate::crs::hub::wgs84`]. An unsupported pair is
/// `Err(CrsError::UnsupportedPair)`, never an empty vector.
pub fn transform_points(
    src: &Projection,
    dst: &Projection,
    points: &[Coord<f64>],
    hub: &Projection,
    service: &dyn GeodeticService,
) -> Result<Vec<Coord<f64>>, CrsError> {
    let route = route(src, dst).ok_or_else(|| CrsError::UnsupportedPair {
        from: src.srs_code().to_string(),
        to: dst.srs_code().to_string(),
    })?;

    match route {
        Route::Identity => Ok(points.to_vec()),
        Route::Direct(f) => {
            trace!("{} -> {}: direct", src, dst);
            Ok(apply_offset(points, f))
        }
        Route::ToHub(f) => {
            trace!("{} -> {}: via {}", src, dst, hub);
            let wgs = apply_offset(points, f);
            service.transform(hub.srs_code(), dst.srs_code(), &wgs)
        }
        Route::FromHub(f) => {
            trace!("{} -> {}: via {}", src, dst, hub);
            let wgs = service.transform(src.srs_code(), hub.srs_code(), points)?;
            Ok(apply_offset(&wgs, f))
        }
        Route::Service => {
            trace!("{} -> {}: geodetic service", src, dst);
            service.transform(src.srs_code(), dst.srs_code(), points)
        }
    }
}
