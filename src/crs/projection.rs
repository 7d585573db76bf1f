use crate::core::constants::{
    BD09_CODE, BD09MC_CODE, GCJ02_CODE, GCJ02MC_CODE, POLE_DELTA, POLE_TOLERANCE,
};
use crate::crs::hub;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of a [`Projection`], used to key the transform rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionKind {
    Gcj02,
    Bd09,
    Gcj02Mercator,
    Bd09Mercator,
    Srs,
}

/// A standard system reached through the [`GeodeticService`](crate::GeodeticService).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericSrs {
    code: String,
    latlong: bool,
}

impl GenericSrs {
    pub fn new(code: impl Into<String>, latlong: bool) -> Self {
        Self {
            code: code.into(),
            latlong,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_latlong(&self) -> bool {
        self.latlong
    }
}

/// One supported coordinate reference system.
///
/// Values are immutable once resolved. Equality compares the system only:
/// `Gcj02 { exact: true }` equals `Gcj02 { exact: false }`, and two
/// `Srs` values are equal when their codes are.
///
/// # Example
///
/// ```
/// use sinoproj::Projection;
///
/// let gcj = Projection::Gcj02 { exact: true };
/// assert_eq!(gcj.srs_code(), "EPSG:GCJ02");
/// assert!(gcj.is_latlong());
/// assert_eq!(Projection::Bd09Mercator.geodetic_equivalent().srs_code(), "EPSG:BD09");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Mars coordinates. `exact` picks the iterative inverse toward WGS84.
    Gcj02 { exact: bool },
    /// Baidu coordinates. `exact` picks the iterative inverse toward WGS84.
    Bd09 { exact: bool },
    /// Spherical web Mercator over GCJ02.
    Gcj02Mercator,
    /// Baidu's banded Mercator over BD09.
    Bd09Mercator,
    Srs(GenericSrs),
}

impl Projection {
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Gcj02 { .. } => ProjectionKind::Gcj02,
            Projection::Bd09 { .. } => ProjectionKind::Bd09,
            Projection::Gcj02Mercator => ProjectionKind::Gcj02Mercator,
            Projection::Bd09Mercator => ProjectionKind::Bd09Mercator,
            Projection::Srs(_) => ProjectionKind::Srs,
        }
    }

    /// Stable system code, e.g. `"EPSG:BDMC"` or `"EPSG:3857"`.
    pub fn srs_code(&self) -> &str {
        match self {
            Projection::Gcj02 { .. } => GCJ02_CODE,
            Projection::Bd09 { .. } => BD09_CODE,
            Projection::Gcj02Mercator => GCJ02MC_CODE,
            Projection::Bd09Mercator => BD09MC_CODE,
            Projection::Srs(srs) => srs.code(),
        }
    }

    /// Short human label.
    pub fn label(&self) -> &str {
        match self {
            Projection::Gcj02 { .. } => "GCJ02",
            Projection::Bd09 { .. } => "BD09",
            Projection::Gcj02Mercator => "GCJ02MC",
            Projection::Bd09Mercator => "BD09MC",
            Projection::Srs(srs) => srs.code(),
        }
    }

    pub fn is_latlong(&self) -> bool {
        match self {
            Projection::Gcj02 { .. } | Projection::Bd09 { .. } => true,
            Projection::Gcj02Mercator | Projection::Bd09Mercator => false,
            Projection::Srs(srs) => srs.is_latlong(),
        }
    }

    /// Whether the authority axis order is north first.
    pub fn is_axis_order_ne(&self) -> bool {
        match self {
            Projection::Srs(srs) => srs.is_latlong(),
            _ => true,
        }
    }

    /// Precision flag of the obfuscated geographic systems; `false` elsewhere.
    pub fn is_exact(&self) -> bool {
        match self {
            Projection::Gcj02 { exact } | Projection::Bd09 { exact } => *exact,
            _ => false,
        }
    }

    /// Pulls latitude edges that touch a pole inward by [`POLE_DELTA`].
    ///
    /// Projected systems return the rectangle unchanged.
    pub fn align_bbox(&self, rect: &Rect<f64>) -> Rect<f64> {
        if !self.is_latlong() {
            return *rect;
        }

        let (min, max) = (rect.min(), rect.max());
        let mut min_y = min.y;
        let mut max_y = max.y;
        if (min_y - -90.0).abs() < POLE_TOLERANCE {
            min_y = -90.0 + POLE_DELTA;
        }
        if (max_y - 90.0).abs() < POLE_TOLERANCE {
            max_y = 90.0 - POLE_DELTA;
        }

        Rect::new(coord! { x: min.x, y: min_y }, coord! { x: max.x, y: max_y })
    }

    /// The geographic system used as hub for this one.
    ///
    /// Geographic systems return themselves.
    pub fn geodetic_equivalent(&self) -> Projection {
        if self.is_latlong() {
            return self.clone();
        }

        match self.srs_code() {
            "EPSG:4479" => Projection::Srs(GenericSrs::new("EPSG:4490", true)),
            GCJ02MC_CODE => Projection::Gcj02 { exact: true },
            BD09MC_CODE => Projection::Bd09 { exact: true },
            _ => hub::wgs84().clone(),
        }
    }
}

impl PartialEq for Projection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Projection::Srs(a), Projection::Srs(b)) => a.code() == b.code(),
            _ => self.kind() == other.kind(),
        }
    }
}

impl Eq for Projection {}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rect<f64> {
        Rect::new(coord! { x: -180.0, y: -90.0 }, coord! { x: 180.0, y: 90.0 })
    }

    #[test]
    fn test_equality_ignores_exact_flag() {
        assert_eq!(Projection::Gcj02 { exact: true }, Projection::Gcj02 { exact: false });
        assert_ne!(Projection::Gcj02 { exact: true }, Projection::Bd09 { exact: true });
        assert_ne!(
            Projection::Srs(GenericSrs::new("EPSG:4326", true)),
            Projection::Srs(GenericSrs::new("EPSG:3857", false))
        );
    }

    #[test]
    fn test_metadata() {
        let bdmc = Projection::Bd09Mercator;
        assert_eq!(bdmc.srs_code(), "EPSG:BDMC");
        assert_eq!(bdmc.label(), "BD09MC");
        assert!(!bdmc.is_latlong());
        assert!(bdmc.is_axis_order_ne());
        assert!(!bdmc.is_exact());
        assert_eq!(bdmc.to_string(), "BD09MC");
    }

    #[test]
    fn test_align_bbox_pulls_poles_inward() {
        let aligned = Projection::Gcj02 { exact: true }.align_bbox(&world());
        assert_eq!(aligned.max().y, 90.0 - 1e-8);
        assert_eq!(aligned.min().y, -90.0 + 1e-8);
        assert_eq!(aligned.min().x, -180.0);
        assert_eq!(aligned.max().x, 180.0);
    }

    #[test]
    fn test_align_bbox_projected_is_identity() {
        let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 90.0 });
        assert_eq!(Projection::Gcj02Mercator.align_bbox(&rect), rect);
    }

    #[test]
    fn test_align_bbox_leaves_inner_edges() {
        let rect = Rect::new(coord! { x: 100.0, y: 20.0 }, coord! { x: 120.0, y: 89.0 });
        assert_eq!(Projection::Bd09 { exact: false }.align_bbox(&rect), rect);
    }

    #[test]
    fn test_geodetic_equivalent() {
        assert_eq!(
            Projection::Gcj02Mercator.geodetic_equivalent(),
            Projection::Gcj02 { exact: true }
        );
        let mercator = Projection::Srs(GenericSrs::new("EPSG:3857", false));
        assert_eq!(mercator.geodetic_equivalent().srs_code(), "EPSG:4326");
        let cgcs = Projection::Srs(GenericSrs::new("EPSG:4479", false));
        assert_eq!(cgcs.geodetic_equivalent().srs_code(), "EPSG:4490");
        let bd = Projection::Bd09 { exact: false };
        assert!(bd.geodetic_equivalent().is_latlong());
        assert!(!bd.geodetic_equivalent().is_exact());
    }

    #[test]
    fn test_serde_roundtrip_keeps_flag() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Projection::Bd09 { exact: false })?;
        let back: Projection = serde_json::from_str(&json)?;
        assert!(!back.is_exact());
        assert_eq!(back.kind(), ProjectionKind::Bd09);
        Ok(())
    }
}
