use crate::core::constants::{GEOGRAPHIC_CODES, NON_GEOGRAPHIC_4XXX};
use crate::util::error::CrsError;
use geo_types::{Coord, coord};
use proj::Proj;

/// Transforms between arbitrary named systems.
///
/// Coordinates are always exchanged as x = longitude/easting,
/// y = latitude/northing.
pub trait GeodeticService: Send + Sync {
    /// Whether `code` names a system this service can transform.
    fn recognizes(&self, code: &str) -> bool;

    /// Whether `code` names a longitude/latitude system.
    fn is_geographic(&self, code: &str) -> bool {
        is_geographic_code(code)
    }

    fn transform(
        &self,
        from: &str,
        to: &str,
        points: &[Coord<f64>],
    ) -> Result<Vec<Coord<f64>>, CrsError>;
}

/// [`GeodeticService`] backed by PROJ.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjService;

impl GeodeticService for ProjService {
    fn recognizes(&self, code: &str) -> bool {
        Proj::new_known_crs(code, code, None).is_ok()
    }

    fn transform(
        &self,
        from: &str,
        to: &str,
        points: &[Coord<f64>],
    ) -> Result<Vec<Coord<f64>>, CrsError> {
        if from == to {
            return Ok(points.to_vec());
        }

        let proj = Proj::new_known_crs(from, to, None)
            .map_err(|e| CrsError::ProjectionError(e.to_string()))?;

        points
            .iter()
            .map(|c| {
                let (x, y) = proj
                    .convert((c.x, c.y))
                    .map_err(|e| CrsError::ProjectionError(e.to_string()))?;
                Ok(coord! { x: x, y: y })
            })
            .collect()
    }
}

/// Lon/lat test by code.
///
/// EPSG codes found in the bundled definitions are geographic when their
/// PROJ string is `+proj=longlat`. Codes missing from the definitions fall
/// back to the EPSG 4xxx block.
pub fn is_geographic_code(code: &str) -> bool {
    if GEOGRAPHIC_CODES.contains(&code) {
        return true;
    }

    let Some(epsg) = code
        .strip_prefix("EPSG:")
        .and_then(|n| n.parse::<u16>().ok())
    else {
        return false;
    };

    match crs_definitions::from_code(epsg) {
        Some(def) => def.proj4.contains("+proj=longlat"),
        None => (4000..5000).contains(&epsg) && !NON_GEOGRAPHIC_4XXX.contains(&epsg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_geographic_code() {
        assert!(is_geographic_code("EPSG:4326"));
        assert!(is_geographic_code("EPSG:4490"));
        assert!(is_geographic_code("CRS:84"));
        assert!(!is_geographic_code("EPSG:3857"));
        assert!(!is_geographic_code("EPSG:4479"));
        assert!(!is_geographic_code("EPSG:27700"));
        assert!(!is_geographic_code("not a code"));
    }

    #[test]
    fn test_projected_codes_in_4xxx_block() {
        // CGCS2000 Gauss-Kruger zones and World Equidistant Cylindrical
        for code in ["EPSG:4491", "EPSG:4547", "EPSG:4554", "EPSG:4087", "EPSG:4088"] {
            assert!(!is_geographic_code(code), "{}", code);
            assert!(!ProjService.is_geographic(code), "{}", code);
        }
        assert!(is_geographic_code("EPSG:4214"));
        assert!(is_geographic_code("EPSG:4612"));
    }

    #[test]
    fn test_proj_service_recognizes() {
        assert!(ProjService.recognizes("EPSG:4326"));
        assert!(ProjService.recognizes("EPSG:3857"));
        assert!(!ProjService.recognizes("EPSG:GCJ02"));
    }

    #[test]
    fn test_proj_service_web_mercator() -> Result<(), CrsError> {
        let out = ProjService.transform(
            "EPSG:4326",
            "EPSG:3857",
            &[coord! { x: 116.3, y: 39.9 }],
        )?;
        assert!((out[0].x - 12_946_456.78).abs() < 1.0);
        assert!(out[0].y > 4_800_000.0 && out[0].y < 4_900_000.0);
        Ok(())
    }

    #[test]
    fn test_proj_service_same_code_is_passthrough() -> Result<(), CrsError> {
        let points = vec![coord! { x: 1.0, y: 2.0 }];
        assert_eq!(ProjService.transform("EPSG:3857", "EPSG:3857", &points)?, points);
        Ok(())
    }
}
