use crate::core::constants::HUB_CODE;
use crate::crs::projection::{GenericSrs, Projection};
use std::sync::OnceLock;

static WGS84: OnceLock<Projection> = OnceLock::new();

/// The neutral geodetic hub (EPSG:4326), built once per process.
pub fn wgs84() -> &'static Projection {
    WGS84.get_or_init(|| Projection::Srs(GenericSrs::new(HUB_CODE, true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_is_shared() {
        let a = wgs84();
        let b = wgs84();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.srs_code(), "EPSG:4326");
        assert!(a.is_latlong());
    }

    #[test]
    fn test_hub_init_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| wgs84() as *const Projection as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
