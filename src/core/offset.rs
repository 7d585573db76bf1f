//! GCJ02 and BD09 offset formulas.
//!
//! Every function takes `(lat, lng)` and returns `(lat, lng)` in degrees.
//! Callers working in x/y order must swap at the call site.

use crate::core::constants::{CHINA_EXTENTS, KRASOVSKY_A, KRASOVSKY_EE};
use std::f64::consts::PI;

const X_PI: f64 = PI * 3000.0 / 180.0;

/// Convergence threshold of the exact GCJ02 inverse, in degrees.
const EXACT_THRESHOLD: f64 = 1e-10;
const EXACT_MAX_ITERATIONS: usize = 30;

/// Returns `true` when the GCJ02 offset does not apply at this position.
pub fn out_of_china(lat: f64, lng: f64) -> bool {
    !(CHINA_EXTENTS[0]..=CHINA_EXTENTS[2]).contains(&lng)
        || !(CHINA_EXTENTS[1]..=CHINA_EXTENTS[3]).contains(&lat)
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// GCJ02 offset `(dlat, dlng)` evaluated at a position.
fn delta(lat: f64, lng: f64) -> (f64, f64) {
    let d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let d_lng = transform_lng(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - KRASOVSKY_EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((KRASOVSKY_A * (1.0 - KRASOVSKY_EE)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (KRASOVSKY_A / sqrt_magic * rad_lat.cos() * PI);
    (d_lat, d_lng)
}

pub fn wgs84_to_gcj02(lat: f64, lng: f64) -> (f64, f64) {
    if out_of_china(lat, lng) {
        return (lat, lng);
    }
    let (d_lat, d_lng) = delta(lat, lng);
    (lat + d_lat, lng + d_lng)
}

/// Single-step inverse. Off by up to a couple of metres.
pub fn gcj02_to_wgs84(lat: f64, lng: f64) -> (f64, f64) {
    if out_of_china(lat, lng) {
        return (lat, lng);
    }
    let (d_lat, d_lng) = delta(lat, lng);
    (lat - d_lat, lng - d_lng)
}

/// Iterative inverse: refines the WGS84 guess until its forward offset lands
/// on the input.
pub fn gcj02_to_wgs84_exact(lat: f64, lng: f64) -> (f64, f64) {
    if out_of_china(lat, lng) {
        return (lat, lng);
    }

    let (mut wgs_lat, mut wgs_lng) = gcj02_to_wgs84(lat, lng);
    for _ in 0..EXACT_MAX_ITERATIONS {
        let (g_lat, g_lng) = wgs84_to_gcj02(wgs_lat, wgs_lng);
        let dy = g_lat - lat;
        let dx = g_lng - lng;
        if dx.abs() < EXACT_THRESHOLD && dy.abs() < EXACT_THRESHOLD {
            break;
        }
        wgs_lat -= dy;
        wgs_lng -= dx;
    }
    (wgs_lat, wgs_lng)
}

pub fn gcj02_to_bd09(lat: f64, lng: f64) -> (f64, f64) {
    let (x, y) = (lng, lat);
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    (z * theta.sin() + 0.006, z * theta.cos() + 0.0065)
}

pub fn bd09_to_gcj02(lat: f64, lng: f64) -> (f64, f64) {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.sin(), z * theta.cos())
}

pub fn wgs84_to_bd09(lat: f64, lng: f64) -> (f64, f64) {
    let (g_lat, g_lng) = wgs84_to_gcj02(lat, lng);
    gcj02_to_bd09(g_lat, g_lng)
}

pub fn bd09_to_wgs84(lat: f64, lng: f64) -> (f64, f64) {
    let (g_lat, g_lng) = bd09_to_gcj02(lat, lng);
    gcj02_to_wgs84(g_lat, g_lng)
}

pub fn bd09_to_wgs84_exact(lat: f64, lng: f64) -> (f64, f64) {
    let (g_lat, g_lng) = bd09_to_gcj02(lat, lng);
    gcj02_to_wgs84_exact(g_lat, g_lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_wgs84_to_gcj02_vector() {
        let (lat, lng) = wgs84_to_gcj02(39.904179, 116.407387);
        assert!((lng - 116.413629).abs() < EPSILON);
        assert!((lat - 39.905582).abs() < EPSILON);
    }

    #[test]
    fn test_gcj02_to_wgs84_exact_vector() {
        let (lat, lng) = gcj02_to_wgs84_exact(39.905582, 116.413629);
        assert!((lng - 116.407387).abs() < EPSILON);
        assert!((lat - 39.904179).abs() < EPSILON);
    }

    #[test]
    fn test_gcj02_to_bd09_vector() {
        let (lat, lng) = gcj02_to_bd09(39.904179, 116.407387);
        assert!((lng - 116.413772).abs() < EPSILON);
        assert!((lat - 39.910501).abs() < EPSILON);
    }

    #[test]
    fn test_exact_inverse_is_tighter_than_fast() {
        let (lat, lng) = (31.23, 121.47);

        let (w_lat, w_lng) = gcj02_to_wgs84_exact(lat, lng);
        let (back_lat, back_lng) = wgs84_to_gcj02(w_lat, w_lng);
        let exact_err = (back_lat - lat).abs().max((back_lng - lng).abs());

        let (w_lat, w_lng) = gcj02_to_wgs84(lat, lng);
        let (back_lat, back_lng) = wgs84_to_gcj02(w_lat, w_lng);
        let fast_err = (back_lat - lat).abs().max((back_lng - lng).abs());

        assert!(exact_err < 1e-9);
        assert!(fast_err < 1e-4);
        assert!(exact_err < fast_err);
    }

    #[test]
    fn test_out_of_china_is_identity() {
        // Paris
        assert!(out_of_china(48.8566, 2.3522));
        assert_eq!(wgs84_to_gcj02(48.8566, 2.3522), (48.8566, 2.3522));
        assert_eq!(gcj02_to_wgs84_exact(48.8566, 2.3522), (48.8566, 2.3522));
    }

    #[test]
    fn test_bd09_gcj02_roundtrip() {
        let (b_lat, b_lng) = gcj02_to_bd09(39.9, 116.3);
        let (lat, lng) = bd09_to_gcj02(b_lat, b_lng);
        assert!((lat - 39.9).abs() < EPSILON);
        assert!((lng - 116.3).abs() < EPSILON);
    }
}
