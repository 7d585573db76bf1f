//! Projected ("Mercator") counterparts of GCJ02 and BD09.
//!
//! Same `(lat, lng)` calling convention as [`crate::core::offset`]; on the
//! projected side the pair is `(northing, easting)` in metres.

use crate::core::constants::MERCATOR_RADIUS;
use crate::core::offset::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
};
use std::f64::consts::PI;

/// Northing thresholds selecting a row of [`MC_TO_LL`].
const MC_BANDS: [f64; 6] = [12890594.86, 8362377.87, 5591021.0, 3481989.83, 1678043.12, 0.0];

/// Latitude thresholds selecting a row of [`LL_TO_MC`].
const LL_BANDS: [f64; 6] = [75.0, 60.0, 45.0, 30.0, 15.0, 0.0];

/// Baidu's projected-to-geographic polynomial coefficients, one row per band.
const MC_TO_LL: [[f64; 10]; 6] = [
    [
        1.410526172116255e-8, 0.00000898305509648872, -1.9939833816331, 200.9824383106796,
        -187.2403703815547, 91.6087516669843, -23.38765649603339, 2.57121317296198,
        -0.03801003308653, 17337981.2,
    ],
    [
        -7.435856389565537e-9, 0.000008983055097726239, -0.78625201886289, 96.32687599759846,
        -1.85204757529826, -59.36935905485877, 47.40033549296737, -16.50741931063887,
        2.28786674699375, 10260144.86,
    ],
    [
        -3.030883460898826e-8, 0.00000898305509983578, 0.30071316287616, 59.74293618442277,
        7.357984074871, -25.38371002664745, 13.45380521110908, -3.29883767235584,
        0.32710905363475, 6856817.37,
    ],
    [
        -1.981981304930552e-8, 0.000008983055099779535, 0.03278182852591, 40.31678527705744,
        0.65659298677277, -4.44255534477492, 0.85341911805263, 0.12923347998204,
        -0.04625736007561, 4482777.06,
    ],
    [
        3.09191371068437e-9, 0.000008983055096812155, 0.00006995724062, 23.10934304144901,
        -0.00023663490511, -0.6321817810242, -0.00663494467273, 0.03430082397953,
        -0.00466043876332, 2555164.4,
    ],
    [
        2.890871144776878e-9, 0.000008983055095805407, -3.068298e-8, 7.47137025468032,
        -0.00000353937994, -0.02145144861037, -0.00001234426596, 0.00010322952773,
        -0.00000323890364, 826088.5,
    ],
];

/// Baidu's geographic-to-projected polynomial coefficients, one row per band.
const LL_TO_MC: [[f64; 10]; 6] = [
    [
        -0.0015702102444, 111320.7020616939, 1704480524535203.0, -10338987376042340.0,
        26112667856603880.0, -35149669176653700.0, 26595700718403920.0, -10725012454188240.0,
        1800819912950474.0, 82.5,
    ],
    [
        0.0008277824516172526, 111320.7020463578, 647795574.6671607, -4082003173.641316,
        10774905663.51142, -15171875531.51559, 12053065338.62167, -5124939663.577472,
        913311935.9512032, 67.5,
    ],
    [
        0.00337398766765, 111320.7020202162, 4481351.045890365, -23393751.19931662,
        79682215.47186455, -115964993.2797253, 97236711.15602145, -43661946.33752821,
        8477230.501135234, 52.5,
    ],
    [
        0.00220636496208, 111320.7020209128, 51751.86112841131, 3796837.749470245,
        992013.7397791013, -1221952.21711287, 1340652.697009075, -620943.6990984312,
        144416.9293806241, 37.5,
    ],
    [
        -0.0003441963504368392, 111320.7020576856, 278.2353980772752, 2485758.690035394,
        6070.750963243378, 54821.18345352118, 9540.606633304236, -2710.55326746645,
        1405.483844121726, 22.5,
    ],
    [
        -0.0003218135878613132, 111320.7020701615, 0.00369383431289, 823725.6402795718,
        0.46104986909093, 2351.343141331292, 1.58060784298199, 8.77738589078284,
        0.37238884252424, 7.45,
    ],
];

/// BD09 latitudes are clamped to this range before projecting.
const BD09MC_MAX_LAT: f64 = 74.0;

/// Evaluates one band polynomial. Input and output are in `(x, y)` order.
fn convert(x: f64, y: f64, factors: &[f64; 10]) -> (f64, f64) {
    let out_x = factors[0] + factors[1] * x.abs();
    let d = y.abs() / factors[9];
    let out_y = factors[2]
        + factors[3] * d
        + factors[4] * d.powi(2)
        + factors[5] * d.powi(3)
        + factors[6] * d.powi(4)
        + factors[7] * d.powi(5)
        + factors[8] * d.powi(6);

    (out_x.copysign(x), out_y.copysign(y))
}

fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        return lng;
    }
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

pub fn bd09_to_bdmc(lat: f64, lng: f64) -> (f64, f64) {
    let lng = wrap_lng(lng);
    let lat = lat.clamp(-BD09MC_MAX_LAT, BD09MC_MAX_LAT);

    let band = LL_BANDS
        .iter()
        .position(|b| lat.abs() >= *b)
        .unwrap_or(LL_BANDS.len() - 1);
    let (x, y) = convert(lng, lat, &LL_TO_MC[band]);
    (y, x)
}

pub fn bdmc_to_bd09(y: f64, x: f64) -> (f64, f64) {
    let band = MC_BANDS
        .iter()
        .position(|b| y.abs() >= *b)
        .unwrap_or(MC_BANDS.len() - 1);
    let (lng, lat) = convert(x, y, &MC_TO_LL[band]);
    (lat, lng)
}

pub fn gcj02_to_gcj02mc(lat: f64, lng: f64) -> (f64, f64) {
    let x = lng.to_radians() * MERCATOR_RADIUS;
    let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * MERCATOR_RADIUS;
    (y, x)
}

pub fn gcj02mc_to_gcj02(y: f64, x: f64) -> (f64, f64) {
    let lng = (x / MERCATOR_RADIUS).to_degrees();
    let lat = (2.0 * (y / MERCATOR_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    (lat, lng)
}

pub fn gcj02_to_bdmc(lat: f64, lng: f64) -> (f64, f64) {
    let (b_lat, b_lng) = gcj02_to_bd09(lat, lng);
    bd09_to_bdmc(b_lat, b_lng)
}

pub fn bdmc_to_gcj02(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = bdmc_to_bd09(y, x);
    bd09_to_gcj02(lat, lng)
}

pub fn bd09_to_gcj02mc(lat: f64, lng: f64) -> (f64, f64) {
    let (g_lat, g_lng) = bd09_to_gcj02(lat, lng);
    gcj02_to_gcj02mc(g_lat, g_lng)
}

pub fn gcj02mc_to_bd09(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = gcj02mc_to_gcj02(y, x);
    gcj02_to_bd09(lat, lng)
}

pub fn gcj02mc_to_bdmc(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = gcj02mc_to_bd09(y, x);
    bd09_to_bdmc(lat, lng)
}

pub fn bdmc_to_gcj02mc(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = bdmc_to_gcj02(y, x);
    gcj02_to_gcj02mc(lat, lng)
}

pub fn wgs84_to_gcj02mc(lat: f64, lng: f64) -> (f64, f64) {
    let (g_lat, g_lng) = wgs84_to_gcj02(lat, lng);
    gcj02_to_gcj02mc(g_lat, g_lng)
}

pub fn gcj02mc_to_wgs84(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = gcj02mc_to_gcj02(y, x);
    gcj02_to_wgs84(lat, lng)
}

pub fn wgs84_to_bdmc(lat: f64, lng: f64) -> (f64, f64) {
    let (b_lat, b_lng) = wgs84_to_bd09(lat, lng);
    bd09_to_bdmc(b_lat, b_lng)
}

pub fn bdmc_to_wgs84(y: f64, x: f64) -> (f64, f64) {
    let (lat, lng) = bdmc_to_bd09(y, x);
    bd09_to_wgs84(lat, lng)
}
