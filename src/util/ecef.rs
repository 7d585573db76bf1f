//! Earth-centred, earth-fixed (ECEF) helpers on the WGS84 ellipsoid.

/// WGS84 semi-major axis in metres.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

fn e2() -> f64 {
    WGS84_F * (2.0 - WGS84_F)
}

/// Converts geodetic longitude/latitude (degrees) and ellipsoidal height
/// (metres) to ECEF `(x, y, z)` in metres.
pub fn lonlat_to_ecef(lon: f64, lat: f64, h: f64) -> (f64, f64, f64) {
    let lam = lon.to_radians();
    let phi = lat.to_radians();
    let sin_phi = phi.sin();
    let n = WGS84_A / (1.0 - e2() * sin_phi * sin_phi).sqrt();

    let x = (n + h) * phi.cos() * lam.cos();
    let y = (n + h) * phi.cos() * lam.sin();
    let z = (n * (1.0 - e2()) + h) * sin_phi;
    (x, y, z)
}

/// Converts ECEF `(x, y, z)` in metres back to longitude/latitude (degrees)
/// and ellipsoidal height (metres).
///
/// Latitude is refined iteratively until it moves less than 1e-12 radians.
pub fn ecef_to_lonlat(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let e2 = e2();
    let p = (x * x + y * y).sqrt();
    let lon = y.atan2(x);

    if p < 1e-9 {
        // on the polar axis
        let b = WGS84_A * (1.0 - WGS84_F);
        let lat = if z >= 0.0 { 90.0 } else { -90.0 };
        return (lon.to_degrees(), lat, z.abs() - b);
    }

    let mut lat = z.atan2(p * (1.0 - e2));
    let mut h = 0.0;
    for _ in 0..16 {
        let sin_lat = lat.sin();
        let n = WGS84_A / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        h = p / lat.cos() - n;
        let next = z.atan2(p * (1.0 - e2 * n / (n + h)));
        let done = (next - lat).abs() < 1e-12;
        lat = next;
        if done {
            break;
        }
    }

    (lon.to_degrees(), lat.to_degrees(), h)
}

/// Builds the rotation that orients a local frame at the ECEF position
/// `(x, y, z)` looking toward the earth's centre with +Z as the up hint.
///
/// Rows 0..3 hold the local x (east), y (north) and z (outward) axes.
pub fn up_rotation(x: f64, y: f64, z: f64) -> [[f64; 4]; 4] {
    let up = [0.0, 0.0, 1.0];

    let mut axis_z = [x, y, z];
    if length_sqr(&axis_z) == 0.0 {
        axis_z[2] = 1.0;
    }
    normalize(&mut axis_z);

    let mut axis_x = cross(&up, &axis_z);
    if length_sqr(&axis_x) == 0.0 {
        // up and z are parallel
        if up[2].abs() == 1.0 {
            axis_z[0] += 0.0001;
        } else {
            axis_z[2] += 0.0001;
        }
        normalize(&mut axis_z);
        axis_x = cross(&up, &axis_z);
    }
    normalize(&mut axis_x);

    let axis_y = cross(&axis_z, &axis_x);

    [
        [axis_x[0], axis_x[1], axis_x[2], 0.0],
        [axis_y[0], axis_y[1], axis_y[2], 0.0],
        [axis_z[0], axis_z[1], axis_z[2], 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

fn length_sqr(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

fn normalize(v: &mut [f64; 3]) {
    let len = length_sqr(v).sqrt();
    if len > 0.0 {
        v.iter_mut().for_each(|c| *c /= len);
    }
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
