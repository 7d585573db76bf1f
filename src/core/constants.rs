/// Code of the neutral geodetic hub (WGS84 longitude/latitude).
pub const HUB_CODE: &str = "EPSG:4326";

/// Canonical codes of the obfuscated systems.
pub const GCJ02_CODE: &str = "EPSG:GCJ02";
pub const BD09_CODE: &str = "EPSG:BD09";
pub const GCJ02MC_CODE: &str = "EPSG:GCJ02MC";
pub const BD09MC_CODE: &str = "EPSG:BDMC";

/// Latitude edges closer than this to a pole are pulled inward.
pub const POLE_TOLERANCE: f64 = 1e-6;

/// Distance a pole-touching latitude edge is pulled inward, in degrees.
pub const POLE_DELTA: f64 = 1e-8;

/// Boundary sample count used when the caller does not pick one.
pub const DEFAULT_SAMPLE_DENSITY: usize = 16;

/// Area where the GCJ02 offset applies [min_lng, min_lat, max_lng, max_lat].
pub const CHINA_EXTENTS: [f64; 4] = [72.004, 0.8293, 137.8347, 55.8271];

/// Krasovsky 1940 semi-major axis used by the GCJ02 offset.
pub(crate) const KRASOVSKY_A: f64 = 6378245.0;

/// Krasovsky 1940 first eccentricity squared.
pub(crate) const KRASOVSKY_EE: f64 = 0.006_693_421_622_965_943;

/// Sphere radius of the GCJ02 web Mercator.
pub(crate) const MERCATOR_RADIUS: f64 = 6378137.0;

/// Point batches at least this large run the offset math on the rayon pool.
pub(crate) const PARALLEL_THRESHOLD: usize = 4096;

/// Geographic systems the generic service is assumed to know.
pub const GEOGRAPHIC_CODES: [&str; 12] = [
    "EPSG:4326",
    "EPSG:4490",
    "EPSG:4258",
    "EPSG:4269",
    "EPSG:4267",
    "EPSG:4283",
    "EPSG:4610",
    "EPSG:4214",
    "EPSG:4979",
    "EPSG:4937",
    "CRS:84",
    "OGC:CRS84",
];

/// Codes inside the EPSG 4000..5000 block that are not lon/lat systems,
/// used when a code is missing from the bundled definitions.
pub(crate) const NON_GEOGRAPHIC_4XXX: [u16; 5] = [4328, 4465, 4479, 4936, 4978];
