pub mod constants;
pub mod envelope;
pub mod mercator;
pub mod offset;

pub use constants::{
    BD09_CODE, BD09MC_CODE, CHINA_EXTENTS, DEFAULT_SAMPLE_DENSITY, GCJ02_CODE, GCJ02MC_CODE,
    GEOGRAPHIC_CODES, HUB_CODE, POLE_DELTA, POLE_TOLERANCE,
};
pub use envelope::{calculate_bbox, generate_envelope_points};
