pub mod ops;
pub mod transformer;

pub use ops::{
    align_rect, apply_geometry, geodetic_equivalent, resolve, transform_points, transform_rect,
};
pub use transformer::{Transformer, TransformerBuilder};
