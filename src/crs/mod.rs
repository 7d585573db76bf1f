pub mod dispatch;
pub mod hub;
pub mod projection;
pub mod rect;
pub mod registry;
pub mod service;

pub use dispatch::transform_points;
pub use projection::{GenericSrs, Projection, ProjectionKind};
pub use rect::{align_rect, transform_rect};
pub use registry::{SrsCode, resolve_with};
pub use service::{GeodeticService, ProjService, is_geographic_code};
